//! Writes an in-memory graph as triple-format text.

use std::fmt::{Debug, Display};
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, COMMENT_PREFIX};

/// Writer for the line-oriented triple format.
///
/// Vertices are visited in ascending order. A vertex with outgoing edges
/// produces one `<source> <destination> <weight>` line per edge; a vertex
/// without any produces a single `<vertex>` line so it survives a reload.
///
/// Saving is lossy for parallel edges: [`TripleReader`](super::TripleReader)
/// upserts, so repeated `source destination` lines reload as one edge carrying
/// the last weight written.
pub struct TripleWriter;

impl TripleWriter {
    /// Write `graph` to `path`, replacing its contents. Returns the number of
    /// lines written.
    ///
    /// The output is rendered in memory first, so a graph that cannot be
    /// represented leaves an existing file untouched.
    pub fn write_to_file<V, W>(graph: &Graph<V, W>, path: &Path) -> GraphResult<usize>
    where
        V: Ord + Clone + Debug + Display,
        W: Display,
    {
        let mut buf = Vec::new();
        let lines = Self::write_to(graph, &mut buf)?;

        let mut file = std::fs::File::create(path).map_err(|source| {
            log::warn!("Cannot open {} for writing: {}", path.display(), source);
            GraphError::InvalidFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        file.write_all(&buf)?;
        file.flush()?;
        log::debug!("Saved {} lines to {}", lines, path.display());
        Ok(lines)
    }

    /// Write `graph` to any writer. Returns the number of lines written.
    pub fn write_to<V, W>(graph: &Graph<V, W>, writer: &mut impl Write) -> GraphResult<usize>
    where
        V: Ord + Clone + Debug + Display,
        W: Display,
    {
        let mut lines = 0usize;
        for vertex in graph.vertices() {
            let source = render_token(vertex, lines + 1)?;
            let edges = graph.edges_from(vertex)?;
            if edges.is_empty() {
                writeln!(writer, "{}", source)?;
                lines += 1;
                continue;
            }
            for edge in edges {
                let target = render_token(&edge.target, lines + 1)?;
                let weight = render_token(&edge.weight, lines + 1)?;
                writeln!(writer, "{} {} {}", source, target, weight)?;
                lines += 1;
            }
        }
        Ok(lines)
    }
}

/// Render a value as a single token that reads back unchanged.
fn render_token<T: Display>(value: &T, line: usize) -> GraphResult<String> {
    let token = value.to_string();
    if token.is_empty()
        || token.starts_with(COMMENT_PREFIX)
        || token.chars().any(char::is_whitespace)
    {
        return Err(GraphError::MalformedRecord {
            line,
            reason: format!("{:?} is not a single token", token),
        });
    }
    Ok(token)
}

impl<V, W> Graph<V, W>
where
    V: Ord + Clone + Debug + Display,
    W: Display,
{
    /// Save every vertex and edge to a triple file. Returns the number of
    /// lines written.
    ///
    /// Parallel edges are all written, but reloading keeps only the last one.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> GraphResult<usize> {
        TripleWriter::write_to_file(self, path.as_ref())
    }
}
