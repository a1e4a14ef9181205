//! Reads triple-format text into an in-memory graph.

use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::str::FromStr;

use crate::graph::Graph;
use crate::types::{
    GraphError, GraphResult, COMMENT_PREFIX, EDGE_RECORD_TOKENS, VERTEX_RECORD_TOKENS,
};

/// One parsed line of a triple file.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<V, W> {
    /// `<vertex>`: declares a vertex.
    Vertex(V),
    /// `<source> <destination> <weight>`: upserts an edge.
    Edge(V, V, W),
}

/// Reader for the line-oriented triple format.
///
/// Records reference vertices freely: loading declares every endpoint it
/// meets, unlike [`Graph::insert_edge`]. Edge records are applied as upserts,
/// so a repeated `source destination` pair keeps the last weight read. A graph
/// with parallel edges therefore does not survive a save and reload intact.
///
/// The whole input is parsed before the graph is touched. The first malformed
/// line aborts the load with [`GraphError::MalformedRecord`] and the graph is
/// left as it was.
pub struct TripleReader;

impl TripleReader {
    /// Load a triple file into `graph`. Returns the number of records applied.
    pub fn read_from_file<V, W>(graph: &mut Graph<V, W>, path: &Path) -> GraphResult<usize>
    where
        V: Ord + Clone + Debug + FromStr,
        W: FromStr,
    {
        let file = File::open(path).map_err(|source| {
            log::warn!("Cannot open {} for reading: {}", path.display(), source);
            GraphError::InvalidFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::read_into(graph, BufReader::new(file))
    }

    /// Load triple-format text from any buffered reader into `graph`.
    pub fn read_into<V, W>(graph: &mut Graph<V, W>, reader: impl BufRead) -> GraphResult<usize>
    where
        V: Ord + Clone + Debug + FromStr,
        W: FromStr,
    {
        let records = Self::parse::<V, W>(reader)?;
        let count = records.len();
        for record in records {
            match record {
                Record::Vertex(vertex) => {
                    graph.add_vertex(vertex);
                }
                Record::Edge(source, target, weight) => {
                    graph.upsert_edge(source, target, weight);
                }
            }
        }
        log::debug!("Loaded {} records", count);
        Ok(count)
    }

    /// Parse every record without applying any of them.
    pub fn parse<V, W>(reader: impl BufRead) -> GraphResult<Vec<Record<V, W>>>
    where
        V: FromStr,
        W: FromStr,
    {
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(malformed(line_no, "line is not valid UTF-8".to_string()));
                }
                Err(e) => return Err(e.into()),
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                continue;
            }
            records.push(parse_record(trimmed, line_no)?);
        }
        Ok(records)
    }
}

/// Parse one non-blank, non-comment line.
fn parse_record<V: FromStr, W: FromStr>(line: &str, line_no: usize) -> GraphResult<Record<V, W>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [vertex] => Ok(Record::Vertex(parse_token(vertex, "vertex", line_no)?)),
        [source, target, weight] => Ok(Record::Edge(
            parse_token(source, "source", line_no)?,
            parse_token(target, "destination", line_no)?,
            parse_token(weight, "weight", line_no)?,
        )),
        _ => Err(malformed(
            line_no,
            format!(
                "expected {} or {} tokens, found {}",
                VERTEX_RECORD_TOKENS,
                EDGE_RECORD_TOKENS,
                tokens.len()
            ),
        )),
    }
}

fn parse_token<T: FromStr>(token: &str, field: &str, line_no: usize) -> GraphResult<T> {
    token
        .parse()
        .map_err(|_| malformed(line_no, format!("cannot parse {} from {:?}", field, token)))
}

fn malformed(line: usize, reason: String) -> GraphError {
    log::warn!("Malformed record on line {}: {}", line, reason);
    GraphError::MalformedRecord { line, reason }
}

impl<V, W> Graph<V, W>
where
    V: Ord + Clone + Debug + FromStr,
    W: FromStr,
{
    /// Merge the records of a triple file into this graph, creating every
    /// vertex the file references. Returns the number of records applied.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> GraphResult<usize> {
        TripleReader::read_from_file(self, path.as_ref())
    }
}
