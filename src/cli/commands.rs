//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{Edge, GraphResult};

/// Graph type the CLI operates on: string vertices, floating-point weights.
pub type CliGraph = Graph<String, f64>;

/// One edge in JSON export form.
#[derive(Serialize)]
struct ExportedEdge<'a> {
    source: &'a str,
    #[serde(flatten)]
    edge: &'a Edge<String, f64>,
}

/// Load a triple file into a fresh graph.
pub fn open_graph(path: &Path) -> GraphResult<CliGraph> {
    let mut graph = CliGraph::new();
    graph.load_from_file(path)?;
    Ok(graph)
}

/// Create a new empty triple file.
pub fn cmd_create(path: &Path) -> GraphResult<()> {
    CliGraph::new().save_to_file(path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display vertex and edge counts.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = open_graph(path)?;
    let loops = graph
        .vertices()
        .filter(|v| graph.has_loop(v).unwrap_or(false))
        .count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.len(),
            "edges": graph.edge_count(),
            "self_loops": loops,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.len());
        println!("Edges: {}", graph.edge_count());
        println!("Self-loops: {}", loops);
    }
    Ok(())
}

/// List every vertex.
pub fn cmd_vertices(path: &Path, json: bool) -> GraphResult<()> {
    let graph = open_graph(path)?;
    if json {
        let vertices: Vec<&String> = graph.vertices().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&vertices).unwrap_or_default()
        );
    } else {
        for vertex in &graph {
            println!("{}", vertex);
        }
    }
    Ok(())
}

/// List the outgoing edges of a vertex.
pub fn cmd_neighbors(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = open_graph(path)?;
    let vertex = vertex.to_string();
    let edges = graph.edges_from(&vertex)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(edges).unwrap_or_default()
        );
    } else {
        for edge in edges {
            println!("{} {}", vertex, edge);
        }
    }
    Ok(())
}

/// Show in-degree, out-degree and self-loop status of a vertex.
pub fn cmd_degree(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = open_graph(path)?;
    let vertex = vertex.to_string();
    let degree_in = graph.degree_in(&vertex)?;
    let degree_out = graph.degree_out(&vertex)?;
    let has_loop = graph.has_loop(&vertex)?;

    if json {
        let info = serde_json::json!({
            "vertex": vertex,
            "in": degree_in,
            "out": degree_out,
            "loop": has_loop,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertex {}", vertex);
        println!("  In: {}", degree_in);
        println!("  Out: {}", degree_out);
        println!("  Loop: {}", has_loop);
    }
    Ok(())
}

/// Show the weight of the first edge between two vertices.
pub fn cmd_weight(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let graph = open_graph(path)?;
    let weight = graph.get_weight(&source.to_string(), &target.to_string())?;
    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "target": target, "weight": weight})
        );
    } else {
        println!("{}", weight);
    }
    Ok(())
}

/// Declare a vertex.
pub fn cmd_add_vertex(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let mut graph = open_graph(path)?;
    let added = graph.add_vertex(vertex.to_string());
    graph.save_to_file(path)?;
    if json {
        println!("{}", serde_json::json!({"vertex": vertex, "added": added}));
    } else if added {
        println!("Added vertex {}", vertex);
    } else {
        println!("Vertex {} already exists", vertex);
    }
    Ok(())
}

/// Add an edge between two existing vertices.
pub fn cmd_add_edge(
    path: &Path,
    source: &str,
    target: &str,
    weight: f64,
    assign: bool,
    json: bool,
) -> GraphResult<()> {
    let mut graph = open_graph(path)?;
    let (source, target) = (source.to_string(), target.to_string());
    let previous = if assign {
        graph.insert_or_assign_edge(source.clone(), target.clone(), weight)?
    } else {
        graph.insert_edge(source.clone(), target.clone(), weight)?;
        None
    };
    graph.save_to_file(path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "source": source,
                "target": target,
                "weight": weight,
                "replaced": previous,
            })
        );
    } else if let Some(old) = previous {
        println!("Updated {} -> {}: {} (was {})", source, target, weight, old);
    } else {
        println!("Linked {} -> {} ({})", source, target, weight);
    }
    Ok(())
}

/// Remove a vertex and every edge touching it.
pub fn cmd_remove_vertex(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let mut graph = open_graph(path)?;
    let removed = graph.remove_vertex(&vertex.to_string());
    if removed {
        graph.save_to_file(path)?;
    }
    if json {
        println!("{}", serde_json::json!({"vertex": vertex, "removed": removed}));
    } else if removed {
        println!("Removed vertex {}", vertex);
    } else {
        println!("Vertex {} not found", vertex);
    }
    Ok(())
}

/// Remove the first edge between two vertices.
pub fn cmd_remove_edge(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let mut graph = open_graph(path)?;
    let removed = graph.remove_edge(&source.to_string(), &target.to_string());
    if removed.is_some() {
        graph.save_to_file(path)?;
    }
    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "target": target, "removed": removed})
        );
    } else if let Some(weight) = removed {
        println!("Removed {} -> {} ({})", source, target, weight);
    } else {
        println!("No edge {} -> {}", source, target);
    }
    Ok(())
}

/// Export the graph as JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = open_graph(path)?;
    let vertices: Vec<&String> = graph.vertices().collect();
    let edges: Vec<ExportedEdge<'_>> = graph
        .edges()
        .map(|(source, edge)| ExportedEdge {
            source: source.as_str(),
            edge,
        })
        .collect();
    let export = serde_json::json!({
        "vertices": vertices,
        "edges": edges,
    });

    let output = if pretty {
        serde_json::to_string_pretty(&export).unwrap_or_default()
    } else {
        serde_json::to_string(&export).unwrap_or_default()
    };
    println!("{}", output);
    Ok(())
}
