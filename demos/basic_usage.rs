//! Basic build -> mutate -> query -> save -> reload flow.

use adjacency_graph::*;

fn main() -> GraphResult<()> {
    // Build a small road network
    let mut graph = GraphBuilder::<String, u32>::new()
        .edge("amsterdam".into(), "berlin".into(), 655)
        .edge("berlin".into(), "prague".into(), 350)
        .edge("prague".into(), "vienna".into(), 330)
        .edge("amsterdam".into(), "paris".into(), 500)
        .vertex("oslo".into())
        .build();

    println!(
        "Graph created with {} vertices and {} edges",
        graph.len(),
        graph.edge_count()
    );

    // Strict insertion: both endpoints must exist
    let rome = "rome".to_string();
    if let Err(e) = graph.insert_edge("vienna".into(), rome.clone(), 1120) {
        println!("Rejected: {}", e);
    }
    graph.add_vertex(rome.clone());
    graph.insert_edge("vienna".into(), rome, 1120)?;

    // Upsert replaces the weight instead of adding a parallel edge
    let old = graph.insert_or_assign_edge("amsterdam".into(), "berlin".into(), 660)?;
    println!("amsterdam -> berlin was {:?}, now 660", old);

    let amsterdam = "amsterdam".to_string();
    println!("Neighbors of {}:", amsterdam);
    for next in graph.adjacent_vertices(&amsterdam)? {
        let weight = graph.get_weight(&amsterdam, next)?;
        println!("  {} ({} km)", next, weight);
    }
    println!(
        "Degree of berlin: in {}, out {}",
        graph.degree_in(&"berlin".to_string())?,
        graph.degree_out(&"berlin".to_string())?
    );

    // Save to file
    let path = std::env::temp_dir().join("basic_usage.graph");
    let lines = graph.save_to_file(&path)?;
    println!("\nSaved {} lines to {}", lines, path.display());

    // Reload and verify
    let mut loaded: Graph<String, u32> = Graph::new();
    loaded.load_from_file(&path)?;
    println!(
        "Reloaded: {} vertices, {} edges",
        loaded.len(),
        loaded.edge_count()
    );
    assert_eq!(loaded, graph);

    Ok(())
}
