//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjacency_graph::cli::commands;
use adjacency_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg — inspect and edit weighted directed graphs stored as triple files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty triple file
    Create {
        /// Path to the triple file to create
        file: PathBuf,
    },
    /// Display vertex and edge counts
    Info {
        /// Path to the triple file
        file: PathBuf,
    },
    /// List every vertex
    Vertices {
        /// Path to the triple file
        file: PathBuf,
    },
    /// List the outgoing edges of a vertex
    Neighbors {
        /// Path to the triple file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Show in/out degree and self-loop status of a vertex
    Degree {
        /// Path to the triple file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Show the weight of the first edge between two vertices
    Weight {
        /// Path to the triple file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Destination vertex
        target: String,
    },
    /// Declare a vertex
    AddVertex {
        /// Path to the triple file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Add an edge between two existing vertices
    AddEdge {
        /// Path to the triple file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Destination vertex
        target: String,
        /// Edge weight
        weight: f64,
        /// Replace the weight of an existing edge instead of adding a parallel one
        #[arg(long)]
        assign: bool,
    },
    /// Remove a vertex and every edge touching it
    RemoveVertex {
        /// Path to the triple file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Remove the first edge between two vertices
    RemoveEdge {
        /// Path to the triple file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Destination vertex
        target: String,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the triple file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Vertices { file } => commands::cmd_vertices(&file, json),
        Commands::Neighbors { file, vertex } => commands::cmd_neighbors(&file, &vertex, json),
        Commands::Degree { file, vertex } => commands::cmd_degree(&file, &vertex, json),
        Commands::Weight {
            file,
            source,
            target,
        } => commands::cmd_weight(&file, &source, &target, json),
        Commands::AddVertex { file, vertex } => commands::cmd_add_vertex(&file, &vertex, json),
        Commands::AddEdge {
            file,
            source,
            target,
            weight,
            assign,
        } => commands::cmd_add_edge(&file, &source, &target, weight, assign, json),
        Commands::RemoveVertex { file, vertex } => {
            commands::cmd_remove_vertex(&file, &vertex, json)
        }
        Commands::RemoveEdge {
            file,
            source,
            target,
        } => commands::cmd_remove_edge(&file, &source, &target, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidFile { .. } | GraphError::Io(_) => 1,
            GraphError::MalformedRecord { .. } => 2,
            GraphError::UnknownVertex(_) | GraphError::EdgeNotFound { .. } => 4,
        };
        process::exit(code);
    }
}
