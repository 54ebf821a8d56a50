// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Coursegraph CLI - course prerequisite graph editor and path analyzer

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use coursegraph::commands;

#[derive(Parser)]
#[command(name = "coursegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Data directory override
    #[arg(long, env = "COURSEGRAPH_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage course nodes
    Node {
        /// Action: add, rename, delete, list
        action: String,

        /// Node id (auto-assigned on add when omitted)
        id: Option<i64>,

        /// Course name
        name: Option<String>,

        /// X coordinate
        #[arg(long, default_value_t = 0.0)]
        x: f64,

        /// Y coordinate
        #[arg(long, default_value_t = 0.0)]
        y: f64,
    },

    /// Manage prerequisite edges
    Edge {
        /// Action: add, rename, delete, list
        action: String,

        /// Source node id
        from: Option<i64>,

        /// Target node id
        to: Option<i64>,

        /// Weight-bearing label, e.g. C3
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Show a node with its prerequisites and postrequisites
    Info {
        /// Node id
        id: i64,
    },

    /// Analyze paths through the graph
    Path {
        /// Action: shortest, longest, all, highlight
        action: String,

        /// Start node id
        from: Option<i64>,

        /// End node id
        to: Option<i64>,
    },

    /// Print the adjacency or incidence matrix
    Matrix {
        /// Matrix kind: adjacency, incidence
        kind: String,
    },

    /// Export the graph (or node positions) as JSON
    Export {
        /// Export node positions only
        #[arg(long)]
        positions: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Import a graph (or node positions) from JSON
    Import {
        /// Input file
        file: std::path::PathBuf,

        /// Import node positions only
        #[arg(long)]
        positions: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let data_dir = commands::resolve_data_dir(cli.data_dir.clone());

    // Execute command
    match cli.command {
        Commands::Node { action, id, name, x, y } => {
            commands::node::run(&data_dir, &action, id, name, x, y)
        }
        Commands::Edge { action, from, to, label } => {
            commands::edge::run(&data_dir, &action, from, to, label)
        }
        Commands::Info { id } => {
            commands::info::run(&data_dir, id)
        }
        Commands::Path { action, from, to } => {
            commands::path::run(&data_dir, &action, from, to)
        }
        Commands::Matrix { kind } => {
            commands::matrix::run(&data_dir, &kind)
        }
        Commands::Export { positions, output } => {
            commands::export::run(&data_dir, positions, output)
        }
        Commands::Import { file, positions } => {
            commands::import::run(&data_dir, file, positions)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
