// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Import command - replace the graph, or just node positions, from JSON

use crate::commands::{load_graph, save_graph};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the import command
pub fn run(data_dir: &Path, file: PathBuf, positions: bool) -> Result<()> {
    let payload = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut graph = load_graph(data_dir)?;

    if positions {
        graph
            .import_positions(&payload)
            .with_context(|| format!("Failed to parse positions from {}", file.display()))?;
        // Position updates bypass the CRUD layer, flag them for saving
        graph.mark_changed();
        info!("Imported positions for existing nodes");
    } else {
        graph
            .import_graph(&payload)
            .with_context(|| format!("Failed to parse graph from {}", file.display()))?;
        info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph imported");
    }

    save_graph(data_dir, &mut graph)?;
    println!(
        "Imported {}: {} node(s), {} edge(s)",
        file.display(),
        graph.node_count(),
        graph.edge_count()
    );

    Ok(())
}
