// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Edge management commands - connect courses with weighted prerequisites

use crate::commands::{load_graph, save_graph};
use crate::weight::format_weight;
use anyhow::Result;
use std::path::Path;

/// Run an edge command
pub fn run(
    data_dir: &Path,
    action: &str,
    from: Option<i64>,
    to: Option<i64>,
    label: Option<String>,
) -> Result<()> {
    let mut graph = load_graph(data_dir)?;

    match action {
        "add" | "create" => {
            let from = from.ok_or_else(|| anyhow::anyhow!("a source node id is required"))?;
            let to = to.ok_or_else(|| anyhow::anyhow!("a target node id is required"))?;
            let label = label.unwrap_or_else(|| format_weight(1));

            if !graph.add_edge(from, to, &label) {
                if !graph.contains_node(from) || !graph.contains_node(to) {
                    anyhow::bail!("Both nodes must exist: {} and {}", from, to);
                }
                anyhow::bail!("An edge {} -> {} already exists", from, to);
            }
            save_graph(data_dir, &mut graph)?;
            println!("Created edge: {} -> {} [{}]", from, to, label);
        }

        "rename" | "update" => {
            let from = from.ok_or_else(|| anyhow::anyhow!("a source node id is required"))?;
            let to = to.ok_or_else(|| anyhow::anyhow!("a target node id is required"))?;
            let label = label.ok_or_else(|| anyhow::anyhow!("a new label is required"))?;

            if !graph.rename_edge(from, to, &label) {
                anyhow::bail!("No edge found from {} -> {}", from, to);
            }
            save_graph(data_dir, &mut graph)?;
            println!("Updated edge {} -> {} [{}]", from, to, label);
        }

        "delete" | "remove" | "rm" => {
            let from = from.ok_or_else(|| anyhow::anyhow!("a source node id is required"))?;
            let to = to.ok_or_else(|| anyhow::anyhow!("a target node id is required"))?;

            if !graph.delete_edge(from, to) {
                anyhow::bail!("No edge found from {} -> {}", from, to);
            }
            save_graph(data_dir, &mut graph)?;
            println!("Removed edge {} -> {}", from, to);
        }

        "list" | "ls" => {
            if graph.edge_count() == 0 {
                println!("No edges defined. Use 'coursegraph edge add' to create one.");
                return Ok(());
            }
            println!("Edges ({}):", graph.edge_count());
            for edge in graph.edges() {
                let from_label = graph.node_label(edge.from).unwrap_or_else(|| edge.from.to_string());
                let to_label = graph.node_label(edge.to).unwrap_or_else(|| edge.to.to_string());
                println!("  {} --[{}]--> {}", from_label, edge.label, to_label);
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: add, rename, delete, list", other);
        }
    }

    Ok(())
}
