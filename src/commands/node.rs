// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Node management commands - add, rename, delete, list

use crate::commands::{load_graph, save_graph};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Run a node command
pub fn run(
    data_dir: &Path,
    action: &str,
    id: Option<i64>,
    name: Option<String>,
    x: f64,
    y: f64,
) -> Result<()> {
    let mut graph = load_graph(data_dir)?;

    match action {
        "add" | "create" => {
            let id = id.unwrap_or_else(|| graph.next_node_id());
            let name = name.unwrap_or_else(|| format!("Node {id}"));
            if !graph.add_node(id, &name, x, y) {
                anyhow::bail!("Node {} already exists", id);
            }
            save_graph(data_dir, &mut graph)?;
            println!("Created node {}", graph.node_label(id).unwrap_or_default());
        }

        "rename" | "update" => {
            let id = id.ok_or_else(|| anyhow::anyhow!("node id is required"))?;
            let name = name.ok_or_else(|| anyhow::anyhow!("a new name is required"))?;
            if !graph.rename_node(id, &name) {
                anyhow::bail!("Node {} not found", id);
            }
            save_graph(data_dir, &mut graph)?;
            println!("Renamed node {} to {}", id, name);
        }

        "delete" | "remove" | "rm" => {
            let id = id.ok_or_else(|| anyhow::anyhow!("node id is required"))?;
            let edges_before = graph.edge_count();
            if !graph.delete_node(id) {
                anyhow::bail!("Node {} not found", id);
            }
            let cascaded = edges_before - graph.edge_count();
            save_graph(data_dir, &mut graph)?;
            println!("Deleted node {} and {} incident edge(s)", id, cascaded);
        }

        "list" | "ls" => {
            if graph.is_empty() {
                println!("No nodes defined. Use 'coursegraph node add' to create one.");
                return Ok(());
            }
            println!("Nodes ({}):", graph.node_count());
            for node in graph.nodes() {
                println!(
                    "  {}  ({:.0}, {:.0})",
                    node.label().bold(),
                    node.x,
                    node.y
                );
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: add, rename, delete, list", other);
        }
    }

    Ok(())
}
