// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path analysis commands - shortest, longest, all paths, highlighting

use crate::commands::{load_graph, save_graph};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Run a path command
pub fn run(data_dir: &Path, action: &str, from: Option<i64>, to: Option<i64>) -> Result<()> {
    let mut graph = load_graph(data_dir)?;

    match action {
        "shortest" => {
            let (from, to) = require_pair(from, to)?;
            match graph.find_shortest_path(from, to) {
                Some(result) => {
                    println!(
                        "Shortest path: {} (distance {})",
                        format_path(&result.path).green(),
                        result.distance
                    );
                }
                None => println!("No path from {} to {}", from, to),
            }
        }

        "longest" => match graph.find_longest_path() {
            Some(result) => {
                println!(
                    "Longest path: {} (distance {}, {} -> {})",
                    format_path(&result.path).red(),
                    result.distance,
                    result.start,
                    result.end
                );
            }
            None => println!("No path exists between any pair of nodes"),
        },

        "all" => {
            let (from, to) = require_pair(from, to)?;
            let paths = graph.find_all_paths(from, to);
            if paths.is_empty() {
                println!("No path from {} to {}", from, to);
                return Ok(());
            }
            println!("Paths from {} to {} ({}):", from, to, paths.len());
            for path in &paths {
                println!("  {} (distance {})", format_path(path), graph.path_distance(path));
            }
        }

        "highlight" => {
            let (from, to) = require_pair(from, to)?;
            let result = graph.highlight_paths(from, to);
            // Styles ride along in the snapshot so renderers pick them up
            graph.mark_changed();
            save_graph(data_dir, &mut graph)?;

            match result.shortest {
                Some(ref p) => println!(
                    "Shortest: {} (distance {})",
                    format_path(&p.path).green(),
                    p.distance
                ),
                None => println!("Shortest: no path from {} to {}", from, to),
            }
            match result.longest {
                Some(ref p) => println!(
                    "Longest:  {} (distance {})",
                    format_path(&p.path).red(),
                    p.distance
                ),
                None => println!("Longest:  no path exists"),
            }
        }

        other => {
            anyhow::bail!(
                "Unknown action: {}. Valid: shortest, longest, all, highlight",
                other
            );
        }
    }

    Ok(())
}

fn require_pair(from: Option<i64>, to: Option<i64>) -> Result<(i64, i64)> {
    let from = from.ok_or_else(|| anyhow::anyhow!("a start node id is required"))?;
    let to = to.ok_or_else(|| anyhow::anyhow!("an end node id is required"))?;
    Ok((from, to))
}

fn format_path(path: &[i64]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
