// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Info command - show a node with its prerequisites and postrequisites

use crate::commands::load_graph;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Run the info command
pub fn run(data_dir: &Path, id: i64) -> Result<()> {
    let graph = load_graph(data_dir)?;

    let Some(node) = graph.node(id) else {
        anyhow::bail!("Node {} not found", id);
    };

    println!("{}: {}", "ID".bold(), node.id);
    println!("{}: {}", "Name".bold(), node.name);

    let prerequisites = graph.predecessors(id);
    if prerequisites.is_empty() {
        println!("{}: none", "Prerequisites".bold());
    } else {
        println!("{}:", "Prerequisites".bold());
        for pre in prerequisites {
            println!("  - {}", graph.node_label(pre).unwrap_or_else(|| pre.to_string()));
        }
    }

    let postrequisites = graph.successors(id);
    if postrequisites.is_empty() {
        println!("{}: none", "Postrequisites".bold());
    } else {
        println!("{}:", "Postrequisites".bold());
        for post in postrequisites {
            println!("  - {}", graph.node_label(post).unwrap_or_else(|| post.to_string()));
        }
    }

    Ok(())
}
