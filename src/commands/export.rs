// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - write the graph or its node positions as JSON

use crate::commands::load_graph;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the export command
pub fn run(data_dir: &Path, positions: bool, output: Option<PathBuf>) -> Result<()> {
    let graph = load_graph(data_dir)?;

    if graph.is_empty() {
        eprintln!("Warning: Graph is empty. Use 'coursegraph node add' first.");
    }

    let content = if positions {
        info!("Exporting node positions");
        graph.export_positions()
    } else {
        info!("Exporting full graph");
        graph.export_graph()
    };

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
