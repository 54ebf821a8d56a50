// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Matrix command - print the adjacency or incidence matrix

use crate::commands::load_graph;
use crate::matrix::Matrix;
use anyhow::Result;
use std::path::Path;

/// Run the matrix command
pub fn run(data_dir: &Path, kind: &str) -> Result<()> {
    let graph = load_graph(data_dir)?;

    let matrix = match kind {
        "adjacency" | "adj" => graph.adjacency_matrix(),
        "incidence" | "inc" => graph.incidence_matrix(),
        other => {
            anyhow::bail!("Unknown matrix kind: {}. Valid: adjacency, incidence", other);
        }
    };

    if matrix.rows.is_empty() {
        println!("Graph is empty.");
        return Ok(());
    }

    print_table(&matrix);
    Ok(())
}

/// Render a matrix as a plain-text table with aligned columns
fn print_table(matrix: &Matrix) {
    // Display width, not byte length: incidence headers contain arrows
    fn width_of(s: &str) -> usize {
        s.chars().count()
    }
    fn pad(s: &str, width: usize) -> String {
        format!("{s}{}", " ".repeat(width.saturating_sub(width_of(s))))
    }

    let corner = "Nodes";
    let row_width = matrix
        .rows
        .iter()
        .map(|r| width_of(r))
        .chain(std::iter::once(width_of(corner)))
        .max()
        .unwrap_or(0);
    let col_widths: Vec<usize> = matrix
        .columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            matrix
                .cells
                .iter()
                .map(|row| width_of(&row[i]))
                .chain(std::iter::once(width_of(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    print!("{}", pad(corner, row_width));
    for (header, &width) in matrix.columns.iter().zip(&col_widths) {
        print!("  {}", pad(header, width));
    }
    println!();

    for (label, cells) in matrix.rows.iter().zip(&matrix.cells) {
        print!("{}", pad(label, row_width));
        for (cell, &width) in cells.iter().zip(&col_widths) {
            print!("  {}", pad(cell, width));
        }
        println!();
    }
}
