//! Console table and CSV export of the ranked results.

use std::io;
use std::path::Path;

use crate::{error::Error, model::report::{ResultRow, RunSummary}};

const HEADERS: [&str; 5] = ["name", "id", "types", "base_stats_total", "defensive_advantages"];

/// Render rows as an aligned table under a heading naming the minimum base stat total.
pub fn render_table(rows: &[ResultRow], min_bst: u32) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                row.id.to_string(),
                row.types.clone(),
                row.base_stats_total.to_string(),
                row.defensive_advantages.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let rank_width = rows.len().saturating_sub(1).to_string().len();

    let header: String = HEADERS
        .iter()
        .zip(widths)
        .map(|(header, width)| format!("  {header:>width$}"))
        .collect();

    let mut lines = vec![
        format!("Top Non-Legendary Pokémon (Base Stats ≥ {min_bst}) sorted by Type Advantages:"),
        format!("{:rank_width$}{header}", ""),
    ];

    for (rank, row) in cells.iter().enumerate() {
        let line: String = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("  {cell:>width$}"))
            .collect();
        lines.push(format!("{rank:<rank_width$}{line}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn print_table(rows: &[ResultRow], min_bst: u32) {
    println!();
    print!("{}", render_table(rows, min_bst));
}

/// Write rows as CSV with a header line.
pub fn write_csv_to<W: io::Write>(writer: W, rows: &[ResultRow]) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if rows.is_empty() {
        csv_writer.write_record(HEADERS)?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

pub fn write_csv(path: &Path, rows: &[ResultRow]) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    write_csv_to(file, rows)
}

/// Print the outcome of a run: error count, then the table and CSV, or the empty-result message.
///
/// # Returns
/// - `Ok(())` - Report printed, and the CSV written when there were results
/// - `Err(Error)` - The CSV file could not be written
pub fn report(summary: &RunSummary, min_bst: u32, output: &Path) -> Result<(), Error> {
    if summary.error_count > 0 {
        println!("\nTotal errors encountered: {}", summary.error_count);
    }

    for (reason, count) in &summary.exclusions {
        tracing::info!("Excluded {} Pokémon: {}", count, reason);
    }

    if summary.rows.is_empty() {
        println!("No Pokémon matched the criteria!");
        return Ok(());
    }

    print_table(&summary.rows, min_bst);

    write_csv(output, &summary.rows)?;
    println!("\nResults saved to '{}'", output.display());

    Ok(())
}
