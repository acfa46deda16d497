use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pvalue_dots::histogram::{Histogram, TailSummary};

pub fn print_bucket_report(hist: &Histogram) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Correct").add_attribute(Attribute::Bold),
        Cell::new("Guessers"),
        Cell::new("Share"),
        Cell::new("Column"),
    ]);

    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let total = hist.len().max(1) as f64;
    for (k, &count) in hist.counts().iter().enumerate() {
        let bar = "●".repeat(count);
        let (bar_cell, k_cell) = if hist.is_tail(k as u32) {
            (
                Cell::new(bar).fg(Color::Red),
                Cell::new(k).fg(Color::Red).add_attribute(Attribute::Bold),
            )
        } else {
            (Cell::new(bar).fg(Color::Blue), Cell::new(k))
        };
        table.add_row(vec![
            k_cell,
            Cell::new(count),
            Cell::new(format!("{:.1}%", count as f64 / total * 100.0)),
            bar_cell,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_tail_report(summary: &TailSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("Tail (scored {} or more)", summary.threshold))
            .add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![
        Cell::new("Guessers in tail"),
        Cell::new(format!("{} / {}", summary.tail_count, summary.guessers)).fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Simulated share"),
        Cell::new(format!("{:.0}%", summary.simulated_fraction * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Exact p-value"),
        Cell::new(format!("{:.4}", summary.exact_p_value)).add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);

    println!(
        "Tail: {} of {} random guessers scored {} or more ({:.0}%).",
        summary.tail_count,
        summary.guessers,
        summary.threshold,
        summary.simulated_fraction * 100.0
    );
    println!("p-value: {:.4}", summary.exact_p_value);
}
