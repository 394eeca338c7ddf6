//! Market Dashboard Example
//!
//! Builds a small market table, then drives the enhancer the way a UI would:
//! keystrokes into the search input, clicks on the header cells, a
//! click-to-copy trigger and the theme toggle. Prints the table after each
//! interaction.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{Event, Key, Modifiers, Table, ThemeMode};
use tablekit::prelude::*;

fn sample_table() -> Table {
    let mut table = Table::new(["Symbol", "Price", "Change", "Volume"]);
    table.push_row(["AAPL", "189.25", "1.2%", "52.3M"]);
    table.push_row(["MSFT", "402.10", "−0.4%", "18.9M"]);
    table.push_row(["NVDA", "1,150.00", "3.8%", "41.2M"]);
    table.push_row(["AMZN", "178.30", "−1.1%", "33.0M"]);
    table.push_row(["TSM", "162.80", "0.9%", "9.4M"]);
    table
}

fn print_table(table: &Table) {
    let widths = table.column_widths();

    let header: Vec<String> = table
        .header()
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{:<width$}", cell.label))
        .collect();
    println!("{}", header.join(" "));

    for row in table.visible_rows() {
        let line: Vec<String> = row
            .cells()
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| {
                let text: String = cell
                    .display()
                    .iter()
                    .map(|span| {
                        if span.emphasized {
                            format!("\x1b[1;33m{}\x1b[0m", span.text)
                        } else {
                            span.text.clone()
                        }
                    })
                    .collect();
                // Pad on the raw width; escape codes don't take columns.
                let pad = width.saturating_sub(cell.display_width());
                format!("{}{}", text, " ".repeat(pad))
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("dashboard.log")?,
    )?;

    let options = EnhancerOptions {
        search_input: true,
        highlight_matches: true,
    };
    let mut enhancer = TableEnhancer::new(sample_table(), options)?;

    println!("== initial ==");
    print_table(enhancer.table());

    println!("== sort by Volume (click column 3) ==");
    enhancer.handle_event(&Event::HeaderClick { column: 3 });
    print_table(enhancer.table());

    println!("== again: toggles to descending ==");
    enhancer.handle_event(&Event::HeaderClick { column: 3 });
    print_table(enhancer.table());

    println!("== type \"ms\" into the search box ==");
    for c in "ms".chars() {
        enhancer.handle_event(&Event::Key {
            key: Key::Char(c),
            modifiers: Modifiers::new(),
        });
    }
    print_table(enhancer.table());

    println!("== clear the query ==");
    enhancer.handle_event(&Event::Input {
        value: String::new(),
    });
    print_table(enhancer.table());

    // Click-to-copy: the trigger copies the first visible symbol.
    let mut copy = CopyOnClick::new(MemoryClipboard::new());
    copy.register("copy-top-symbol", "top-symbol");
    let top = enhancer
        .table()
        .visible_rows()
        .next()
        .and_then(|row| row.cell(0))
        .map(|cell| cell.text().to_string());
    copy.on_click("copy-top-symbol", |id| {
        (id == "top-symbol").then(|| top.clone()).flatten()
    });
    println!(
        "copied top symbol: {:?}",
        copy.clipboard().contents().unwrap_or("<nothing>")
    );

    // Theme toggle, persisted in memory for the session.
    let mut theme = ThemeToggle::new(MemoryThemeStore::new(), ThemeMode::Dark);
    println!("theme: {:?}", theme.current());
    theme.toggle();
    println!("theme after toggle: {:?}", theme.current());

    Ok(())
}
