//! CLI tool for quilt-layout - lays out a JSON item list and prints the frames
//!
//! Usage:
//!   quilt_cli <layout.json>              # Output frames as JSON to stdout
//!   quilt_cli <layout.json> -o out.json  # Output frames as JSON to file
//!   quilt_cli <layout.json> --map        # Print an ASCII occupancy map
//!
//! Input document:
//!   { "breadth": 800, "config": { "blockSize": {...}, "direction": "vertical" }, "items": [...] }
//!
//! Set `RUST_LOG=debug` (or `trace`) to see relayout and placement events.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use quilt_layout::{ItemList, LayoutConfig, LayoutDirector, PlacedFrame, Result, Size};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDocument {
    breadth: f32,
    #[serde(default)]
    config: LayoutConfig,
    items: ItemList,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutReport {
    content_size: Size,
    cross_bound: u32,
    frames: Vec<PlacedFrame>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let Some(input_path) = args.get(1) else {
        eprintln!("Usage: quilt_cli <layout.json> [-o output.json | --map]");
        std::process::exit(1);
    };
    let flag = args.get(2).map(String::as_str);
    let output_path = match flag {
        Some("-o") => args.get(3),
        _ => None,
    };

    if let Err(e) = run(input_path, flag == Some("--map"), output_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(input_path: &str, map: bool, output_path: Option<&String>) -> Result<()> {
    let document = load_document(input_path)?;
    let report = build_report(document)?;

    if map {
        print!("{}", occupancy_map(&report.frames));
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&report)?;
    match output_path {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {}", path);
        }
        None => writeln!(io::stdout(), "{}", json)?,
    }
    Ok(())
}

fn load_document(path: &str) -> Result<LayoutDocument> {
    let data = fs::read_to_string(path)?;
    parse_document(&data)
}

fn parse_document(data: &str) -> Result<LayoutDocument> {
    Ok(serde_json::from_str(data)?)
}

fn build_report(document: LayoutDocument) -> Result<LayoutReport> {
    let mut director =
        LayoutDirector::with_config(document.items, document.breadth, document.config)?;
    let frames = director.layout_all().to_vec();
    let cross_bound = director.state().cross_bound;
    Ok(LayoutReport {
        content_size: director.preferred_content_size(),
        cross_bound,
        frames,
    })
}

/// One character per block; items are labelled 0-9 then a-z, cycling.
fn occupancy_map(frames: &[PlacedFrame]) -> String {
    const LABELS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let columns = frames
        .iter()
        .map(|f| f.cell.column + f.span.columns)
        .max()
        .unwrap_or(0) as usize;
    let rows = frames
        .iter()
        .map(|f| f.cell.row + f.span.rows)
        .max()
        .unwrap_or(0) as usize;

    let mut grid = vec![vec!['.'; columns]; rows];
    for placed in frames {
        let label = LABELS
            .get(placed.index % LABELS.len())
            .map_or('?', |b| char::from(*b));
        for cell in placed.cells() {
            if let Some(slot) = grid
                .get_mut(cell.row as usize)
                .and_then(|row| row.get_mut(cell.column as usize))
            {
                *slot = label;
            }
        }
    }

    let mut out = String::with_capacity(rows * (columns + 1));
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}
