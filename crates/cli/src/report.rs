//! Batch validation of a shape list file into a JSON summary.
//!
//! Input: one shape per line, `<kind> x1 y1 x2 y2 ...`. Blank lines and text
//! after `#` are ignored. Lines that fail to parse or validate are listed
//! under `rejected` with the reason instead of aborting the run.

use anyhow::{Context, Result};
use figures::{Point, Shape, ShapeKind, ShapeList};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ShapeEntry {
    pub line: usize,
    pub kind: String,
    pub vertices: Vec<[f64; 2]>,
    pub centroid: [f64; 2],
    pub area: f64,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Rejected {
    pub line: usize,
    pub input: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub version: &'static str,
    pub shapes: Vec<ShapeEntry>,
    pub total_area: f64,
    pub rejected: Vec<Rejected>,
}

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

fn parse_line(line: &str) -> Result<Shape> {
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));
    let kind: ShapeKind = name.parse()?;
    Ok(Shape::parse(kind, rest)?)
}

/// Build the report for the contents of a shape list file.
pub fn build_report(text: &str) -> Result<Report> {
    let mut list = ShapeList::new();
    let mut lines = Vec::new();
    let mut rejected = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(shape) => {
                list.push(shape);
                lines.push(i + 1);
            }
            Err(e) => {
                tracing::debug!(line = i + 1, error = %e, "rejected");
                rejected.push(Rejected {
                    line: i + 1,
                    input: line.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let mut shapes = Vec::with_capacity(list.len());
    for (shape, line) in list.iter().zip(lines) {
        shapes.push(ShapeEntry {
            line,
            kind: shape.kind().label().to_string(),
            vertices: shape
                .raw_vertices()
                .unwrap_or_default()
                .iter()
                .copied()
                .map(xy)
                .collect(),
            centroid: xy(shape.centroid()?),
            area: shape.area()?,
            text: shape.to_string(),
        });
    }
    Ok(Report {
        version: figures::VERSION,
        total_area: list.total_area()?,
        shapes,
        rejected,
    })
}

/// Read `input`, write the pretty JSON report to `out` (creating parent dirs).
pub fn write_report(input: &Path, out: &Path) -> Result<Report> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let report = build_report(&text)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(report)
}
