//! Text loaders for graphs and heuristic tables.
//!
//! Graph files hold one edge per line, `v1, v2, weight`. Heuristic files hold one estimate per
//! line, `from to estimate`, separated by whitespace. Files are read completely before parsing
//! and any bad line fails the whole load.

use crate::error::{Error, Result};
use crate::graphlib::{Graph, GraphOptions};
use crate::heuristic::HeuristicTable;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub graph: GraphOptions,
    /// Skip lines that are empty after trimming instead of rejecting them.
    pub skip_blank_lines: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            graph: GraphOptions::undirected(),
            skip_blank_lines: true,
        }
    }
}

fn parse_error(origin: &str, line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        origin: origin.to_string(),
        line,
        message: message.into(),
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_weight(raw: &str) -> std::result::Result<f64, String> {
    let weight: f64 = raw
        .parse()
        .map_err(|_| format!("weight is not a number: {raw:?}"))?;
    if !weight.is_finite() {
        return Err(format!("weight must be finite: {raw:?}"));
    }
    if weight < 0.0 {
        return Err(format!("weight must not be negative: {raw:?}"));
    }
    Ok(weight)
}

/// Splits `v1, v2, weight`, tolerating tuple-style parentheses around the line.
fn parse_edge_line(line: &str) -> std::result::Result<(&str, &str, f64), String> {
    let line = line
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim();
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [v1, v2, weight] = fields.as_slice() else {
        return Err(format!(
            "expected `v1, v2, weight`, found {} field(s)",
            fields.len()
        ));
    };
    if v1.is_empty() || v2.is_empty() {
        return Err("vertex label is empty".to_string());
    }
    Ok((*v1, *v2, parse_weight(weight)?))
}

/// Parses an edge list. `origin` names the source in error messages.
pub fn parse_edge_list(text: &str, origin: &str, options: LoadOptions) -> Result<Graph> {
    let mut graph = Graph::new(options.graph);
    for (ix, raw) in text.lines().enumerate() {
        if options.skip_blank_lines && raw.trim().is_empty() {
            continue;
        }
        let (v1, v2, weight) =
            parse_edge_line(raw).map_err(|message| parse_error(origin, ix + 1, message))?;
        graph.add_edge(v1, v2, weight)?;
    }
    tracing::debug!(
        origin,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

pub fn read_edge_list(path: impl AsRef<Path>) -> Result<Graph> {
    read_edge_list_with(path, LoadOptions::default())
}

pub fn read_edge_list_with(path: impl AsRef<Path>, options: LoadOptions) -> Result<Graph> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_edge_list(&text, &path.display().to_string(), options)
}

/// Parses a heuristic table. Later lines override earlier ones for the same pair.
pub fn parse_heuristic_table(text: &str, origin: &str) -> Result<HeuristicTable> {
    let mut table = HeuristicTable::new();
    for (ix, raw) in text.lines().enumerate() {
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [from, to, estimate] = fields.as_slice() else {
            return Err(parse_error(
                origin,
                ix + 1,
                format!(
                    "expected `from to estimate`, found {} field(s)",
                    fields.len()
                ),
            ));
        };
        let estimate = parse_weight(estimate).map_err(|message| {
            parse_error(origin, ix + 1, message.replacen("weight", "estimate", 1))
        })?;
        table.insert(*from, *to, estimate);
    }
    tracing::debug!(origin, entries = table.len(), "loaded heuristic table");
    Ok(table)
}

pub fn read_heuristic_table(path: impl AsRef<Path>) -> Result<HeuristicTable> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_heuristic_table(&text, &path.display().to_string())
}
