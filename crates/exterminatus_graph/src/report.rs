// SPDX-License-Identifier: MIT OR Apache-2.0
//! Text and JSON rendering of an unused-node analysis.

use crate::node::KindTag;
use crate::unused::{RecursionCycle, UnusedAnalysis, UnusedNodeRecord};
use serde::Serialize;

/// Title line of the text report
pub const REPORT_TITLE: &str = "UNUSED NODES REPORT";

const SEPARATOR_WIDTH: usize = 60;

/// Counts carried in the JSON report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    /// Top-level graphs analyzed
    pub graphs_analyzed: usize,
    /// Unused nodes found across them
    pub unused_total: usize,
}

impl AnalysisSummary {
    /// Summary of an analysis over `graphs_analyzed` graphs
    pub fn new(analysis: &UnusedAnalysis, graphs_analyzed: usize) -> Self {
        Self {
            graphs_analyzed,
            unused_total: analysis.len(),
        }
    }
}

/// Render the text report.
///
/// The output depends only on the arguments; callers supply the timestamp.
pub fn render_report(analysis: &UnusedAnalysis, graphs_analyzed: usize, timestamp: &str) -> String {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut lines = vec![REPORT_TITLE.to_string(), format!("Created: {timestamp}")];

    if graphs_analyzed == 0 {
        lines.push(separator.clone());
        lines.push("No graphs to analyze.".to_string());
        lines.push(separator);
        return lines.join("\n");
    }

    lines.push(format!("Graphs analyzed: {graphs_analyzed}"));
    lines.push(separator.clone());

    if analysis.is_empty() {
        lines.push("All nodes are in use.".to_string());
    } else {
        for record in analysis.records() {
            lines.push(record_line(record));
            lines.extend(group_usage_lines(record));
        }
        lines.extend(analysis.cycles.iter().map(cycle_line));
        lines.push(String::new());
        lines.push(format!("Total unused nodes found: {}", analysis.len()));
    }

    lines.push(separator);
    lines.join("\n")
}

fn record_line(record: &UnusedNodeRecord) -> String {
    format!("[{}] {} ({})", record.containment_path, record.name, record.node_type)
}

fn group_usage_lines(record: &UnusedNodeRecord) -> Vec<String> {
    if record.kind != KindTag::Group || record.instantiated_in.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("  -> Group used in: [{}]", record.instantiated_in.join(", "))];
    if record.connected_in.is_empty() {
        lines.push("  -> Not connected to output anywhere".to_string());
    } else {
        lines.push(format!("  -> Connected to output in: [{}]", record.connected_in.join(", ")));
    }
    lines
}

fn cycle_line(cycle: &RecursionCycle) -> String {
    format!("! recursion stopped at {} (graph {} re-entered)", cycle.path, cycle.graph_name)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: AnalysisSummary,
    records: Vec<&'a UnusedNodeRecord>,
    cycles: &'a [RecursionCycle],
}

/// Render the analysis as pretty-printed JSON
pub fn render_json(analysis: &UnusedAnalysis, graphs_analyzed: usize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        summary: AnalysisSummary::new(analysis, graphs_analyzed),
        records: analysis.records().collect(),
        cycles: &analysis.cycles,
    })
}
