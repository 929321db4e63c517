// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cross-reference of unused group trees against top-level graphs.

use crate::graph::Graph;
use crate::node::{KindTag, NodeId};
use crate::unused::UnusedAnalysis;

/// Whether a group instance feeds anything in its graph
pub fn is_group_connected_to_output(graph: &Graph, group: NodeId) -> bool {
    match graph.node(group) {
        Some(node) if !node.outputs.is_empty() => graph.has_linked_output(group),
        _ => false,
    }
}

/// Fill `instantiated_in` and `connected_in` of every unused group record.
///
/// For each group instance in each top-level graph, records whose group tree
/// is the same payload get the graph's name appended to `instantiated_in`;
/// when the instance has a linked output the name also goes to
/// `connected_in`. Both lists hold each name once.
pub fn collect_group_usage<'a>(analysis: &mut UnusedAnalysis, top_level: impl IntoIterator<Item = &'a Graph>) {
    for graph in top_level {
        for instance in graph.nodes() {
            let Some(tree) = instance.referenced_graph() else {
                continue;
            };
            let connected = is_group_connected_to_output(graph, instance.id);

            for record in analysis.records.values_mut() {
                if record.kind != KindTag::Group || record.group_tree != Some(tree) {
                    continue;
                }
                if !record.instantiated_in.contains(&graph.name) {
                    record.instantiated_in.push(graph.name.clone());
                }
                if connected && !record.connected_in.contains(&graph.name) {
                    record.connected_in.push(graph.name.clone());
                }
            }
        }
    }
}
