// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reachability from output terminals.
//!
//! A node is *used* when some chain of links, followed in either direction,
//! connects it to an output terminal of its own graph. Everything else is
//! *unused*.

use crate::graph::Graph;
use crate::node::NodeId;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};

/// Undirected adjacency over the links of a graph
fn adjacency(graph: &Graph) -> HashMap<NodeId, Vec<NodeId>> {
    let mut neighbors: HashMap<NodeId, Vec<NodeId>> = HashMap::with_capacity(graph.node_count());
    for link in graph.links() {
        for node in [link.from_node, link.to_node] {
            if let Some(other) = link.other_end(node) {
                neighbors.entry(node).or_default().push(other);
            }
        }
    }
    neighbors
}

/// Nodes connected to any output terminal of `graph`
pub fn reachable_set(graph: &Graph) -> HashSet<NodeId> {
    let neighbors = adjacency(graph);
    let mut to_visit = graph.output_terminals();
    let mut visited = HashSet::with_capacity(graph.node_count());

    while let Some(node_id) = to_visit.pop() {
        if !visited.insert(node_id) {
            continue;
        }
        if let Some(next) = neighbors.get(&node_id) {
            to_visit.extend(next.iter().copied().filter(|n| !visited.contains(n)));
        }
    }

    tracing::trace!(graph = %graph.name, used = visited.len(), "traversed from outputs");
    visited
}

/// Nodes of `graph` not connected to any output terminal, in graph order.
///
/// A graph without output terminals has every node unused.
pub fn unused_set(graph: &Graph) -> IndexSet<NodeId> {
    let used = reachable_set(graph);
    graph.node_ids().filter(|id| !used.contains(id)).collect()
}
