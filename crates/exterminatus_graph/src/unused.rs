// SPDX-License-Identifier: MIT OR Apache-2.0
//! Unused-node discovery with descent into nested group trees.

use crate::config::{AnalysisConfig, NoOutputPolicy};
use crate::graph::GraphId;
use crate::library::{AnalysisError, Library};
use crate::node::{KindTag, NodeId};
use crate::reachability::unused_set;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An unused node and where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedNodeRecord {
    /// The unused node
    pub node: NodeId,
    /// Graph owning the node
    pub graph: GraphId,
    /// Node name at analysis time
    pub name: String,
    /// Host type tag (e.g. `TEX_NOISE`, `GROUP`)
    pub node_type: String,
    /// Kind of the node
    pub kind: KindTag,
    /// Payload graph, for group instances
    pub group_tree: Option<GraphId>,
    /// Dotted path of containers down to the owning graph
    pub containment_path: String,
    /// Top-level graphs instantiating the same group tree
    pub instantiated_in: Vec<String>,
    /// Subset of `instantiated_in` where the instance feeds something
    pub connected_in: Vec<String>,
}

/// Descent into a graph already on the current path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecursionCycle {
    /// Containment path at which descent stopped
    pub path: String,
    /// Graph that would have been re-entered
    pub graph: GraphId,
    /// Name of that graph
    pub graph_name: String,
}

/// Result of an unused-node analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnusedAnalysis {
    /// Records by node, in discovery order
    pub records: IndexMap<NodeId, UnusedNodeRecord>,
    /// Group trees not descended because they were already on the path
    pub cycles: Vec<RecursionCycle>,
}

impl UnusedAnalysis {
    /// Number of unused nodes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was found
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the record of a node
    pub fn get(&self, node_id: NodeId) -> Option<&UnusedNodeRecord> {
        self.records.get(&node_id)
    }

    /// All records
    pub fn records(&self) -> impl Iterator<Item = &UnusedNodeRecord> {
        self.records.values()
    }

    /// Records of nodes owned by `graph_id`
    pub fn records_in(&self, graph_id: GraphId) -> impl Iterator<Item = &UnusedNodeRecord> {
        self.records.values().filter(move |r| r.graph == graph_id)
    }

    /// Merge another analysis; the first record seen for a node wins
    pub fn merge(&mut self, other: UnusedAnalysis) {
        for (id, record) in other.records {
            self.records.entry(id).or_insert(record);
        }
        self.cycles.extend(other.cycles);
    }
}

/// Find unused nodes of `graph_id` and of the group trees its unused group
/// instances point to.
///
/// Records of the graph itself carry `path`, or the graph's name when `path`
/// is empty. Records found inside an unused group instance `G` carry
/// `path.G` (just `G` when `path` is empty).
pub fn find_unused_recursive(
    library: &Library,
    graph_id: GraphId,
    path: &str,
    config: &AnalysisConfig,
) -> Result<UnusedAnalysis, AnalysisError> {
    let mut analysis = UnusedAnalysis::default();
    let mut stack = vec![graph_id];
    expand(library, graph_id, path, config, &mut stack, &mut analysis)?;
    Ok(analysis)
}

fn expand(
    library: &Library,
    graph_id: GraphId,
    path: &str,
    config: &AnalysisConfig,
    stack: &mut Vec<GraphId>,
    analysis: &mut UnusedAnalysis,
) -> Result<(), AnalysisError> {
    let graph = library.require(graph_id)?;

    if graph.output_terminals().is_empty() && config.no_output_policy == NoOutputPolicy::Skip {
        tracing::debug!(graph = %graph.name, "no output terminals, skipping");
        return Ok(());
    }

    let tree_name = if path.is_empty() { graph.name.as_str() } else { path };
    let mut groups = Vec::new();

    for node_id in unused_set(graph) {
        let Some(node) = graph.node(node_id) else {
            continue;
        };
        if node.is_attribute_source() && !config.include_attribute_sources {
            continue;
        }
        analysis.records.entry(node_id).or_insert_with(|| UnusedNodeRecord {
            node: node_id,
            graph: graph_id,
            name: node.name.clone(),
            node_type: node.node_type.clone(),
            kind: node.kind.tag(),
            group_tree: node.referenced_graph(),
            containment_path: tree_name.to_string(),
            instantiated_in: Vec::new(),
            connected_in: Vec::new(),
        });
        if node.is_group_instance() {
            groups.push(node);
        }
    }

    tracing::debug!(graph = %graph.name, path = tree_name, found = analysis.len(), "scanned graph");

    for group in groups {
        let Some(tree) = library.referenced_graph(group)? else {
            continue;
        };
        let nested = if path.is_empty() {
            group.name.clone()
        } else {
            format!("{path}.{}", group.name)
        };

        if stack.contains(&tree.id) {
            tracing::warn!(path = %nested, graph = %tree.name, "group tree re-entered, not descending");
            analysis.cycles.push(RecursionCycle {
                path: nested,
                graph: tree.id,
                graph_name: tree.name.clone(),
            });
            continue;
        }

        stack.push(tree.id);
        let result = expand(library, tree.id, &nested, config, stack, analysis);
        stack.pop();
        result?;
    }

    Ok(())
}
