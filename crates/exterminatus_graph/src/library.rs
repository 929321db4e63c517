// SPDX-License-Identifier: MIT OR Apache-2.0
//! Collection of graphs: top-level graphs (materials) and group trees.

use crate::graph::{Graph, GraphId};
use crate::node::{Node, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Owner of every graph the analysis can see
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    /// All graphs by ID
    graphs: IndexMap<GraphId, Graph>,
    /// Graphs analyzed as top-level containers, in registration order
    top_level: Vec<GraphId>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level graph (a material, world, compositor tree)
    pub fn add_top_level(&mut self, graph: Graph) -> GraphId {
        let id = graph.id;
        self.graphs.insert(id, graph);
        if !self.top_level.contains(&id) {
            self.top_level.push(id);
        }
        id
    }

    /// Add a group tree, reachable only through group instances
    pub fn add_group_tree(&mut self, graph: Graph) -> GraphId {
        let id = graph.id;
        self.graphs.insert(id, graph);
        id
    }

    /// Get a graph by ID
    pub fn graph(&self, graph_id: GraphId) -> Option<&Graph> {
        self.graphs.get(&graph_id)
    }

    /// Get a mutable graph by ID
    pub fn graph_mut(&mut self, graph_id: GraphId) -> Option<&mut Graph> {
        self.graphs.get_mut(&graph_id)
    }

    /// Get a graph by ID, failing on unknown IDs
    pub fn require(&self, graph_id: GraphId) -> Result<&Graph, AnalysisError> {
        self.graphs.get(&graph_id).ok_or(AnalysisError::GraphNotFound(graph_id))
    }

    /// Find a graph by name
    pub fn find_graph_by_name(&self, name: &str) -> Option<&Graph> {
        self.graphs.values().find(|g| g.name == name)
    }

    /// IDs of the top-level graphs
    pub fn top_level_ids(&self) -> &[GraphId] {
        &self.top_level
    }

    /// Get the top-level graphs in registration order
    pub fn top_level_graphs(&self) -> impl Iterator<Item = &Graph> {
        self.top_level.iter().filter_map(|id| self.graphs.get(id))
    }

    /// Whether a graph is registered as top-level
    pub fn is_top_level(&self, graph_id: GraphId) -> bool {
        self.top_level.contains(&graph_id)
    }

    /// Resolve the payload graph of a group instance.
    ///
    /// Returns `Ok(None)` for non-group nodes and empty group nodes.
    pub fn referenced_graph(&self, node: &Node) -> Result<Option<&Graph>, AnalysisError> {
        match node.referenced_graph() {
            Some(tree) => self
                .graphs
                .get(&tree)
                .map(Some)
                .ok_or(AnalysisError::DanglingGroup { node: node.id, tree }),
            None => Ok(None),
        }
    }

    /// Remove a node from the graph that owns it
    pub fn remove_node(&mut self, graph_id: GraphId, node_id: NodeId) -> Option<Node> {
        self.graphs.get_mut(&graph_id)?.remove_node(node_id)
    }

    /// Get the number of graphs
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }
}

/// Error raised on malformed analysis input
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Graph not in the library
    #[error("Graph not found: {0:?}")]
    GraphNotFound(GraphId),

    /// Group node pointing at a graph that is not in the library
    #[error("Group node {node:?} references missing graph {tree:?}")]
    DanglingGroup {
        /// The group instance
        node: NodeId,
        /// The missing payload
        tree: GraphId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;

    #[test]
    fn test_top_level_registration() {
        let mut library = Library::new();
        let mat = library.add_top_level(Graph::new("Material", GraphKind::Shader));
        let group = library.add_group_tree(Graph::new("NodeGroup", GraphKind::Shader));

        assert!(library.is_top_level(mat));
        assert!(!library.is_top_level(group));
        assert_eq!(library.top_level_graphs().count(), 1);
        assert_eq!(library.graph_count(), 2);
        assert_eq!(library.find_graph_by_name("NodeGroup").unwrap().id, group);
    }

    #[test]
    fn test_referenced_graph_resolution() {
        let mut library = Library::new();
        let tree = library.add_group_tree(Graph::new("NodeGroup", GraphKind::Shader));

        let instance = Node::group("Group", Some(tree));
        assert_eq!(library.referenced_graph(&instance).unwrap().unwrap().id, tree);

        let empty = Node::group("Group", None);
        assert!(library.referenced_graph(&empty).unwrap().is_none());

        let dangling = Node::group("Group", Some(GraphId::new()));
        assert!(matches!(
            library.referenced_graph(&dangling),
            Err(AnalysisError::DanglingGroup { .. })
        ));
        assert!(library.require(GraphId::new()).is_err());
    }
}
