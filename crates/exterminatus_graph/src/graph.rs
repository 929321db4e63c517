// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and links.

use crate::link::{Link, LinkId};
use crate::node::{Node, NodeId};
use crate::socket::{SocketDirection, SocketId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphId(pub Uuid);

impl GraphId {
    /// Create a new random graph ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

/// What kind of node tree a graph is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GraphKind {
    /// Shader (material, world, light) tree
    #[default]
    Shader,
    /// Geometry nodes tree
    Geometry,
    /// Compositor tree
    Compositor,
}

/// A node graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Unique graph ID
    pub id: GraphId,
    /// Graph name
    pub name: String,
    /// Tree kind
    #[serde(default)]
    pub kind: GraphKind,
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Links between sockets
    links: IndexMap<LinkId, Link>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>, kind: GraphKind) -> Self {
        Self {
            id: GraphId::new(),
            name: name.into(),
            kind,
            nodes: IndexMap::new(),
            links: IndexMap::new(),
        }
    }

    /// Add a node to the graph.
    ///
    /// A name already taken in this graph gets a numeric suffix.
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        node.name = self.unique_name(&node.name);
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// First free name derived from `base` (`Mix`, `Mix.001`, ...)
    pub fn unique_name(&self, base: &str) -> String {
        if self.find_node_by_name(base).is_none() {
            return base.to_string();
        }
        let stem = match base.rsplit_once('.') {
            Some((stem, suffix)) if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) => stem,
            _ => base,
        };
        (1..)
            .map(|n| format!("{stem}.{n:03}"))
            .find(|candidate| self.find_node_by_name(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    /// Remove a node and its links.
    ///
    /// Nodes parented to the removed node lose their parent.
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        let node = self.nodes.shift_remove(&node_id)?;
        self.links.retain(|_, l| !l.involves_node(node_id));
        for child in self.nodes.values_mut() {
            if child.parent == Some(node_id) {
                child.parent = None;
            }
        }
        Some(node)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Check whether the graph owns a node
    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Find a node by name
    pub fn find_node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.values().find(|n| n.name == name)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Output-terminal nodes of this graph
    pub fn output_terminals(&self) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.is_output_terminal())
            .map(|n| n.id)
            .collect()
    }

    /// Link an output socket to an input socket
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_socket: SocketId,
        to_node: NodeId,
        to_socket: SocketId,
    ) -> Result<LinkId, ConnectionError> {
        // Validate nodes exist
        let source_node = self.nodes.get(&from_node)
            .ok_or(ConnectionError::NodeNotFound(from_node))?;
        let target_node = self.nodes.get(&to_node)
            .ok_or(ConnectionError::NodeNotFound(to_node))?;

        // Validate sockets exist
        let source_socket = source_node.socket(&from_socket)
            .ok_or(ConnectionError::SocketNotFound(from_socket))?;
        let target_socket = target_node.socket(&to_socket)
            .ok_or(ConnectionError::SocketNotFound(to_socket))?;

        if source_socket.direction != SocketDirection::Output
            || !source_socket.can_connect(target_socket)
        {
            return Err(ConnectionError::DirectionMismatch);
        }

        // An input takes a single link
        if self.is_socket_linked(to_socket) {
            return Err(ConnectionError::InputAlreadyLinked(to_socket));
        }

        let link = Link::new(from_node, from_socket, to_node, to_socket);
        if link.is_self_link() {
            return Err(ConnectionError::SelfLink);
        }

        let id = link.id;
        self.links.insert(id, link);
        Ok(id)
    }

    /// Get all links
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Get links entering a specific input socket
    pub fn links_to(&self, socket_id: SocketId) -> impl Iterator<Item = &Link> {
        self.links.values().filter(move |l| l.to_socket == socket_id)
    }

    /// Whether any link ends at this socket
    pub fn is_socket_linked(&self, socket_id: SocketId) -> bool {
        self.links.values().any(|l| l.involves_socket(socket_id))
    }

    /// Whether any output socket of the node is linked
    pub fn has_linked_output(&self, node_id: NodeId) -> bool {
        self.links.values().any(|l| l.from_node == node_id)
    }

    /// First input socket of the node with no link
    pub fn first_free_input(&self, node_id: NodeId) -> Option<SocketId> {
        let node = self.nodes.get(&node_id)?;
        node.inputs
            .iter()
            .map(|s| s.id)
            .find(|id| !self.is_socket_linked(*id))
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Untitled", GraphKind::Shader)
    }
}

/// Error when creating a link
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Socket not found
    #[error("Socket not found: {0:?}")]
    SocketNotFound(SocketId),

    /// Link does not go from an output to an input
    #[error("Links must go from an output socket to an input socket")]
    DirectionMismatch,

    /// Input socket already has a link
    #[error("Input socket already linked: {0:?}")]
    InputAlreadyLinked(SocketId),

    /// Self-link not allowed
    #[error("Self-link not allowed")]
    SelfLink,
}
