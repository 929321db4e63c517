// SPDX-License-Identifier: MIT OR Apache-2.0
//! Links carrying data from an output socket to an input socket.
//!
//! Data flows along a link from `from_socket` to `to_socket`. Reachability
//! ignores that direction and treats each link as an undirected edge
//! between its two nodes, see [`Link::other_end`].

use crate::node::NodeId;
use crate::socket::SocketId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub Uuid);

impl LinkId {
    /// Create a new random link ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

/// Output socket of one node wired into an input socket of another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Unique link ID
    pub id: LinkId,
    /// Node producing the value
    pub from_node: NodeId,
    /// Output socket on `from_node`
    pub from_socket: SocketId,
    /// Node consuming the value
    pub to_node: NodeId,
    /// Input socket on `to_node`
    pub to_socket: SocketId,
}

impl Link {
    /// Link `from_socket` of `from_node` into `to_socket` of `to_node`
    pub fn new(from_node: NodeId, from_socket: SocketId, to_node: NodeId, to_socket: SocketId) -> Self {
        Self {
            id: LinkId::new(),
            from_node,
            from_socket,
            to_node,
            to_socket,
        }
    }

    /// Whether the link starts or ends at `node_id`
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.from_node == node_id || self.to_node == node_id
    }

    /// Whether the link starts or ends at `socket_id`
    pub fn involves_socket(&self, socket_id: SocketId) -> bool {
        self.from_socket == socket_id || self.to_socket == socket_id
    }

    /// Node at the opposite end from `node_id`, ignoring data direction.
    ///
    /// `None` when the link does not touch `node_id`.
    pub fn other_end(&self, node_id: NodeId) -> Option<NodeId> {
        if self.from_node == node_id {
            Some(self.to_node)
        } else if self.to_node == node_id {
            Some(self.from_node)
        } else {
            None
        }
    }

    /// Whether the link loops from a node back into itself
    pub fn is_self_link(&self) -> bool {
        self.from_node == self.to_node
    }
}
