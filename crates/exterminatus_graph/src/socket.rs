// SPDX-License-Identifier: MIT OR Apache-2.0
//! Socket definitions for node inputs/outputs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocketId(pub Uuid);

impl SocketId {
    /// Create a new random socket ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SocketId {
    fn default() -> Self {
        Self::new()
    }
}

/// Socket direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocketDirection {
    /// Input socket
    Input,
    /// Output socket
    Output,
}

/// Data channel carried by a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocketType {
    /// Closure/shader
    Shader,
    /// RGBA color
    Color,
    /// 3D vector
    Vector,
    /// Scalar factor or value
    Float,
    /// Integer value
    Int,
    /// Boolean value
    Bool,
    /// String value
    String,
    /// Geometry stream (geometry nodes)
    Geometry,
    /// Untyped (group sockets, reroutes)
    Any,
}

/// A socket on a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Socket {
    /// Unique socket ID
    pub id: SocketId,
    /// Socket name (e.g. "Base Color", "Fac")
    pub name: String,
    /// Socket direction
    pub direction: SocketDirection,
    /// Data channel
    pub socket_type: SocketType,
}

impl Socket {
    /// Create a new input socket
    pub fn input(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            id: SocketId::new(),
            name: name.into(),
            direction: SocketDirection::Input,
            socket_type,
        }
    }

    /// Create a new output socket
    pub fn output(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            id: SocketId::new(),
            name: name.into(),
            direction: SocketDirection::Output,
            socket_type,
        }
    }

    /// Copy of this socket with a fresh ID, for instantiating templates
    pub fn instantiate(&self) -> Self {
        Self {
            id: SocketId::new(),
            ..self.clone()
        }
    }

    /// Check if a link between this socket and `other` has valid directions.
    ///
    /// Data types are not checked: the host draws mismatched links as
    /// invalid instead of refusing them.
    pub fn can_connect(&self, other: &Socket) -> bool {
        self.direction != other.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_rules() {
        let out = Socket::output("Color", SocketType::Color);
        let inp = Socket::input("Base Color", SocketType::Color);
        let other_in = Socket::input("Roughness", SocketType::Float);

        assert!(out.can_connect(&inp));
        assert!(out.can_connect(&other_in));
        assert!(!inp.can_connect(&other_in));
    }

    #[test]
    fn test_instantiate_gets_fresh_id() {
        let template = Socket::input("Fac", SocketType::Float);
        let copy = template.instantiate();
        assert_ne!(copy.id, template.id);
        assert_eq!(copy.name, "Fac");
        assert_eq!(copy.socket_type, SocketType::Float);
    }
}
