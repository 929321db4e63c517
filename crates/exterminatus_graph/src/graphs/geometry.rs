// SPDX-License-Identifier: MIT OR Apache-2.0
//! Geometry node templates.

use crate::node::{AttributeDomain, AttributeSource, NodeKind, NodeRegistry, NodeTemplate, OutputKind};
use crate::socket::{Socket, SocketType};

/// Type tag of the named attribute node
pub const NAMED_ATTRIBUTE: &str = "INPUT_ATTRIBUTE";

/// Template of the named attribute node
pub fn named_attribute_template() -> NodeTemplate {
    NodeTemplate {
        id: NAMED_ATTRIBUTE.to_string(),
        name: "Named Attribute".to_string(),
        kind: NodeKind::AttributeSource(AttributeSource {
            attribute: String::new(),
            domain: AttributeDomain::Geometry,
            generated: false,
            target: None,
        }),
        size: [140.0, 120.0],
        inputs: vec![],
        outputs: vec![
            Socket::output("Attribute", SocketType::Float),
            Socket::output("Exists", SocketType::Bool),
        ],
    }
}

/// Create the geometry node registry
pub fn create_geometry_registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    registry.register(NodeTemplate {
        id: "GROUP_INPUT".to_string(),
        name: "Group Input".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 80.0],
        inputs: vec![],
        outputs: vec![Socket::output("Geometry", SocketType::Geometry)],
    });

    registry.register(NodeTemplate {
        id: OutputKind::GroupOutput.type_tag().to_string(),
        name: "Group Output".to_string(),
        kind: NodeKind::Output(OutputKind::GroupOutput),
        size: [140.0, 80.0],
        inputs: vec![Socket::input("Geometry", SocketType::Geometry)],
        outputs: vec![],
    });

    registry.register(NodeTemplate {
        id: "SET_POSITION".to_string(),
        name: "Set Position".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 180.0],
        inputs: vec![
            Socket::input("Geometry", SocketType::Geometry),
            Socket::input("Selection", SocketType::Bool),
            Socket::input("Position", SocketType::Vector),
            Socket::input("Offset", SocketType::Vector),
        ],
        outputs: vec![Socket::output("Geometry", SocketType::Geometry)],
    });

    registry.register(NodeTemplate {
        id: "JOIN_GEOMETRY".to_string(),
        name: "Join Geometry".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 80.0],
        inputs: vec![Socket::input("Geometry", SocketType::Geometry)],
        outputs: vec![Socket::output("Geometry", SocketType::Geometry)],
    });

    registry.register(named_attribute_template());

    registry
}
