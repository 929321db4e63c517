// SPDX-License-Identifier: MIT OR Apache-2.0
//! Compositor node templates.

use crate::node::{NodeKind, NodeRegistry, NodeTemplate, OutputKind};
use crate::socket::{Socket, SocketType};

/// Create the compositor node registry
pub fn create_compositor_registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    for (kind, name) in [
        (OutputKind::Composite, "Composite"),
        (OutputKind::Viewer, "Viewer"),
        (OutputKind::FileOutput, "File Output"),
    ] {
        registry.register(NodeTemplate {
            id: kind.type_tag().to_string(),
            name: name.to_string(),
            kind: NodeKind::Output(kind),
            size: [140.0, 100.0],
            inputs: vec![Socket::input("Image", SocketType::Color)],
            outputs: vec![],
        });
    }

    registry.register(NodeTemplate {
        id: "R_LAYERS".to_string(),
        name: "Render Layers".to_string(),
        kind: NodeKind::Ordinary,
        size: [240.0, 180.0],
        inputs: vec![],
        outputs: vec![
            Socket::output("Image", SocketType::Color),
            Socket::output("Alpha", SocketType::Float),
        ],
    });

    registry.register(NodeTemplate {
        id: "BLUR".to_string(),
        name: "Blur".to_string(),
        kind: NodeKind::Ordinary,
        size: [150.0, 120.0],
        inputs: vec![
            Socket::input("Image", SocketType::Color),
            Socket::input("Size", SocketType::Float),
        ],
        outputs: vec![Socket::output("Image", SocketType::Color)],
    });

    registry
}
