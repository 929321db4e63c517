// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shader node templates (material, world and light trees).

use crate::node::{AttributeDomain, AttributeSource, NodeKind, NodeRegistry, NodeTemplate, OutputKind};
use crate::socket::{Socket, SocketType};

/// Type tag of the shader attribute node
pub const ATTRIBUTE: &str = "ATTRIBUTE";

/// Template of the shader attribute node
pub fn attribute_template() -> NodeTemplate {
    NodeTemplate {
        id: ATTRIBUTE.to_string(),
        name: "Attribute".to_string(),
        kind: NodeKind::AttributeSource(AttributeSource {
            attribute: String::new(),
            domain: AttributeDomain::Geometry,
            generated: false,
            target: None,
        }),
        size: [140.0, 160.0],
        inputs: vec![],
        outputs: vec![
            Socket::output("Color", SocketType::Color),
            Socket::output("Vector", SocketType::Vector),
            Socket::output("Fac", SocketType::Float),
            Socket::output("Alpha", SocketType::Float),
        ],
    }
}

/// Create the shader node registry
pub fn create_shader_registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    // ========================================================================
    // Output Nodes
    // ========================================================================

    registry.register(NodeTemplate {
        id: OutputKind::Material.type_tag().to_string(),
        name: "Material Output".to_string(),
        kind: NodeKind::Output(OutputKind::Material),
        size: [140.0, 120.0],
        inputs: vec![
            Socket::input("Surface", SocketType::Shader),
            Socket::input("Volume", SocketType::Shader),
            Socket::input("Displacement", SocketType::Vector),
        ],
        outputs: vec![],
    });

    registry.register(NodeTemplate {
        id: OutputKind::World.type_tag().to_string(),
        name: "World Output".to_string(),
        kind: NodeKind::Output(OutputKind::World),
        size: [140.0, 100.0],
        inputs: vec![
            Socket::input("Surface", SocketType::Shader),
            Socket::input("Volume", SocketType::Shader),
        ],
        outputs: vec![],
    });

    registry.register(NodeTemplate {
        id: OutputKind::Light.type_tag().to_string(),
        name: "Light Output".to_string(),
        kind: NodeKind::Output(OutputKind::Light),
        size: [140.0, 80.0],
        inputs: vec![Socket::input("Surface", SocketType::Shader)],
        outputs: vec![],
    });

    registry.register(NodeTemplate {
        id: OutputKind::GroupOutput.type_tag().to_string(),
        name: "Group Output".to_string(),
        kind: NodeKind::Output(OutputKind::GroupOutput),
        size: [140.0, 80.0],
        inputs: vec![Socket::input("Result", SocketType::Any)],
        outputs: vec![],
    });

    registry.register(NodeTemplate {
        id: "GROUP_INPUT".to_string(),
        name: "Group Input".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 80.0],
        inputs: vec![],
        outputs: vec![Socket::output("Value", SocketType::Any)],
    });

    // ========================================================================
    // Shaders
    // ========================================================================

    registry.register(NodeTemplate {
        id: "BSDF_PRINCIPLED".to_string(),
        name: "Principled BSDF".to_string(),
        kind: NodeKind::Ordinary,
        size: [240.0, 620.0],
        inputs: vec![
            Socket::input("Base Color", SocketType::Color),
            Socket::input("Metallic", SocketType::Float),
            Socket::input("Roughness", SocketType::Float),
            Socket::input("IOR", SocketType::Float),
            Socket::input("Alpha", SocketType::Float),
            Socket::input("Normal", SocketType::Vector),
        ],
        outputs: vec![Socket::output("BSDF", SocketType::Shader)],
    });

    registry.register(NodeTemplate {
        id: "EMISSION".to_string(),
        name: "Emission".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 120.0],
        inputs: vec![
            Socket::input("Color", SocketType::Color),
            Socket::input("Strength", SocketType::Float),
        ],
        outputs: vec![Socket::output("Emission", SocketType::Shader)],
    });

    registry.register(NodeTemplate {
        id: "MIX_SHADER".to_string(),
        name: "Mix Shader".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 120.0],
        inputs: vec![
            Socket::input("Fac", SocketType::Float),
            Socket::input("Shader", SocketType::Shader),
            Socket::input("Shader", SocketType::Shader),
        ],
        outputs: vec![Socket::output("Shader", SocketType::Shader)],
    });

    registry.register(NodeTemplate {
        id: "BACKGROUND".to_string(),
        name: "Background".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 100.0],
        inputs: vec![
            Socket::input("Color", SocketType::Color),
            Socket::input("Strength", SocketType::Float),
        ],
        outputs: vec![Socket::output("Background", SocketType::Shader)],
    });

    // ========================================================================
    // Textures
    // ========================================================================

    registry.register(NodeTemplate {
        id: "TEX_IMAGE".to_string(),
        name: "Image Texture".to_string(),
        kind: NodeKind::Ordinary,
        size: [240.0, 260.0],
        inputs: vec![Socket::input("Vector", SocketType::Vector)],
        outputs: vec![
            Socket::output("Color", SocketType::Color),
            Socket::output("Alpha", SocketType::Float),
        ],
    });

    registry.register(NodeTemplate {
        id: "TEX_NOISE".to_string(),
        name: "Noise Texture".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 240.0],
        inputs: vec![
            Socket::input("Vector", SocketType::Vector),
            Socket::input("Scale", SocketType::Float),
            Socket::input("Detail", SocketType::Float),
        ],
        outputs: vec![
            Socket::output("Fac", SocketType::Float),
            Socket::output("Color", SocketType::Color),
        ],
    });

    // ========================================================================
    // Inputs and utilities
    // ========================================================================

    registry.register(NodeTemplate {
        id: "TEX_COORD".to_string(),
        name: "Texture Coordinate".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 200.0],
        inputs: vec![],
        outputs: vec![
            Socket::output("Generated", SocketType::Vector),
            Socket::output("Normal", SocketType::Vector),
            Socket::output("UV", SocketType::Vector),
        ],
    });

    registry.register(NodeTemplate {
        id: "VALUE".to_string(),
        name: "Value".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 80.0],
        inputs: vec![],
        outputs: vec![Socket::output("Value", SocketType::Float)],
    });

    registry.register(NodeTemplate {
        id: "MIX".to_string(),
        name: "Mix".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 180.0],
        inputs: vec![
            Socket::input("Factor", SocketType::Float),
            Socket::input("A", SocketType::Color),
            Socket::input("B", SocketType::Color),
        ],
        outputs: vec![Socket::output("Result", SocketType::Color)],
    });

    registry.register(NodeTemplate {
        id: "MATH".to_string(),
        name: "Math".to_string(),
        kind: NodeKind::Ordinary,
        size: [140.0, 150.0],
        inputs: vec![
            Socket::input("Value", SocketType::Float),
            Socket::input("Value", SocketType::Float),
        ],
        outputs: vec![Socket::output("Value", SocketType::Float)],
    });

    registry.register(NodeTemplate {
        id: "NORMAL_MAP".to_string(),
        name: "Normal Map".to_string(),
        kind: NodeKind::Ordinary,
        size: [150.0, 140.0],
        inputs: vec![
            Socket::input("Strength", SocketType::Float),
            Socket::input("Color", SocketType::Color),
        ],
        outputs: vec![Socket::output("Normal", SocketType::Vector)],
    });

    registry.register(attribute_template());

    registry
}
