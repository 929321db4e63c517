// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node templates for each tree kind.

pub mod compositor;
pub mod geometry;
pub mod shader;

use crate::graph::GraphKind;
use crate::node::NodeRegistry;

/// Registry matching a tree kind
pub fn registry_for(kind: GraphKind) -> NodeRegistry {
    match kind {
        GraphKind::Shader => shader::create_shader_registry(),
        GraphKind::Geometry => geometry::create_geometry_registry(),
        GraphKind::Compositor => compositor::create_compositor_registry(),
    }
}
