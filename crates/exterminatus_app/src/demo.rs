// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sample scene with used and unused nodes in several graphs.

use crate::scene::Scene;
use exterminatus_graph::graphs::registry_for;
use exterminatus_graph::node::NodeRegistry;
use exterminatus_graph::{Graph, GraphId, GraphKind, Library, Node, NodeId, NodeKind, Socket, SocketType};

/// Adds nodes from a registry and links them by socket name
struct GraphBuilder {
    graph: Graph,
    registry: NodeRegistry,
}

impl GraphBuilder {
    fn new(name: &str, kind: GraphKind) -> Self {
        Self {
            graph: Graph::new(name, kind),
            registry: registry_for(kind),
        }
    }

    fn add(&mut self, type_id: &str, x: f32, y: f32) -> NodeId {
        let node = match self.registry.create_node(type_id) {
            Some(node) => node,
            None => Node::new(type_id, type_id, NodeKind::Ordinary),
        };
        self.graph.add_node(node.with_position(x, y))
    }

    fn add_group(&mut self, name: &str, tree: GraphId, x: f32, y: f32) -> NodeId {
        let node = Node::group(name, Some(tree))
            .with_input(Socket::input("Value", SocketType::Any))
            .with_output(Socket::output("Result", SocketType::Any))
            .with_position(x, y);
        self.graph.add_node(node)
    }

    fn link(&mut self, from: NodeId, output: &str, to: NodeId, input: &str) {
        let from_socket = self.graph.node(from).and_then(|n| n.output_named(output)).map(|s| s.id);
        let to_socket = self.graph.node(to).and_then(|n| n.input_named(input)).map(|s| s.id);
        if let (Some(from_socket), Some(to_socket)) = (from_socket, to_socket) {
            if let Err(e) = self.graph.connect(from, from_socket, to, to_socket) {
                tracing::warn!("Demo link {output} -> {input} rejected: {e}");
            }
        }
    }

    fn finish(self) -> Graph {
        self.graph
    }
}

/// Build the sample scene.
///
/// - `DetailTree`: group tree with one stray Math node
/// - `Brick`: textured material with an unused noise texture and an unused
///   `DetailTree` instance
/// - `Metal`: material whose `DetailTree` instance drives roughness
/// - `Sky`: world with a stray value node
/// - `Compositing`: compositor tree with an unused blur
pub fn demo_scene() -> Scene {
    let mut library = Library::new();

    let mut detail = GraphBuilder::new("DetailTree", GraphKind::Shader);
    let input = detail.add("GROUP_INPUT", -300.0, 0.0);
    let output = detail.add("GROUP_OUTPUT", 200.0, 0.0);
    detail.link(input, "Value", output, "Result");
    detail.add("MATH", -50.0, -200.0);
    let detail_id = library.add_group_tree(detail.finish());

    let mut brick = GraphBuilder::new("Brick", GraphKind::Shader);
    let out = brick.add("OUTPUT_MATERIAL", 300.0, 300.0);
    let bsdf = brick.add("BSDF_PRINCIPLED", 0.0, 300.0);
    let image = brick.add("TEX_IMAGE", -300.0, 300.0);
    let coord = brick.add("TEX_COORD", -550.0, 300.0);
    brick.link(bsdf, "BSDF", out, "Surface");
    brick.link(image, "Color", bsdf, "Base Color");
    brick.link(coord, "UV", image, "Vector");
    brick.add("TEX_NOISE", -300.0, -50.0);
    brick.add_group("DetailTree", detail_id, -300.0, -350.0);
    library.add_top_level(brick.finish());

    let mut metal = GraphBuilder::new("Metal", GraphKind::Shader);
    let out = metal.add("OUTPUT_MATERIAL", 300.0, 300.0);
    let bsdf = metal.add("BSDF_PRINCIPLED", 0.0, 300.0);
    let group = metal.add_group("DetailTree", detail_id, -300.0, 300.0);
    metal.link(bsdf, "BSDF", out, "Surface");
    metal.link(group, "Result", bsdf, "Roughness");
    library.add_top_level(metal.finish());

    let mut sky = GraphBuilder::new("Sky", GraphKind::Shader);
    let out = sky.add("OUTPUT_WORLD", 300.0, 0.0);
    let background = sky.add("BACKGROUND", 0.0, 0.0);
    sky.link(background, "Background", out, "Surface");
    sky.add("VALUE", -300.0, 0.0);
    library.add_top_level(sky.finish());

    let mut comp = GraphBuilder::new("Compositing", GraphKind::Compositor);
    let composite = comp.add("COMPOSITE", 300.0, 0.0);
    let layers = comp.add("R_LAYERS", 0.0, 0.0);
    comp.link(layers, "Image", composite, "Image");
    comp.add("BLUR", 0.0, -300.0);
    library.add_top_level(comp.finish());

    Scene::new(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_shape() {
        let scene = demo_scene();
        assert_eq!(scene.library.graph_count(), 5);
        assert_eq!(scene.library.top_level_ids().len(), 4);

        let brick = scene.library.find_graph_by_name("Brick").unwrap();
        assert_eq!(brick.node_count(), 6);
        assert_eq!(brick.link_count(), 3);

        let metal = scene.library.find_graph_by_name("Metal").unwrap();
        assert_eq!(metal.link_count(), 2);
    }
}
