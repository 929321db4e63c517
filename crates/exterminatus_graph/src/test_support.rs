// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph building helpers shared by unit tests.

use crate::graph::{Graph, GraphId, GraphKind};
use crate::graphs::shader::create_shader_registry;
use crate::node::{Node, NodeId};

/// Add a shader node of the given type tag
pub fn add(graph: &mut Graph, type_id: &str) -> NodeId {
    let node = create_shader_registry()
        .create_node(type_id)
        .unwrap_or_else(|| panic!("unknown node type {type_id}"));
    graph.add_node(node)
}

/// Add a shader node with a custom name
pub fn add_named(graph: &mut Graph, type_id: &str, name: &str) -> NodeId {
    let id = add(graph, type_id);
    graph.node_mut(id).unwrap().name = name.to_string();
    id
}

/// Add a group instance with one input and one output
pub fn add_group(graph: &mut Graph, name: &str, tree: GraphId) -> NodeId {
    use crate::socket::{Socket, SocketType};
    let node = Node::group(name, Some(tree))
        .with_input(Socket::input("Value", SocketType::Any))
        .with_output(Socket::output("Result", SocketType::Any));
    graph.add_node(node)
}

/// Link output `out` of `from` into input `inp` of `to`
pub fn link(graph: &mut Graph, from: NodeId, out: usize, to: NodeId, inp: usize) {
    let from_socket = graph.node(from).unwrap().outputs[out].id;
    let to_socket = graph.node(to).unwrap().inputs[inp].id;
    graph.connect(from, from_socket, to, to_socket).unwrap();
}

/// Material graph with a Principled BSDF wired into a material output
pub fn material(name: &str) -> (Graph, NodeId, NodeId) {
    let mut graph = Graph::new(name, GraphKind::Shader);
    let output = add(&mut graph, "OUTPUT_MATERIAL");
    let bsdf = add(&mut graph, "BSDF_PRINCIPLED");
    link(&mut graph, bsdf, 0, output, 0);
    (graph, output, bsdf)
}

/// Group tree with a group input wired into a group output
pub fn group_tree(name: &str) -> Graph {
    let mut graph = Graph::new(name, GraphKind::Shader);
    let input = add(&mut graph, "GROUP_INPUT");
    let output = add(&mut graph, "GROUP_OUTPUT");
    link(&mut graph, input, 0, output, 0);
    graph
}
