// SPDX-License-Identifier: MIT OR Apache-2.0
//! Generated attribute nodes that tag quarantined unused nodes.

use crate::config::AttributeConfig;
use crate::graph::{ConnectionError, Graph, GraphKind};
use crate::graphs::{geometry, shader};
use crate::node::{Node, NodeId, NodeKind, ATTRIBUTE_NAME_PREFIX, GENERATED_ATTRIBUTE_LABEL};

/// Attach a generated attribute node to the first free input of `target`.
///
/// Returns `Ok(None)` when the target has no inputs or all of them are
/// linked. The attribute output matching the configured channel is used,
/// falling back to the node's first output.
pub fn attach_attribute_source(
    graph: &mut Graph,
    target: NodeId,
    config: &AttributeConfig,
) -> Result<Option<NodeId>, ConnectionError> {
    let target_node = graph.node(target).ok_or(ConnectionError::NodeNotFound(target))?;
    if target_node.inputs.is_empty() {
        return Ok(None);
    }
    let Some(free_input) = graph.first_free_input(target) else {
        return Ok(None);
    };
    let name = format!("{ATTRIBUTE_NAME_PREFIX}{}", target_node.name);
    let position = target_node.position;

    let template = match graph.kind {
        GraphKind::Geometry => geometry::named_attribute_template(),
        GraphKind::Shader | GraphKind::Compositor => shader::attribute_template(),
    };
    let mut node = Node::from_template(&template)
        .with_name(name)
        .with_label(GENERATED_ATTRIBUTE_LABEL)
        .with_position(position[0], position[1]);
    if let NodeKind::AttributeSource(attr) = &mut node.kind {
        attr.attribute = config.text.clone();
        attr.generated = true;
        attr.target = Some(target);
        // Named attribute nodes have no lookup domain
        if graph.kind != GraphKind::Geometry {
            attr.domain = config.domain;
        }
    }

    let output = node
        .output_named(config.channel.socket_name())
        .or_else(|| node.output(0))
        .map(|s| s.id);

    let attr_id = graph.add_node(node);
    if let Some(output) = output {
        graph.connect(attr_id, output, target, free_input)?;
    }
    Ok(Some(attr_id))
}

/// Remove every generated attribute node from `graph`
pub fn remove_generated_attributes(graph: &mut Graph) -> usize {
    let generated: Vec<NodeId> = graph
        .nodes()
        .filter(|n| n.is_generated_attribute())
        .map(|n| n.id)
        .collect();
    for id in &generated {
        graph.remove_node(*id);
    }
    generated.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AttributeChannel;
    use crate::node::AttributeDomain;
    use crate::test_support::{add, add_named, link, material};

    #[test]
    fn test_attaches_to_first_free_input() {
        let (mut graph, _, _) = material("Mat");
        let mix = add_named(&mut graph, "MIX", "Mix");
        let value = add(&mut graph, "VALUE");
        link(&mut graph, value, 0, mix, 0);

        let config = AttributeConfig {
            text: "quarantine".to_string(),
            domain: AttributeDomain::Object,
            channel: AttributeChannel::Fac,
        };
        let attr = attach_attribute_source(&mut graph, mix, &config).unwrap().unwrap();

        let node = graph.node(attr).unwrap();
        assert_eq!(node.name, "Attr_Mix");
        assert_eq!(node.label, GENERATED_ATTRIBUTE_LABEL);
        assert!(node.is_generated_attribute());
        assert_eq!(node.attribute_target(), Some(mix));
        match &node.kind {
            NodeKind::AttributeSource(source) => {
                assert_eq!(source.attribute, "quarantine");
                assert_eq!(source.domain, AttributeDomain::Object);
            }
            other => panic!("unexpected kind {other:?}"),
        }

        let fac = node.output_named("Fac").unwrap().id;
        let second_input = graph.node(mix).unwrap().inputs[1].id;
        let link = graph.links_to(second_input).next().unwrap();
        assert_eq!(link.from_socket, fac);
    }

    #[test]
    fn test_skips_nodes_without_free_inputs() {
        let (mut graph, _, _) = material("Mat");
        let value = add(&mut graph, "VALUE");
        assert!(attach_attribute_source(&mut graph, value, &AttributeConfig::default()).unwrap().is_none());

        let normal_map = add(&mut graph, "NORMAL_MAP");
        let a = add(&mut graph, "VALUE");
        let b = add(&mut graph, "TEX_IMAGE");
        link(&mut graph, a, 0, normal_map, 0);
        link(&mut graph, b, 0, normal_map, 1);
        assert!(attach_attribute_source(&mut graph, normal_map, &AttributeConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_geometry_falls_back_to_first_output() {
        use crate::graphs::geometry::create_geometry_registry;
        let mut graph = Graph::new("Geo", GraphKind::Geometry);
        let set_position = graph.add_node(create_geometry_registry().create_node("SET_POSITION").unwrap());

        let attr = attach_attribute_source(&mut graph, set_position, &AttributeConfig::default())
            .unwrap()
            .unwrap();
        let node = graph.node(attr).unwrap();
        assert_eq!(node.node_type, geometry::NAMED_ATTRIBUTE);
        let first_output = node.outputs[0].id;
        assert!(graph.is_socket_linked(first_output));
    }

    #[test]
    fn test_remove_generated_keeps_user_attributes() {
        let (mut graph, _, bsdf) = material("Mat");
        let user_attr = add(&mut graph, "ATTRIBUTE");
        attach_attribute_source(&mut graph, bsdf, &AttributeConfig::default()).unwrap();

        assert_eq!(remove_generated_attributes(&mut graph), 1);
        assert!(graph.contains_node(user_attr));
        assert_eq!(remove_generated_attributes(&mut graph), 0);
    }
}
