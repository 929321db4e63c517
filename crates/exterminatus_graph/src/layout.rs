// SPDX-License-Identifier: MIT OR Apache-2.0
//! Grid layout and framing of a set of nodes.
//!
//! Node positions follow the editor convention: `position` is the top-left
//! corner and y grows upwards, so a node spans
//! `[x, x + width] x [y - height, y]`.

use crate::config::LayoutConfig;
use crate::graph::Graph;
use crate::node::{Node, NodeId};
use std::collections::HashMap;

/// Axis-aligned bounds of a set of nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x and y covered
    pub min: [f32; 2],
    /// Largest x and y covered
    pub max: [f32; 2],
}

impl Bounds {
    /// Bounds of the nodes' full extents, `None` when empty
    pub fn of_nodes<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Option<Self> {
        nodes.into_iter().fold(None, |acc, n| {
            let (lo, hi) = ([n.position[0], n.min_y()], [n.max_x(), n.position[1]]);
            Some(match acc {
                None => Bounds { min: lo, max: hi },
                Some(b) => Bounds {
                    min: [b.min[0].min(lo[0]), b.min[1].min(lo[1])],
                    max: [b.max[0].max(hi[0]), b.max[1].max(hi[1])],
                },
            })
        })
    }

    /// Width of the bounds
    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    /// Height of the bounds
    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }
}

/// Arrange `nodes` into a grid of `config.columns` columns.
///
/// Regular nodes are taken top-to-bottom then left-to-right and placed
/// row-major. A column is as wide as its widest node, a row as tall as its
/// tallest node; the grid starts at the top-left of the nodes' previous
/// positions. Generated attribute nodes are kept out of the grid and put
/// `config.attribute_offset` to the left of the node they were made for.
pub fn layout_grid(graph: &mut Graph, nodes: &[NodeId], config: &LayoutConfig) {
    let columns = config.columns.max(1);

    let mut regular: Vec<&Node> = Vec::new();
    let mut attributes: Vec<&Node> = Vec::new();
    for node in nodes.iter().filter_map(|id| graph.node(*id)) {
        if node.is_generated_attribute() {
            attributes.push(node);
        } else {
            regular.push(node);
        }
    }

    let attribute_targets: Vec<(NodeId, NodeId)> = attributes
        .iter()
        .filter_map(|attr| {
            let target = match attr.attribute_target() {
                Some(id) => regular.iter().find(|n| n.id == id)?,
                None => {
                    let target_name = attr.attribute_target_name()?;
                    regular.iter().find(|n| n.name == target_name)?
                }
            };
            Some((attr.id, target.id))
        })
        .collect();

    if regular.is_empty() {
        return;
    }

    regular.sort_by(|a, b| {
        b.position[1]
            .total_cmp(&a.position[1])
            .then(a.position[0].total_cmp(&b.position[0]))
    });

    let mut col_w = vec![0.0_f32; columns];
    let mut row_h: Vec<f32> = Vec::new();
    for (i, node) in regular.iter().enumerate() {
        let (r, c) = (i / columns, i % columns);
        if row_h.len() <= r {
            row_h.push(0.0);
        }
        col_w[c] = col_w[c].max(node.size[0]);
        row_h[r] = row_h[r].max(node.size[1]);
    }

    let origin_x = regular.iter().map(|n| n.position[0]).fold(f32::INFINITY, f32::min);
    let origin_y = regular.iter().map(|n| n.position[1]).fold(f32::NEG_INFINITY, f32::max);

    let placements: Vec<(NodeId, [f32; 2])> = regular
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let (r, c) = (i / columns, i % columns);
            let x = origin_x + col_w[..c].iter().sum::<f32>() + c as f32 * config.gap_x;
            let y = origin_y - row_h[..r].iter().sum::<f32>() - r as f32 * config.gap_y;
            (node.id, [x, y])
        })
        .collect();

    let placed: HashMap<NodeId, [f32; 2]> = placements.iter().copied().collect();
    for (id, position) in placements {
        if let Some(node) = graph.node_mut(id) {
            node.position = position;
        }
    }
    for (attr, target) in attribute_targets {
        let Some(target_position) = placed.get(&target) else {
            continue;
        };
        if let Some(node) = graph.node_mut(attr) {
            node.position = [target_position[0] - config.attribute_offset, target_position[1]];
        }
    }
}

/// Lay out `group_nodes` and move the block left of `used_nodes`, then frame it.
///
/// After the move the rightmost node position of the block sits exactly
/// `config.margin` left of the leftmost used node (x = 0 when there are no
/// used nodes). Every moved node is parented to the new frame, whose ID is
/// returned; `None` when `group_nodes` is empty.
pub fn place_left_of_used(
    graph: &mut Graph,
    group_nodes: &[NodeId],
    used_nodes: &[NodeId],
    config: &LayoutConfig,
) -> Option<NodeId> {
    let group_nodes: Vec<NodeId> = group_nodes.iter().copied().filter(|id| graph.contains_node(*id)).collect();
    if group_nodes.is_empty() {
        return None;
    }

    layout_grid(graph, &group_nodes, config);

    let used_min_x = used_nodes
        .iter()
        .filter_map(|id| graph.node(*id))
        .map(|n| n.position[0])
        .reduce(f32::min)
        .unwrap_or(0.0);
    let max_group_x = group_nodes
        .iter()
        .filter_map(|id| graph.node(*id))
        .map(|n| n.position[0])
        .reduce(f32::max)?;
    let dx = (used_min_x - config.margin) - max_group_x;

    for id in &group_nodes {
        if let Some(node) = graph.node_mut(*id) {
            node.position[0] += dx;
        }
    }

    let bounds = Bounds::of_nodes(group_nodes.iter().filter_map(|id| graph.node(*id)))?;
    let pad = config.frame_padding;
    let frame = Node::frame(config.frame_name.as_str())
        .with_label(config.frame_label.as_str())
        .with_position(bounds.min[0] - pad, bounds.max[1] + pad)
        .with_size(bounds.width() + 2.0 * pad, bounds.height() + 2.0 * pad);
    let frame_id = graph.add_node(frame);

    for id in &group_nodes {
        if let Some(node) = graph.node_mut(*id) {
            node.parent = Some(frame_id);
        }
    }

    tracing::debug!(graph = %graph.name, nodes = group_nodes.len(), dx, "framed nodes left of used block");
    Some(frame_id)
}

/// Remove frames named `name`; nodes inside them are unparented
pub fn remove_frames_named(graph: &mut Graph, name: &str) -> usize {
    let frames: Vec<NodeId> = graph
        .nodes()
        .filter(|n| n.is_frame() && n.name == name)
        .map(|n| n.id)
        .collect();
    for id in &frames {
        graph.remove_node(*id);
    }
    frames.len()
}
