// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration values passed into analysis, attribute generation and layout.

use crate::node::AttributeDomain;
use serde::{Deserialize, Serialize};

/// What to report for a graph that has no output terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoOutputPolicy {
    /// Report nothing for the graph
    #[default]
    Skip,
    /// Report every node of the graph as unused
    ReportAll,
}

/// Options for unused-node analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Keep unused attribute-source nodes in the results.
    ///
    /// Only reports drop them; deleting and grouping act on every unused node.
    pub include_attribute_sources: bool,
    /// Handling of graphs without output terminals
    pub no_output_policy: NoOutputPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_attribute_sources: true,
            no_output_policy: NoOutputPolicy::Skip,
        }
    }
}

/// Output of an attribute node to link into the unused node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttributeChannel {
    /// Color output
    #[default]
    Color,
    /// Vector output
    Vector,
    /// Factor output
    Fac,
    /// Alpha output
    Alpha,
}

impl AttributeChannel {
    /// Name of the output socket carrying this channel
    pub fn socket_name(&self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Vector => "Vector",
            Self::Fac => "Fac",
            Self::Alpha => "Alpha",
        }
    }
}

/// How generated attribute nodes are set up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeConfig {
    /// Attribute name written into generated nodes
    pub text: String,
    /// Lookup domain of generated nodes
    pub domain: AttributeDomain,
    /// Output linked into the unused node
    pub channel: AttributeChannel,
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self {
            text: "unused".to_string(),
            domain: AttributeDomain::Geometry,
            channel: AttributeChannel::Color,
        }
    }
}

/// Grid and frame geometry for quarantining unused nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Grid columns
    pub columns: usize,
    /// Horizontal gap between columns
    pub gap_x: f32,
    /// Vertical gap between rows
    pub gap_y: f32,
    /// Clearance between the block and the used nodes
    pub margin: f32,
    /// Distance of an attribute node to the left of its target
    pub attribute_offset: f32,
    /// Frame padding around the block
    pub frame_padding: f32,
    /// Name of the quarantine frame
    pub frame_name: String,
    /// Label of the quarantine frame
    pub frame_label: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 6,
            gap_x: 120.0,
            gap_y: 80.0,
            margin: 400.0,
            attribute_offset: 150.0,
            frame_padding: 40.0,
            frame_name: "UNUSED_FRAME".to_string(),
            frame_label: "UNUSED".to_string(),
        }
    }
}
