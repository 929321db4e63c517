// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the graph model.

use crate::graph::GraphId;
use crate::socket::{Socket, SocketId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label carried by attribute nodes created by the group-unused operator
pub const GENERATED_ATTRIBUTE_LABEL: &str = "_tmp_attr";

/// Name prefix of generated attribute nodes; the rest is the target's name
pub const ATTRIBUTE_NAME_PREFIX: &str = "Attr_";

/// Default node size when a template does not specify one
pub const DEFAULT_NODE_SIZE: [f32; 2] = [140.0, 100.0];

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of output terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputKind {
    /// Material output
    Material,
    /// World output
    World,
    /// Light output
    Light,
    /// Compositor composite
    Composite,
    /// Compositor file output
    FileOutput,
    /// Compositor viewer
    Viewer,
    /// Group output (inside group trees)
    GroupOutput,
}

impl OutputKind {
    /// Host type tag of this output kind
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Material => "OUTPUT_MATERIAL",
            Self::World => "OUTPUT_WORLD",
            Self::Light => "OUTPUT_LIGHT",
            Self::Composite => "COMPOSITE",
            Self::FileOutput => "OUTPUT_FILE",
            Self::Viewer => "VIEWER",
            Self::GroupOutput => "GROUP_OUTPUT",
        }
    }
}

/// Where an attribute node looks its attribute up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttributeDomain {
    /// Mesh/geometry attribute
    #[default]
    Geometry,
    /// Object custom property
    Object,
    /// Attribute of the instancer
    Instancer,
    /// View layer / scene property
    ViewLayer,
}

/// Payload of an attribute-source node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSource {
    /// Name of the attribute read by the node
    pub attribute: String,
    /// Lookup domain
    pub domain: AttributeDomain,
    /// Set on nodes created by the group-unused operator
    pub generated: bool,
    /// Node a generated attribute was made for
    #[serde(default)]
    pub target: Option<NodeId>,
}

/// Discriminated node kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Any node without special meaning for the analysis
    Ordinary,
    /// Output terminal: the roots of reachability
    Output(OutputKind),
    /// Instance of another graph
    Group {
        /// Payload graph; `None` for an empty group node
        tree: Option<GraphId>,
    },
    /// Visual container
    Frame,
    /// Attribute lookup
    AttributeSource(AttributeSource),
}

impl NodeKind {
    /// Payload-free tag of this kind
    pub fn tag(&self) -> KindTag {
        match self {
            Self::Ordinary => KindTag::Ordinary,
            Self::Output(_) => KindTag::Output,
            Self::Group { .. } => KindTag::Group,
            Self::Frame => KindTag::Frame,
            Self::AttributeSource(_) => KindTag::AttributeSource,
        }
    }
}

/// Payload-free discriminant of [`NodeKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindTag {
    /// See [`NodeKind::Ordinary`]
    Ordinary,
    /// See [`NodeKind::Output`]
    Output,
    /// See [`NodeKind::Group`]
    Group,
    /// See [`NodeKind::Frame`]
    Frame,
    /// See [`NodeKind::AttributeSource`]
    AttributeSource,
}

/// Node type definition used to instantiate nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeTemplate {
    /// Host type tag (e.g. `BSDF_PRINCIPLED`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Kind given to instances
    pub kind: NodeKind,
    /// Default size (width, height)
    pub size: [f32; 2],
    /// Default input sockets
    pub inputs: Vec<Socket>,
    /// Default output sockets
    pub outputs: Vec<Socket>,
}

/// A node instance in a graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Host type tag
    pub node_type: String,
    /// Name, unique within the owning graph
    pub name: String,
    /// Display label (empty when unset)
    #[serde(default)]
    pub label: String,
    /// Kind discriminant and payload
    pub kind: NodeKind,
    /// Location in the editor (y grows upwards)
    pub position: [f32; 2],
    /// Width and height
    pub size: [f32; 2],
    /// Input sockets
    pub inputs: Vec<Socket>,
    /// Output sockets
    pub outputs: Vec<Socket>,
    /// Frame containing this node
    #[serde(default)]
    pub parent: Option<NodeId>,
}

impl Node {
    /// Create a new socket-less node
    pub fn new(node_type: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: NodeId::new(),
            node_type: node_type.into(),
            name: name.into(),
            label: String::new(),
            kind,
            position: [0.0, 0.0],
            size: DEFAULT_NODE_SIZE,
            inputs: Vec::new(),
            outputs: Vec::new(),
            parent: None,
        }
    }

    /// Create a new node from a template
    pub fn from_template(template: &NodeTemplate) -> Self {
        Self {
            id: NodeId::new(),
            node_type: template.id.clone(),
            name: template.name.clone(),
            label: String::new(),
            kind: template.kind.clone(),
            position: [0.0, 0.0],
            size: template.size,
            inputs: template.inputs.iter().map(Socket::instantiate).collect(),
            outputs: template.outputs.iter().map(Socket::instantiate).collect(),
            parent: None,
        }
    }

    /// Create a group instance of `tree`
    pub fn group(name: impl Into<String>, tree: Option<GraphId>) -> Self {
        Self::new("GROUP", name, NodeKind::Group { tree })
    }

    /// Create an empty frame
    pub fn frame(name: impl Into<String>) -> Self {
        Self::new("FRAME", name, NodeKind::Frame)
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Set the size
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Append an input socket
    pub fn with_input(mut self, socket: Socket) -> Self {
        self.inputs.push(socket);
        self
    }

    /// Append an output socket
    pub fn with_output(mut self, socket: Socket) -> Self {
        self.outputs.push(socket);
        self
    }

    /// Get an output socket by index
    pub fn output(&self, index: usize) -> Option<&Socket> {
        self.outputs.get(index)
    }

    /// Get an input socket by name
    pub fn input_named(&self, name: &str) -> Option<&Socket> {
        self.inputs.iter().find(|s| s.name == name)
    }

    /// Get an output socket by name
    pub fn output_named(&self, name: &str) -> Option<&Socket> {
        self.outputs.iter().find(|s| s.name == name)
    }

    /// Get a socket by ID
    pub fn socket(&self, socket_id: &SocketId) -> Option<&Socket> {
        self.inputs
            .iter()
            .find(|s| s.id == *socket_id)
            .or_else(|| self.outputs.iter().find(|s| s.id == *socket_id))
    }

    /// Whether this node is an output terminal
    pub fn is_output_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Output(_))
    }

    /// Whether this node instances another graph
    pub fn is_group_instance(&self) -> bool {
        matches!(self.kind, NodeKind::Group { .. })
    }

    /// Payload graph of a group instance
    pub fn referenced_graph(&self) -> Option<GraphId> {
        match self.kind {
            NodeKind::Group { tree } => tree,
            _ => None,
        }
    }

    /// Whether this node is a frame
    pub fn is_frame(&self) -> bool {
        matches!(self.kind, NodeKind::Frame)
    }

    /// Whether this node is an attribute source
    pub fn is_attribute_source(&self) -> bool {
        matches!(self.kind, NodeKind::AttributeSource(_))
    }

    /// Whether this node is an attribute source created by the group-unused operator
    pub fn is_generated_attribute(&self) -> bool {
        match &self.kind {
            NodeKind::AttributeSource(attr) => attr.generated || self.label == GENERATED_ATTRIBUTE_LABEL,
            _ => false,
        }
    }

    /// Node a generated attribute node was made for, when recorded
    pub fn attribute_target(&self) -> Option<NodeId> {
        match &self.kind {
            NodeKind::AttributeSource(attr) if self.is_generated_attribute() => attr.target,
            _ => None,
        }
    }

    /// Name of the node a generated attribute node was made for
    pub fn attribute_target_name(&self) -> Option<&str> {
        if !self.is_generated_attribute() {
            return None;
        }
        self.name.strip_prefix(ATTRIBUTE_NAME_PREFIX)
    }

    /// Right edge of the node
    pub fn max_x(&self) -> f32 {
        self.position[0] + self.size[0]
    }

    /// Bottom edge of the node
    pub fn min_y(&self) -> f32 {
        self.position[1] - self.size[1]
    }
}

/// Registry of available node templates
pub struct NodeRegistry {
    /// Registered templates by type tag
    types: indexmap::IndexMap<String, NodeTemplate>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            types: indexmap::IndexMap::new(),
        }
    }

    /// Register a node template
    pub fn register(&mut self, template: NodeTemplate) {
        self.types.insert(template.id.clone(), template);
    }

    /// Get a template by type tag
    pub fn get(&self, id: &str) -> Option<&NodeTemplate> {
        self.types.get(id)
    }

    /// Get all registered templates
    pub fn types(&self) -> impl Iterator<Item = &NodeTemplate> {
        self.types.values()
    }

    /// Get templates of a given kind
    pub fn types_of_kind(&self, tag: KindTag) -> impl Iterator<Item = &NodeTemplate> {
        self.types.values().filter(move |t| t.kind.tag() == tag)
    }

    /// Create a node from a type tag
    pub fn create_node(&self, type_id: &str) -> Option<Node> {
        self.get(type_id).map(Node::from_template)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
