// SPDX-License-Identifier: MIT OR Apache-2.0
//! Unused-node analysis for shader, geometry and compositor node graphs.
//!
//! This crate provides:
//! - A node graph model (nodes, sockets, links, a library of graphs)
//! - Reachability from output terminals, following links in both directions
//! - Recursive descent into unused group instances
//! - Cross-referencing of unused group trees against top-level graphs
//! - Grid layout that quarantines unused nodes left of the used ones
//! - Text and JSON reports
//!
//! ## Architecture
//!
//! Graphs own their nodes and links in insertion-ordered maps keyed by
//! opaque IDs. Group nodes refer to other graphs by [`GraphId`]; the
//! [`Library`] resolves those references. Analysis results are keyed by
//! [`NodeId`] and never cached across edits.

pub mod attribute;
pub mod config;
pub mod graph;
pub mod graphs;
pub mod layout;
pub mod library;
pub mod link;
pub mod node;
pub mod reachability;
pub mod report;
pub mod socket;
pub mod unused;
pub mod usage;

#[cfg(test)]
mod test_support;

pub use config::{AnalysisConfig, AttributeChannel, AttributeConfig, LayoutConfig, NoOutputPolicy};
pub use graph::{ConnectionError, Graph, GraphId, GraphKind};
pub use library::{AnalysisError, Library};
pub use link::{Link, LinkId};
pub use node::{AttributeDomain, KindTag, Node, NodeId, NodeKind, OutputKind};
pub use socket::{Socket, SocketDirection, SocketId, SocketType};
pub use unused::{find_unused_recursive, UnusedAnalysis, UnusedNodeRecord};
