// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene handed to the operators: the graph library and the active graph.

use exterminatus_graph::{Graph, GraphId, Library};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The host data the operators work on
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// All graphs
    pub library: Library,
    /// Graph open in the node editor
    #[serde(default)]
    pub active_graph: Option<GraphId>,
}

impl Scene {
    /// Create a scene from a library with no active graph
    pub fn new(library: Library) -> Self {
        Self {
            library,
            active_graph: None,
        }
    }

    /// Make the graph named `name` active
    pub fn activate(&mut self, name: &str) -> Result<GraphId, SceneError> {
        let id = self
            .library
            .find_graph_by_name(name)
            .map(|g| g.id)
            .ok_or_else(|| SceneError::UnknownGraph(name.to_string()))?;
        self.active_graph = Some(id);
        Ok(id)
    }

    /// The active graph, if any
    pub fn active(&self) -> Option<&Graph> {
        self.active_graph.and_then(|id| self.library.graph(id))
    }

    /// Load a scene from a RON file
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        let scene: Scene = ron::from_str(&content)?;
        tracing::info!(
            "Loaded scene {} ({} graphs, {} top-level)",
            path.display(),
            scene.library.graph_count(),
            scene.library.top_level_ids().len()
        );
        Ok(scene)
    }

    /// Save the scene to a RON file
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, content)?;
        tracing::info!("Saved scene {}", path.display());
        Ok(())
    }
}

/// Error loading, saving or addressing a scene
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// File could not be read or written
    #[error("Scene I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a valid scene
    #[error("Invalid scene file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Scene could not be serialized
    #[error("Could not serialize scene: {0}")]
    Serialize(#[from] ron::Error),

    /// No graph with the requested name
    #[error("No graph named '{0}'")]
    UnknownGraph(String),
}
