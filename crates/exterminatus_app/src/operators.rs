// SPDX-License-Identifier: MIT OR Apache-2.0
//! Operators that act on the scene: delete, group and report unused nodes.
//!
//! Operators return an [`OperatorOutcome`] carrying a status and the
//! messages shown to the user. [`invoke`] is the boundary that turns an
//! [`OperatorError`] into a cancelled outcome with an error message.

use crate::scene::Scene;
use crate::settings::Settings;
use exterminatus_graph::attribute::{attach_attribute_source, remove_generated_attributes};
use exterminatus_graph::layout::{place_left_of_used, remove_frames_named};
use exterminatus_graph::report::{render_json, render_report};
use exterminatus_graph::usage::collect_group_usage;
use exterminatus_graph::{
    find_unused_recursive, AnalysisConfig, AnalysisError, ConnectionError, GraphId, Library, NodeId, UnusedAnalysis,
};

/// Which graphs an operator processes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// The graph open in the editor
    #[default]
    Active,
    /// Every top-level graph
    AllTopLevel,
}

/// How an operator run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    /// Ran to completion
    Finished,
    /// Did nothing, or aborted
    Cancelled,
}

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational
    Info,
    /// Something was missing
    Warning,
    /// Something failed
    Error,
}

impl MessageLevel {
    /// Upper-case label used when printing
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLevel::Info => "INFO",
            MessageLevel::Warning => "WARNING",
            MessageLevel::Error => "ERROR",
        }
    }
}

/// Result of running an operator
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorOutcome {
    /// Final status
    pub status: OperatorStatus,
    /// Messages for the user, in order
    pub messages: Vec<(MessageLevel, String)>,
    /// Rendered report, for report operators
    pub report: Option<String>,
}

impl OperatorOutcome {
    /// A finished outcome with no messages
    pub fn finished() -> Self {
        Self {
            status: OperatorStatus::Finished,
            messages: Vec::new(),
            report: None,
        }
    }

    /// A cancelled outcome with no messages
    pub fn cancelled() -> Self {
        Self {
            status: OperatorStatus::Cancelled,
            ..Self::finished()
        }
    }

    /// Append a message
    pub fn with_message(mut self, level: MessageLevel, text: impl Into<String>) -> Self {
        self.messages.push((level, text.into()));
        self
    }

    /// Append an info message
    pub fn info(self, text: impl Into<String>) -> Self {
        self.with_message(MessageLevel::Info, text)
    }

    /// Append a warning message
    pub fn warning(self, text: impl Into<String>) -> Self {
        self.with_message(MessageLevel::Warning, text)
    }

    /// Whether the operator finished
    pub fn is_finished(&self) -> bool {
        self.status == OperatorStatus::Finished
    }
}

/// Error raised inside an operator
#[derive(Debug, thiserror::Error)]
pub enum OperatorError {
    /// Analysis failed on malformed input
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// A generated link could not be made
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Report could not be serialized
    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

/// What an operator sees while running
pub struct OperatorContext<'a> {
    /// Scene being edited
    pub scene: &'a mut Scene,
    /// Current settings
    pub settings: &'a Settings,
}

/// An action run against the scene
pub trait Operator {
    /// Short name used in logs and error messages
    fn label(&self) -> &str;

    /// Run the operator
    fn execute(&self, ctx: &mut OperatorContext<'_>) -> Result<OperatorOutcome, OperatorError>;
}

/// Run an operator, converting errors into a cancelled outcome
pub fn invoke(operator: &dyn Operator, ctx: &mut OperatorContext<'_>) -> OperatorOutcome {
    match operator.execute(ctx) {
        Ok(outcome) => {
            tracing::info!(operator = operator.label(), status = ?outcome.status, "operator done");
            outcome
        }
        Err(e) => {
            tracing::error!(operator = operator.label(), "{e}");
            OperatorOutcome::cancelled().with_message(MessageLevel::Error, format!("{} failed: {e}", operator.label()))
        }
    }
}

/// Graphs covered by `scope`, `None` when there is no active graph
fn target_graphs(scene: &Scene, scope: Scope) -> Option<Vec<GraphId>> {
    match scope {
        Scope::Active => scene.active().map(|graph| vec![graph.id]),
        Scope::AllTopLevel => Some(scene.library.top_level_ids().to_vec()),
    }
}

fn graph_name(library: &Library, graph_id: GraphId) -> String {
    library
        .graph(graph_id)
        .map(|g| g.name.clone())
        .unwrap_or_else(|| format!("{graph_id:?}"))
}

/// Run `per_graph` over the scope's graphs.
///
/// A failure aborts a single-graph run. For [`Scope::AllTopLevel`] the
/// failure is recorded as an error message and the next graph is processed.
fn for_each_graph<T>(
    ctx: &mut OperatorContext<'_>,
    scope: Scope,
    mut per_graph: impl FnMut(&mut Library, GraphId, &Settings) -> Result<T, OperatorError>,
) -> Result<Option<(Vec<T>, Vec<String>)>, OperatorError> {
    let Some(targets) = target_graphs(ctx.scene, scope) else {
        return Ok(None);
    };
    let mut results = Vec::with_capacity(targets.len());
    let mut failures = Vec::new();
    for graph_id in targets {
        match per_graph(&mut ctx.scene.library, graph_id, ctx.settings) {
            Ok(result) => results.push(result),
            Err(e) if scope == Scope::AllTopLevel => {
                let name = graph_name(&ctx.scene.library, graph_id);
                tracing::error!(graph = %name, "{e}");
                failures.push(format!("{name}: {e}"));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(Some((results, failures)))
}

fn no_active_graph() -> OperatorOutcome {
    OperatorOutcome::finished().info("No active node graph")
}

/// Attribute filtering only applies to reports
fn mutation_config(config: &AnalysisConfig) -> AnalysisConfig {
    AnalysisConfig {
        include_attribute_sources: true,
        ..config.clone()
    }
}

fn with_failures(mut outcome: OperatorOutcome, failures: Vec<String>) -> OperatorOutcome {
    for failure in failures {
        outcome = outcome.with_message(MessageLevel::Error, failure);
    }
    outcome
}

/// Delete every unused node found in a graph and in the group trees of its
/// unused group instances. Returns the number of nodes removed.
///
/// Unused attribute-source nodes are always removed, whatever
/// `config.include_attribute_sources` says.
pub fn delete_unused_in(
    library: &mut Library,
    graph_id: GraphId,
    config: &AnalysisConfig,
) -> Result<usize, AnalysisError> {
    let analysis = find_unused_recursive(library, graph_id, "", &mutation_config(config))?;
    let removed = analysis
        .records()
        .filter(|record| library.remove_node(record.graph, record.node).is_some())
        .count();
    tracing::debug!(graph = %graph_name(library, graph_id), removed, "deleted unused nodes");
    Ok(removed)
}

/// Quarantine the unused nodes owned by a graph.
///
/// Removes the previous quarantine frame and generated attribute nodes,
/// then tags each unused node with an attribute node, lays the block out
/// left of the used nodes and frames it. Returns whether anything was
/// grouped.
pub fn group_unused_in(library: &mut Library, graph_id: GraphId, settings: &Settings) -> Result<bool, OperatorError> {
    {
        let graph = library.graph_mut(graph_id).ok_or(AnalysisError::GraphNotFound(graph_id))?;
        remove_frames_named(graph, &settings.layout.frame_name);
        remove_generated_attributes(graph);
    }

    let analysis = find_unused_recursive(library, graph_id, "", &mutation_config(&settings.analysis))?;
    let owned: Vec<NodeId> = analysis.records_in(graph_id).map(|r| r.node).collect();
    let nested = analysis.len() - owned.len();
    if nested > 0 {
        tracing::debug!(nested, "unused nodes inside group trees left in place");
    }
    if owned.is_empty() {
        return Ok(false);
    }

    let graph = library.graph_mut(graph_id).ok_or(AnalysisError::GraphNotFound(graph_id))?;
    let mut block = Vec::with_capacity(owned.len() * 2);
    for node_id in owned {
        if let Some(attr) = attach_attribute_source(graph, node_id, &settings.attribute)? {
            block.push(attr);
        }
        block.push(node_id);
    }

    let used: Vec<NodeId> = graph
        .nodes()
        .filter(|n| !n.is_frame() && !block.contains(&n.id))
        .map(|n| n.id)
        .collect();
    place_left_of_used(graph, &block, &used, &settings.layout);

    tracing::debug!(graph = %graph.name, nodes = block.len(), "grouped unused nodes");
    Ok(true)
}

/// Analyze every top-level graph and cross-reference group usage
pub fn analyze_top_level(library: &Library, config: &AnalysisConfig) -> Result<UnusedAnalysis, AnalysisError> {
    let mut analysis = UnusedAnalysis::default();
    for graph in library.top_level_graphs() {
        analysis.merge(find_unused_recursive(library, graph.id, &graph.name, config)?);
    }
    collect_group_usage(&mut analysis, library.top_level_graphs());
    Ok(analysis)
}

/// Delete unused nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteUnused {
    /// Graphs to process
    pub scope: Scope,
}

impl Operator for DeleteUnused {
    fn label(&self) -> &str {
        match self.scope {
            Scope::Active => "Delete unused (active graph)",
            Scope::AllTopLevel => "Delete unused (all graphs)",
        }
    }

    fn execute(&self, ctx: &mut OperatorContext<'_>) -> Result<OperatorOutcome, OperatorError> {
        let Some((removed, failures)) = for_each_graph(ctx, self.scope, |library, graph_id, settings| {
            Ok(delete_unused_in(library, graph_id, &settings.analysis)?)
        })?
        else {
            return Ok(no_active_graph());
        };

        let graphs = removed.len();
        let total: usize = removed.into_iter().sum();
        let outcome = if total == 0 {
            OperatorOutcome::finished().info("No unused nodes found")
        } else if self.scope == Scope::AllTopLevel {
            OperatorOutcome::finished().info(format!("Deleted {total} unused nodes from {graphs} graphs"))
        } else {
            OperatorOutcome::finished().info(format!("Deleted {total} unused nodes"))
        };
        Ok(with_failures(outcome, failures))
    }
}

/// Collect unused nodes into a framed grid
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupUnused {
    /// Graphs to process
    pub scope: Scope,
}

impl Operator for GroupUnused {
    fn label(&self) -> &str {
        match self.scope {
            Scope::Active => "Group unused (active graph)",
            Scope::AllTopLevel => "Group unused (all graphs)",
        }
    }

    fn execute(&self, ctx: &mut OperatorContext<'_>) -> Result<OperatorOutcome, OperatorError> {
        let Some((grouped, failures)) = for_each_graph(ctx, self.scope, group_unused_in)? else {
            return Ok(no_active_graph());
        };

        let processed = grouped.len();
        let with_unused = grouped.into_iter().filter(|g| *g).count();
        let outcome = if with_unused == 0 {
            OperatorOutcome::finished().info("No unused nodes found")
        } else if self.scope == Scope::AllTopLevel {
            OperatorOutcome::finished().info(format!(
                "Processed {processed} graphs, grouped unused nodes in {with_unused}"
            ))
        } else {
            OperatorOutcome::finished().info("Unused nodes grouped")
        };
        Ok(with_failures(outcome, failures))
    }
}

/// Output format of [`BuildReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Build the unused-node report over every top-level graph
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildReport {
    /// Output format
    pub format: ReportFormat,
}

impl Operator for BuildReport {
    fn label(&self) -> &str {
        "Unused nodes report"
    }

    fn execute(&self, ctx: &mut OperatorContext<'_>) -> Result<OperatorOutcome, OperatorError> {
        let library = &ctx.scene.library;
        let graphs = library.top_level_ids().len();
        let analysis = analyze_top_level(library, &ctx.settings.analysis)?;

        let report = match self.format {
            ReportFormat::Text => {
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
                render_report(&analysis, graphs, &timestamp)
            }
            ReportFormat::Json => render_json(&analysis, graphs)?,
        };

        let outcome = if graphs == 0 {
            OperatorOutcome::finished().info("No graphs to analyze")
        } else if analysis.is_empty() {
            OperatorOutcome::finished().info(format!("Analyzed {graphs} graphs, all nodes are in use"))
        } else {
            OperatorOutcome::finished().info(format!("Found {} unused nodes in {graphs} graphs", analysis.len()))
        };
        Ok(OperatorOutcome {
            report: Some(report),
            ..outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_scene;
    use exterminatus_graph::graphs::shader::create_shader_registry;
    use exterminatus_graph::{Graph, GraphKind, Node, NodeKind, OutputKind, Socket, SocketType};

    fn run(operator: &dyn Operator, scene: &mut Scene) -> OperatorOutcome {
        run_with(operator, scene, &Settings::default())
    }

    fn run_with(operator: &dyn Operator, scene: &mut Scene, settings: &Settings) -> OperatorOutcome {
        let mut ctx = OperatorContext { scene, settings };
        invoke(operator, &mut ctx)
    }

    fn count_type(graph: &Graph, node_type: &str) -> usize {
        graph.nodes().filter(|n| n.node_type == node_type).count()
    }

    #[test]
    fn test_delete_active_removes_unused_without_dangling_links() {
        let registry = create_shader_registry();
        let mut graph = Graph::new("Mat", GraphKind::Shader);
        let output = graph.add_node(registry.create_node("OUTPUT_MATERIAL").unwrap());
        let bsdf = graph.add_node(registry.create_node("BSDF_PRINCIPLED").unwrap());
        let out_socket = graph.node(bsdf).unwrap().outputs[0].id;
        let in_socket = graph.node(output).unwrap().inputs[0].id;
        graph.connect(bsdf, out_socket, output, in_socket).unwrap();

        // Two unused chains: value -> math -> mix, and a lone noise + image pair
        let value = graph.add_node(registry.create_node("VALUE").unwrap());
        let math = graph.add_node(registry.create_node("MATH").unwrap());
        let mix = graph.add_node(registry.create_node("MIX").unwrap());
        for (from, to) in [(value, math), (math, mix)] {
            let from_socket = graph.node(from).unwrap().outputs[0].id;
            let to_socket = graph.node(to).unwrap().inputs[0].id;
            graph.connect(from, from_socket, to, to_socket).unwrap();
        }
        graph.add_node(registry.create_node("TEX_NOISE").unwrap());
        graph.add_node(registry.create_node("TEX_IMAGE").unwrap());

        let mut library = Library::new();
        library.add_top_level(graph);
        let mut scene = Scene::new(library);
        scene.activate("Mat").unwrap();

        let outcome = run(&DeleteUnused::default(), &mut scene);
        assert!(outcome.is_finished());
        assert_eq!(outcome.messages, vec![(MessageLevel::Info, "Deleted 5 unused nodes".to_string())]);

        let graph = scene.active().unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.link_count(), 1);
        for link in graph.links() {
            assert!(graph.contains_node(link.from_node));
            assert!(graph.contains_node(link.to_node));
        }
    }

    #[test]
    fn test_missing_active_graph_finishes_with_info() {
        let mut scene = demo_scene();
        let before = scene.library.find_graph_by_name("Brick").unwrap().node_count();
        for operator in [
            &DeleteUnused::default() as &dyn Operator,
            &GroupUnused::default() as &dyn Operator,
        ] {
            let outcome = run(operator, &mut scene);
            assert_eq!(outcome.status, OperatorStatus::Finished);
            assert_eq!(
                outcome.messages,
                vec![(MessageLevel::Info, "No active node graph".to_string())]
            );
        }
        assert_eq!(scene.library.find_graph_by_name("Brick").unwrap().node_count(), before);
    }

    fn material_with_stray_attribute() -> (Scene, GraphId, NodeId) {
        let registry = create_shader_registry();
        let mut graph = Graph::new("Mat", GraphKind::Shader);
        let output = graph.add_node(registry.create_node("OUTPUT_MATERIAL").unwrap());
        let bsdf = graph.add_node(registry.create_node("BSDF_PRINCIPLED").unwrap().with_position(-300.0, 0.0));
        let out_socket = graph.node(bsdf).unwrap().outputs[0].id;
        let in_socket = graph.node(output).unwrap().inputs[0].id;
        graph.connect(bsdf, out_socket, output, in_socket).unwrap();
        let attr = graph.add_node(registry.create_node("ATTRIBUTE").unwrap().with_position(0.0, -300.0));

        let mut library = Library::new();
        let graph_id = library.add_top_level(graph);
        let mut scene = Scene::new(library);
        scene.activate("Mat").unwrap();
        (scene, graph_id, attr)
    }

    #[test]
    fn test_hidden_attributes_are_still_deleted_and_grouped() {
        let mut settings = Settings::default();
        settings.analysis.include_attribute_sources = false;

        let (mut scene, graph_id, attr) = material_with_stray_attribute();
        let outcome = run_with(&DeleteUnused::default(), &mut scene, &settings);
        assert_eq!(outcome.messages[0].1, "Deleted 1 unused nodes");
        assert!(!scene.library.graph(graph_id).unwrap().contains_node(attr));

        let (mut scene, graph_id, attr) = material_with_stray_attribute();
        let outcome = run_with(&GroupUnused::default(), &mut scene, &settings);
        assert_eq!(outcome.messages[0].1, "Unused nodes grouped");
        let graph = scene.library.graph(graph_id).unwrap();
        let frame = graph.nodes().find(|n| n.is_frame()).unwrap();
        assert_eq!(graph.node(attr).unwrap().parent, Some(frame.id));

        // The report still honours the filter
        let outcome = run_with(&BuildReport::default(), &mut scene, &settings);
        assert!(!outcome.report.unwrap().contains("Attribute"));
    }

    #[test]
    fn test_delete_all_top_level() {
        let mut scene = demo_scene();
        let outcome = run(
            &DeleteUnused {
                scope: Scope::AllTopLevel,
            },
            &mut scene,
        );
        assert!(outcome.is_finished());
        assert_eq!(
            outcome.messages[0].1,
            "Deleted 5 unused nodes from 4 graphs".to_string()
        );

        let again = run(
            &DeleteUnused {
                scope: Scope::AllTopLevel,
            },
            &mut scene,
        );
        assert_eq!(again.messages[0].1, "No unused nodes found");
    }

    #[test]
    fn test_group_active_frames_and_tags_unused() {
        let mut scene = demo_scene();
        let brick_id = scene.activate("Brick").unwrap();
        let settings = Settings::default();

        let outcome = run(&GroupUnused::default(), &mut scene);
        assert!(outcome.is_finished());
        assert_eq!(outcome.messages[0].1, "Unused nodes grouped");

        let brick = scene.library.graph(brick_id).unwrap();
        let frames: Vec<&Node> = brick.nodes().filter(|n| n.is_frame()).collect();
        assert_eq!(frames.len(), 1);
        let frame = frames[0];
        assert_eq!(frame.name, settings.layout.frame_name);

        let noise = brick.nodes().find(|n| n.node_type == "TEX_NOISE").unwrap();
        let group = brick.nodes().find(|n| n.is_group_instance()).unwrap();
        assert_eq!(noise.parent, Some(frame.id));
        assert_eq!(group.parent, Some(frame.id));

        // Noise and group both had free inputs
        let generated: Vec<&Node> = brick.nodes().filter(|n| n.is_generated_attribute()).collect();
        assert_eq!(generated.len(), 2);
        assert!(generated.iter().all(|n| n.parent == Some(frame.id)));

        let used_min_x = brick
            .nodes()
            .filter(|n| !n.is_frame() && n.parent.is_none())
            .map(|n| n.position[0])
            .fold(f32::INFINITY, f32::min);
        let block_max_x = brick
            .nodes()
            .filter(|n| n.parent == Some(frame.id))
            .map(|n| n.position[0])
            .fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(used_min_x - block_max_x, settings.layout.margin);

        // The Math node inside the shared group tree stays where it is
        let detail = scene.library.find_graph_by_name("DetailTree").unwrap();
        assert!(detail.nodes().all(|n| n.parent.is_none()));
    }

    #[test]
    fn test_group_twice_replaces_previous_frame() {
        let mut scene = demo_scene();
        let brick_id = scene.activate("Brick").unwrap();
        run(&GroupUnused::default(), &mut scene);
        let first = scene.library.graph(brick_id).unwrap().node_count();

        run(&GroupUnused::default(), &mut scene);
        let brick = scene.library.graph(brick_id).unwrap();
        assert_eq!(brick.node_count(), first);
        assert_eq!(brick.nodes().filter(|n| n.is_frame()).count(), 1);
        assert_eq!(count_type(brick, "ATTRIBUTE"), 2);
    }

    #[test]
    fn test_group_all_reports_counts() {
        let mut scene = demo_scene();
        let outcome = run(
            &GroupUnused {
                scope: Scope::AllTopLevel,
            },
            &mut scene,
        );
        assert!(outcome.is_finished());
        assert_eq!(outcome.messages[0].1, "Processed 4 graphs, grouped unused nodes in 3");
    }

    #[test]
    fn test_all_top_level_continues_past_broken_graph() {
        let mut scene = demo_scene();
        let mut broken = Graph::new("Broken", GraphKind::Shader);
        broken.add_node(Node::new("OUTPUT_MATERIAL", "Out", NodeKind::Output(OutputKind::Material)));
        broken.add_node(
            Node::group("Dangling", Some(GraphId::new())).with_output(Socket::output("Result", SocketType::Any)),
        );
        scene.library.add_top_level(broken);

        let outcome = run(
            &DeleteUnused {
                scope: Scope::AllTopLevel,
            },
            &mut scene,
        );
        assert!(outcome.is_finished());
        assert_eq!(outcome.messages[0].1, "Deleted 5 unused nodes from 4 graphs");
        assert_eq!(outcome.messages[1].0, MessageLevel::Error);
        assert!(outcome.messages[1].1.starts_with("Broken: "));

        scene.activate("Broken").unwrap();
        let single = run(&DeleteUnused::default(), &mut scene);
        assert_eq!(single.status, OperatorStatus::Cancelled);
        assert_eq!(single.messages[0].0, MessageLevel::Error);
    }

    #[test]
    fn test_report_over_demo_scene() {
        let mut scene = demo_scene();
        let outcome = run(&BuildReport::default(), &mut scene);
        assert!(outcome.is_finished());
        assert_eq!(outcome.messages[0].1, "Found 5 unused nodes in 4 graphs");

        let report = outcome.report.unwrap();
        assert!(report.starts_with("UNUSED NODES REPORT\nCreated: "));
        assert!(report.contains("Graphs analyzed: 4"));
        assert!(report.contains("[Brick] Noise Texture (TEX_NOISE)"));
        assert!(report.contains("[Brick] DetailTree (GROUP)\n  -> Group used in: [Brick, Metal]\n  -> Connected to output in: [Metal]"));
        assert!(report.contains("[Brick.DetailTree] Math (MATH)"));
        assert!(report.contains("[Compositing] Blur (BLUR)"));
        assert!(report.contains("Total unused nodes found: 5"));
    }

    #[test]
    fn test_report_on_empty_scene() {
        let mut scene = Scene::default();
        let outcome = run(&BuildReport::default(), &mut scene);
        assert!(outcome.is_finished());
        assert_eq!(outcome.messages[0].1, "No graphs to analyze");
        assert!(outcome.report.unwrap().contains("No graphs to analyze."));
    }

    #[test]
    fn test_json_report() {
        let mut scene = demo_scene();
        let outcome = run(
            &BuildReport {
                format: ReportFormat::Json,
            },
            &mut scene,
        );
        let json: serde_json::Value = serde_json::from_str(&outcome.report.unwrap()).unwrap();
        assert_eq!(json["summary"]["unused_total"], 5);
        assert_eq!(json["summary"]["graphs_analyzed"], 4);
    }
}
