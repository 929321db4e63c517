// SPDX-License-Identifier: MIT OR Apache-2.0
//! Command line front end.

use crate::demo::demo_scene;
use crate::operators::{
    invoke, BuildReport, DeleteUnused, GroupUnused, MessageLevel, Operator, OperatorContext, OperatorOutcome,
    OperatorStatus, ReportFormat, Scope,
};
use crate::scene::{Scene, SceneError};
use crate::settings::{Settings, SettingsError};
use clap::{Args, Parser, Subcommand};
use exterminatus_graph::NoOutputPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exterminatus")]
#[command(about = "Find, group and delete unused nodes in node graphs")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./exterminatus.ron when present)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Leave attribute nodes out of the report
    #[arg(long, global = true)]
    hide_attributes: bool,

    /// Report every node of graphs that have no output node
    #[arg(long, global = true)]
    report_graphs_without_outputs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the unused nodes report for every top-level graph
    Report {
        /// Scene file (RON)
        scene: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete unused nodes
    Delete(MutateArgs),
    /// Move unused nodes into a labelled frame left of the used ones
    Group(MutateArgs),
    /// Print the report for a built-in sample scene
    Demo,
}

#[derive(Args, Debug)]
struct MutateArgs {
    /// Scene file (RON)
    scene: PathBuf,
    /// Graph to process (defaults to the scene's active graph)
    #[arg(long, short = 'g', conflicts_with = "all")]
    graph: Option<String>,
    /// Process every top-level graph
    #[arg(long)]
    all: bool,
    /// Write the modified scene back to its file
    #[arg(long)]
    write: bool,
}

/// Error outside the operators themselves
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Settings could not be loaded
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Scene could not be loaded, saved or addressed
    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl Cli {
    fn settings(&self) -> Result<Settings, CliError> {
        let mut settings = Settings::load_or_default(self.config.as_deref())?;
        if self.hide_attributes {
            settings.analysis.include_attribute_sources = false;
        }
        if self.report_graphs_without_outputs {
            settings.analysis.no_output_policy = NoOutputPolicy::ReportAll;
        }
        Ok(settings)
    }

    /// Run the selected command and return the operator status
    pub fn run(self) -> Result<OperatorStatus, CliError> {
        let settings = self.settings()?;
        match self.command {
            Command::Report { scene, json } => {
                let mut scene = Scene::load(&scene)?;
                let format = if json { ReportFormat::Json } else { ReportFormat::Text };
                Ok(execute(&BuildReport { format }, &mut scene, &settings))
            }
            Command::Delete(args) => mutate(&DeleteUnused { scope: args.scope() }, &args, &settings),
            Command::Group(args) => mutate(&GroupUnused { scope: args.scope() }, &args, &settings),
            Command::Demo => {
                let mut scene = demo_scene();
                Ok(execute(&BuildReport::default(), &mut scene, &settings))
            }
        }
    }
}

impl MutateArgs {
    fn scope(&self) -> Scope {
        if self.all {
            Scope::AllTopLevel
        } else {
            Scope::Active
        }
    }
}

fn mutate(operator: &dyn Operator, args: &MutateArgs, settings: &Settings) -> Result<OperatorStatus, CliError> {
    let mut scene = Scene::load(&args.scene)?;
    if let Some(name) = &args.graph {
        scene.activate(name)?;
    }
    let status = execute(operator, &mut scene, settings);
    if args.write && status == OperatorStatus::Finished {
        scene.save(&args.scene)?;
    }
    Ok(status)
}

fn execute(operator: &dyn Operator, scene: &mut Scene, settings: &Settings) -> OperatorStatus {
    let mut ctx = OperatorContext { scene, settings };
    let outcome = invoke(operator, &mut ctx);
    print_outcome(&outcome);
    outcome.status
}

fn print_outcome(outcome: &OperatorOutcome) {
    if let Some(report) = &outcome.report {
        println!("{report}");
    }
    for (level, text) in &outcome.messages {
        match level {
            MessageLevel::Info => eprintln!("{text}"),
            MessageLevel::Warning | MessageLevel::Error => eprintln!("{}: {text}", level.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    fn write_demo(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("scene.ron");
        demo_scene().save(&path).unwrap();
        path
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse(&["exterminatus", "--hide-attributes", "group", "s.ron", "--all"]);
        assert!(cli.hide_attributes);
        match cli.command {
            Command::Group(args) => {
                assert_eq!(args.scope(), Scope::AllTopLevel);
                assert!(!args.write);
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["exterminatus", "delete", "s.ron", "--all", "--graph", "Brick"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_settings() {
        let cli = parse(&["exterminatus", "--report-graphs-without-outputs", "--hide-attributes", "demo"]);
        let settings = cli.settings().unwrap();
        assert!(!settings.analysis.include_attribute_sources);
        assert_eq!(settings.analysis.no_output_policy, NoOutputPolicy::ReportAll);
    }

    #[test]
    fn test_delete_writes_only_with_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_demo(&dir);

        let status = parse(&["exterminatus", "delete", path.to_str().unwrap(), "--graph", "Sky"])
            .run()
            .unwrap();
        assert_eq!(status, OperatorStatus::Finished);
        let sky = Scene::load(&path).unwrap();
        assert_eq!(sky.library.find_graph_by_name("Sky").unwrap().node_count(), 3);

        parse(&["exterminatus", "delete", path.to_str().unwrap(), "--graph", "Sky", "--write"])
            .run()
            .unwrap();
        let sky = Scene::load(&path).unwrap();
        assert_eq!(sky.library.find_graph_by_name("Sky").unwrap().node_count(), 2);
    }

    #[test]
    fn test_delete_without_active_graph_finishes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_demo(&dir);
        let status = parse(&["exterminatus", "delete", path.to_str().unwrap(), "--write"])
            .run()
            .unwrap();
        assert_eq!(status, OperatorStatus::Finished);
        let scene = Scene::load(&path).unwrap();
        assert_eq!(scene.library.find_graph_by_name("Sky").unwrap().node_count(), 3);
    }

    #[test]
    fn test_unknown_graph_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_demo(&dir);
        let result = parse(&["exterminatus", "group", path.to_str().unwrap(), "--graph", "Nope"]).run();
        assert!(matches!(result, Err(CliError::Scene(SceneError::UnknownGraph(_)))));
    }
}
