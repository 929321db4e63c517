// SPDX-License-Identifier: MIT OR Apache-2.0
//! `exterminatus` - find, group and delete unused nodes in node graphs
//!
//! Operates on a scene file holding a library of shader, geometry and
//! compositor graphs:
//! - `report` prints every unused node of every top-level graph, including
//!   nodes inside unused group instances
//! - `group` moves unused nodes into a labelled frame left of the used ones
//! - `delete` removes them
//!
//! Logging goes to stderr and is filtered with `RUST_LOG`.

mod cli;
mod demo;
mod operators;
mod scene;
mod settings;

use clap::Parser;
use cli::Cli;
use operators::OperatorStatus;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["exterminatus=info", "exterminatus_graph=warn"] {
        if let Ok(directive) = directive.parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().run() {
        Ok(OperatorStatus::Finished) => {}
        Ok(OperatorStatus::Cancelled) => std::process::exit(1),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
