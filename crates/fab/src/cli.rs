//! Command line interface
//!
//! `fab list` shows what the startup pass registered; `fab create`
//! builds one shape through the catalog.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fab_domain::error::{Error, Result};
use fab_infrastructure::{Bootstrapped, ConfigLoader, bootstrap, init_logging};
use fab_registry::{FactoryCatalog, RegistrationReport, registered_descriptors};
use fab_shapes::{ShapeFactory, ShapeId, SizedShapeFactory};
use serde_json::json;
use tracing::debug;

/// Command line interface for fab
#[derive(Parser, Debug)]
#[command(name = "fab")]
#[command(about = "Identifier-keyed factories with link-time auto-registration")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every linked auto-registration and its startup state
    List {
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Construct a shape by identifier
    Create {
        /// Shape identifier
        id: ShapeId,

        /// Size passed to the single-argument factory
        #[arg(long)]
        side: Option<f64>,
    },
}

/// Load configuration, start up, then run the requested command
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let started = bootstrap(&config)?;
    execute(&cli.command, &started, out)
}

/// Run `command` against an already bootstrapped catalog
pub fn execute(command: &Command, started: &Bootstrapped, out: &mut dyn Write) -> Result<()> {
    debug!(?command, "Executing");
    match command {
        Command::List { json } => list(&started.report, *json, out),
        Command::Create { id, side } => create(&started.catalog, *id, *side, out),
    }
}

fn list(report: &RegistrationReport, json: bool, out: &mut dyn Write) -> Result<()> {
    // The startup pass applies the linked table in order, so positions line up
    for (index, entry) in registered_descriptors().iter().enumerate() {
        let state = report
            .state_at(index)
            .map_or("not applied", |state| state.as_str());
        if json {
            let line = json!({
                "factory": entry.factory,
                "product": entry.product,
                "state": state,
            });
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{:<20} {:<12} {state}", entry.factory, entry.product)?;
        }
    }
    Ok(())
}

fn create(
    catalog: &FactoryCatalog,
    id: ShapeId,
    side: Option<f64>,
    out: &mut dyn Write,
) -> Result<()> {
    let shape = match side {
        Some(side) if !side.is_finite() || side < 0.0 => {
            return Err(Error::configuration(format!(
                "--side must be a non-negative number, got {side}"
            )));
        }
        Some(side) => SizedShapeFactory::from_catalog(catalog).try_create(&id, side)?,
        None => ShapeFactory::from_catalog(catalog).try_create(&id)?,
    };

    writeln!(out, "{} area={:.3}", shape.name(), shape.area())?;
    Ok(())
}
