// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line shell over the Tourscope viewer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tourscope_imaging_svg::SvgBackend;
use tourscope_solver::{Algorithm, OptimalCosts, RunResult, RunSummary, list_datasets};
use tourscope_viewer::{Viewer, ViewerConfig, ViewerEvent, parse_script};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect and render TSP solver tours")]
struct Args {
    /// Viewer config (JSON); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Surface width in pixels, overriding the config
    #[arg(long, global = true)]
    width: Option<f64>,

    /// Surface height in pixels including the control row, overriding the config
    #[arg(long, global = true)]
    height: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the .tsp instances in a directory as JSON
    Datasets {
        /// Directory to scan
        dir: PathBuf,
    },

    /// Replay viewer events over a recorded run and export the view as SVG
    Render {
        /// Recorded solver result (JSON)
        #[arg(long)]
        result: PathBuf,

        /// Output SVG file
        #[arg(long)]
        out: PathBuf,

        /// Event script to replay before rendering
        #[arg(long)]
        script: Option<PathBuf>,

        /// Inline events, applied after the script
        #[arg(long)]
        events: Option<String>,

        /// Known optimal costs (JSON object keyed by dataset label)
        #[arg(long)]
        optimal: Option<PathBuf>,
    },

    /// Describe one algorithm by id, or all of them
    Describe {
        /// Algorithm id
        id: Option<u8>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match &args.command {
        Command::Datasets { dir } => datasets(dir),
        Command::Render {
            result,
            out,
            script,
            events,
            optimal,
        } => {
            let config = load_config(&args)?;
            render(
                &config,
                result,
                out,
                script.as_deref(),
                events.as_deref(),
                optimal.as_deref(),
            )
        }
        Command::Describe { id } => describe(*id),
    }
}

fn load_config(args: &Args) -> Result<ViewerConfig> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::from_json_file(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate()?;
    debug!(?config, "viewer config");
    Ok(config)
}

fn datasets(dir: &Path) -> Result<()> {
    let entries = list_datasets(dir)?;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn render(
    config: &ViewerConfig,
    result: &Path,
    out: &Path,
    script: Option<&Path>,
    events: Option<&str>,
    optimal: Option<&Path>,
) -> Result<()> {
    let run = RunResult::from_json_file(result)?;
    let graph = run
        .tour_graph()
        .with_context(|| format!("cannot draw {}", result.display()))?;

    let mut replay: Vec<ViewerEvent> = Vec::new();
    if let Some(script) = script {
        let text = fs::read_to_string(script)
            .with_context(|| format!("failed to read script {}", script.display()))?;
        replay.extend(
            parse_script(&text).with_context(|| format!("in script {}", script.display()))?,
        );
    }
    if let Some(events) = events {
        replay.extend(parse_script(events).context("in --events")?);
    }

    let mut viewer = Viewer::new(config);
    for event in replay {
        viewer.handle(event);
    }

    let mut backend = SvgBackend::default();
    viewer.render(&mut backend, &graph);
    let size = viewer.size();
    let svg = backend.to_svg(size.width.max(0.0), size.height.max(0.0));
    fs::write(out, svg).with_context(|| format!("failed to write {}", out.display()))?;

    let table = match optimal {
        Some(path) => OptimalCosts::from_json_file(path)?,
        None => OptimalCosts::new(),
    };
    let summary = RunSummary::with_table(&run, &table);
    info!(
        out = %out.display(),
        nodes = graph.len(),
        transform = %viewer.transform_state().to_matrix_string(),
        "rendered view"
    );
    println!("{summary}");
    Ok(())
}

fn describe(id: Option<u8>) -> Result<()> {
    let algorithms = match id {
        Some(id) => vec![Algorithm::try_from(id)?],
        None => Algorithm::ALL.to_vec(),
    };
    for algorithm in algorithms {
        println!(
            "{:>2}  {}\n    {}",
            algorithm.id(),
            algorithm.label(),
            algorithm.description()
        );
    }
    Ok(())
}
