//! Command-line driver around a headless showcase.

pub mod script;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::app::Showcase;
use crate::domains::features::format_heading;
use crate::infra::RuntimeConfig;
use crate::infra::surfaces::{HeadlessTrack, MemoryRegion};

pub use script::Step;

#[derive(Debug, Parser)]
#[command(
    name = "mindband-showcase",
    version,
    about = "Drive the MindBand watch-face carousel and feature descriptions headlessly"
)]
pub struct Cli {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Rendered width of one watch face in pixels
    #[arg(long, default_value_t = 300.0)]
    pub item_width: f32,

    /// TOML config file (defaults to $MINDBAND_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered features
    Features {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the description shown after clicking a watch face
    Select {
        /// Watch face identifier, e.g. sleep-tracking
        id: String,
    },
    /// Run a sequence of steps: next, prev, resize=<px>, select=<id>,
    /// theme=<light|dark>
    Run {
        #[arg(required = true)]
        steps: Vec<Step>,
    },
}

#[derive(Serialize)]
struct FeatureListing<'a> {
    id: &'a str,
    heading: String,
    icon: &'a str,
    colour: &'a str,
    descriptions: &'a [String],
}

pub type HeadlessShowcase = Showcase<HeadlessTrack, MemoryRegion>;

impl Cli {
    pub fn runtime_config(&self) -> Result<RuntimeConfig> {
        let config = match &self.config {
            Some(path) => RuntimeConfig::load_with(Some(path.as_path()), |name| {
                std::env::var(name).ok()
            }),
            None => RuntimeConfig::load(),
        };
        config.context("loading runtime configuration")
    }

    pub fn build_showcase(&self, config: &RuntimeConfig) -> Result<HeadlessShowcase> {
        let track = HeadlessTrack::new(self.width, self.item_width);
        Showcase::new(track, MemoryRegion::new(), config)
            .context("building showcase")
    }
}

/// Execute the parsed command, writing user-facing output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.runtime_config()?;
    let mut showcase = cli.build_showcase(&config)?;

    match &cli.command {
        Command::Features { json } => list_features(&showcase, *json, out),
        Command::Select { id } => {
            showcase
                .select(id)
                .with_context(|| format!("selecting '{id}'"))?;
            write!(out, "{}", showcase.projector().region().render_text())?;
            Ok(())
        }
        Command::Run { steps } => {
            for step in steps {
                script::execute(&mut showcase, step, &config, out)?;
            }
            Ok(())
        }
    }
}

fn list_features(
    showcase: &HeadlessShowcase,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let listings: Vec<_> = showcase
        .registry()
        .iter()
        .map(|(id, record)| FeatureListing {
            id: id.as_str(),
            heading: format_heading(id.as_str()),
            icon: record.icon().as_str(),
            colour: record.colour().as_str(),
            descriptions: record.descriptions(),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &listings)?;
        writeln!(out)?;
        return Ok(());
    }

    for listing in &listings {
        writeln!(
            out,
            "{:<32} {:<20} {:<8} {}",
            listing.id,
            listing.icon,
            listing.colour,
            listing.heading
        )?;
    }
    Ok(())
}
