//! Bulbswitch CLI
//!
//! Simulate the pull-string switch headlessly and export its frames.

use anyhow::Result;
use bulbswitch_app::{AppConfig, GestureScript, SimulateOptions, Simulation};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bulbswitch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pull-string light switch simulator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a gesture against the switch and report what happened
    Simulate {
        /// Config file (TOML); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Gesture script (JSON); a single pull when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Frames per second (overrides host.fps)
        #[arg(long)]
        fps: Option<u32>,

        /// Write SVG frames into this directory
        #[arg(long)]
        svg_dir: Option<PathBuf>,

        /// Only write every n-th frame
        #[arg(long, default_value = "1")]
        every: u32,

        /// Pace frames against the wall clock
        #[arg(long)]
        realtime: bool,

        /// Stop after this many simulated milliseconds
        #[arg(long, default_value = "30000")]
        max_ms: f32,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Output path
        #[arg(default_value = "bulbswitch.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            config,
            script,
            fps,
            svg_dir,
            every,
            realtime,
            max_ms,
        } => cmd_simulate(
            config.as_deref(),
            script.as_deref(),
            SimulateOptions {
                fps: fps.unwrap_or(0),
                svg_dir,
                every,
                realtime,
                max_ms,
            },
        ),

        Commands::InitConfig { path, force } => cmd_init_config(&path, force),
    }
}

fn cmd_simulate(
    config_path: Option<&Path>,
    script_path: Option<&Path>,
    mut options: SimulateOptions,
) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if options.fps == 0 {
        options.fps = config.host.fps;
    }

    let mut simulation = Simulation::new(&config)?;
    let script = match script_path {
        Some(path) => GestureScript::load(path)?,
        None => GestureScript::default_pull(simulation.resting_endpoint()),
    };

    let summary = simulation.run(&script, &options)?;

    println!("frames:      {}", summary.frames);
    println!("elapsed:     {:.1} ms", summary.elapsed_ms);
    println!("pulls:       {}", summary.pulls);
    println!("releases:    {}", summary.releases);
    println!("completions: {}", summary.completions);
    println!("scheme:      {}", summary.scheme);
    println!("length:      {:.1}", summary.length);
    if let Some(dir) = &options.svg_dir {
        println!("svg frames:  {} in {}", summary.svg_frames, dir.display());
    }

    Ok(())
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    AppConfig::write_default(path, force)?;
    info!("Wrote default configuration to {}", path.display());
    Ok(())
}
