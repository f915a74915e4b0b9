//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use framecam::output::OutputMode;

/// framecam - in-world camera control over HTTP
#[derive(Parser, Debug)]
#[command(
    name = "framecam",
    version,
    about = "In-world camera control over HTTP",
    long_about = "Embed an HTTP server in a 3D engine's frame loop.\n\n\
                  Clients reposition the in-world camera via query parameters\n\
                  and retrieve screenshots, cube-map sets, previews and\n\
                  panoramas as published image files."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter config file
    Init {
        /// Config file path (defaults to ~/.framecam/config.toml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Run the standalone headless host loop
    Serve {
        /// Config file path (defaults to ~/.framecam/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen address
        #[arg(long)]
        bind: Option<String>,

        /// Screenshot staging directory
        #[arg(long)]
        capture_dir: Option<PathBuf>,

        /// Publish directory
        #[arg(long)]
        img_dir: Option<PathBuf>,

        /// URL prefix for published images
        #[arg(long)]
        url_base: Option<String>,

        /// Frame rate of the host loop
        #[arg(long)]
        fps: Option<u32>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { path, force }) => commands::init(path, force, output_mode),
        Some(Command::Serve {
            config,
            port,
            bind,
            capture_dir,
            img_dir,
            url_base,
            fps,
        }) => commands::serve(
            commands::ServeArgs {
                config,
                port,
                bind,
                capture_dir,
                img_dir,
                url_base,
                fps,
            },
            output_mode,
        ),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("framecam v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("framecam v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'framecam --help' for usage");
                println!("Run 'framecam serve' to start the standalone host");
            }
            Ok(())
        },
    }
}
