//! winoc CLI tool
//!
//! Answers topology queries for a WiNoC mesh.
//!
//! Usage:
//!   winoc [--config <path>] coord <id>
//!   winoc [--config <path>] id <x> <y>
//!   winoc [--config <path>] cluster <a> <b>
//!   winoc [--config <path>] hub <id>
//!   winoc [--config <path>] attach <id>
//!   winoc [--config <path>] wired <a> <b>
//!   winoc [--config <path>] wireless <a> <b>
//!   winoc [--config <path>] path <a> <b>
//!   winoc [--config <path>] summary

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Command;
use crate::error::{CliError, Result};

fn print_usage() {
    eprintln!("winoc - Query WiNoC mesh topology");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  winoc [--config <path>] <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  coord <id>          Coordinate of a node");
    eprintln!("  id <x> <y>          Node id at a coordinate");
    eprintln!("  cluster <a> <b>     Cluster and hub membership of two nodes");
    eprintln!("  hub <id>            Radio hub serving a node");
    eprintln!("  attach <id>         Nearest hub attachment router");
    eprintln!("  wired <a> <b>       Wired (Manhattan) distance");
    eprintln!("  wireless <a> <b>    Wired-to-hub distance plus one radio hop");
    eprintln!("  path <a> <b>        Cheapest of wired and wireless");
    eprintln!("  summary             Mesh description and hop statistics");
    eprintln!();
    eprintln!("Environment:");
    eprintln!(
        "  {}  Path to JSON topology config (default: 8x8 mesh, 4x4 clusters)",
        config::CONFIG_ENV
    );
    eprintln!("  RUST_LOG      Log filter (default: winoc=info,winoc_topology=info)");
}

/// Split `--config <path>` from the command words.
fn split_args(mut args: Vec<String>) -> Result<(Option<PathBuf>, Vec<String>)> {
    match args.iter().position(|a| a == "--config") {
        Some(i) => {
            if i + 1 >= args.len() {
                return Err(CliError::Usage("--config needs a path".into()));
            }
            let path = args.remove(i + 1);
            args.remove(i);
            Ok((Some(PathBuf::from(path)), args))
        }
        None => Ok((None, args)),
    }
}

fn run(args: Vec<String>) -> Result<String> {
    let (explicit, words) = split_args(args)?;
    let command = Command::parse(&words)?;
    let path = config::config_path(explicit);
    let topology = config::load_topology(path.as_deref())?;
    command.run(&topology)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "winoc=info,winoc_topology=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return ExitCode::from(if args.is_empty() { 1 } else { 0 });
    }

    match run(args) {
        Ok(out) => {
            println!("{}", out.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            if matches!(e, CliError::Usage(_)) {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
