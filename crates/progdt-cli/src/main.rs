//! progdt CLI Application
//!
//! Command-line interface for printing and inserting ISO-8601 date and time
//! stamps.

mod args;
mod cli;
mod document;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, ProgdtMcpServer};
use progdt_core::{params::parse_time_zone, CommandKind, ProgdtBuilder, StampRequest};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mode = args.time_mode();
    let Args {
        config_file,
        no_color,
        tz,
        command,
        ..
    } = args;

    let zone = tz
        .as_deref()
        .map(parse_time_zone)
        .transpose()
        .context("Invalid --tz")?;

    let progdt = ProgdtBuilder::new()
        .with_settings_path(config_file)
        .with_time_zone(zone)
        .with_time_mode(mode)
        .build()
        .context("Failed to initialize progdt")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("progdt started");

    match command {
        Some(Date(stamp)) => {
            Cli::new(progdt, renderer).print_stamp(CommandKind::Date, &stamp.into())
        }
        Some(Time(stamp)) => {
            Cli::new(progdt, renderer).print_stamp(CommandKind::Time, &stamp.into())
        }
        Some(Datetime(stamp)) => {
            Cli::new(progdt, renderer).print_stamp(CommandKind::DateTime, &stamp.into())
        }
        Some(Insert(insert)) => Cli::new(progdt, renderer).insert(insert),
        Some(Config { command }) => Cli::new(progdt, renderer).handle_config_command(command),
        Some(List) => Cli::new(progdt, renderer).list_commands(),
        Some(Serve) => {
            info!("Starting progdt MCP server");
            run_stdio_server(ProgdtMcpServer::new(progdt))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(progdt, renderer)
            .print_stamp(CommandKind::DateTime, &StampRequest::default()),
    }
}
