//! makehub CLI entry point
//!
//! Usage:
//!   makehub mcp                  Start MCP server over stdio
//!   makehub scenarios            List all available scenarios
//!   makehub run <scenario-id>    Run a scenario
//!   makehub logs <scenario-id>   Fetch execution logs

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use makehub::api::MakeClient;
use makehub::cli::{
    commands::{LogsArgs, OutputFormat, RunArgs, ScenariosArgs},
    run_mcp_server, Cli, Commands,
};
use makehub::config::{interpolate_config, load_config};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout belongs to the MCP transport and to
    // command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Mcp => {
            run_mcp_server(cli.config.as_deref()).await?;
        }
        Commands::Scenarios(args) => {
            list_scenarios(args, cli.config.as_deref(), cli.verbose).await?;
        }
        Commands::Run(args) => {
            run_scenario(args, cli.config.as_deref(), cli.verbose).await?;
        }
        Commands::Logs(args) => {
            show_logs(args, cli.config.as_deref(), cli.verbose).await?;
        }
    }

    Ok(())
}

/// Build an API client from the layered configuration
fn build_client(config_path: Option<&str>, verbose: bool) -> Result<MakeClient> {
    let mut config = load_config(config_path)?;
    interpolate_config(&mut config);
    let client = MakeClient::new(&config.api);

    if verbose {
        eprintln!("{}: {}", "base url".cyan(), client.base_url());
    }

    Ok(client)
}

/// Spinner shown while a remote call is in flight
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// List all available scenarios
async fn list_scenarios(args: ScenariosArgs, config_path: Option<&str>, verbose: bool) -> Result<()> {
    let client = build_client(config_path, verbose)?;

    let pb = spinner("Fetching scenarios...");
    let result = client.list_scenarios().await;
    pb.finish_and_clear();
    let scenarios = result?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "scenarios": scenarios
            }))?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if scenarios.is_empty() {
                println!("No scenarios found.");
                return Ok(());
            }
            println!(
                "{:<12} {:<40} {:<14} {}",
                "ID".cyan(),
                "NAME".cyan(),
                "STATUS".cyan(),
                "FOLDER".cyan()
            );
            for s in &scenarios {
                println!(
                    "{:<12} {:<40} {:<14} {}",
                    s.id,
                    s.name,
                    s.status,
                    s.folder.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}

/// Run a scenario and print the execution ID
async fn run_scenario(args: RunArgs, config_path: Option<&str>, verbose: bool) -> Result<()> {
    let client = build_client(config_path, verbose)?;

    let pb = spinner("Starting scenario...");
    let result = client.run_scenario(&args.scenario_id, args.data).await;
    pb.finish_and_clear();
    let outcome = result?;

    println!(
        "{}: execution {} started",
        "success".green(),
        outcome.execution_id
    );

    Ok(())
}

/// Fetch and print execution logs for a scenario
async fn show_logs(args: LogsArgs, config_path: Option<&str>, verbose: bool) -> Result<()> {
    let client = build_client(config_path, verbose)?;

    let pb = spinner("Fetching execution logs...");
    let result = client.get_scenario_logs(&args.scenario_id, args.limit).await;
    pb.finish_and_clear();
    let logs = result?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({ "logs": logs }))?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if logs.is_empty() {
                println!("No executions found.");
                return Ok(());
            }
            println!(
                "{:<14} {:<10} {:<22} {:<22} {:>6} {:>7}",
                "ID".cyan(),
                "STATUS".cyan(),
                "STARTED".cyan(),
                "FINISHED".cyan(),
                "OPS".cyan(),
                "ERRORS".cyan()
            );
            for log in &logs {
                println!(
                    "{:<14} {:<10} {:<22} {:<22} {:>6} {:>7}",
                    log.id,
                    log.status,
                    log.started_at.as_deref().unwrap_or("-"),
                    log.finished_at.as_deref().unwrap_or("-"),
                    log.operations,
                    log.errors.len()
                );
            }
        }
    }

    Ok(())
}
