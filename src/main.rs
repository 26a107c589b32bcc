use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use std::path::Path;
use std::process::ExitCode;
use task_mapper::{cli, config, error, matcher, prompt, service, validator};
use cli::{Cli, Commands};
use config::Config;
use error::TaskMapperError;
use matcher::{MapSummary, MatchEngine};
use service::{MapOutcome, MapRequest};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✖ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Map {
            scan_result,
            task_table,
            task_column,
            process_column,
            developer_column,
            inactive_column,
            path_column,
            output_dir,
            threshold,
        } => {
            for path in [&scan_result, &task_table] {
                if let Err(reason) = validator::validate_file_path(&path.to_string_lossy()) {
                    bail!("{}: {}", reason, path.display());
                }
            }

            let threshold = threshold.unwrap_or(config.threshold);
            config::validate_threshold(threshold)?;

            let defaults = &config.columns;
            let columns = task_mapper_common::ColumnMapping {
                task: task_column.unwrap_or_else(|| defaults.task.clone()),
                process: process_column.unwrap_or_else(|| defaults.process.clone()),
                developer: developer_column.unwrap_or_else(|| defaults.developer.clone()),
                inactive: inactive_column.unwrap_or_else(|| defaults.inactive.clone()),
            };
            for (role, name) in columns.roles() {
                if let Err(reason) = validator::not_empty(name) {
                    bail!("{} column: {}", role, reason);
                }
            }

            let request = MapRequest {
                scan_result,
                task_table,
                columns,
                path_column: path_column.unwrap_or_else(|| config.path_column.clone()),
            };
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());

            run_mapping(&request, &output_dir, &MatchEngine::with_threshold(threshold))
        }

        Commands::Interactive { output_dir } => {
            println!("📋 task-mapper - interactive\n");

            let mode = match prompt::select_operation_mode() {
                Ok(mode) => mode,
                Err(TaskMapperError::PromptCancelled) => {
                    println!("Cancelled");
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            };

            match mode {
                prompt::OperationMode::MapResultToTaskName => {
                    let request = prompt::collect_map_request(&config)?;
                    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
                    println!();
                    run_mapping(&request, &output_dir, &MatchEngine::with_threshold(config.threshold))
                }
            }
        }

        Commands::Config { set_output_dir, set_threshold, show } => {
            let mut config = config;

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ Output folder updated");
            }

            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                println!("✔ Threshold updated");
            }

            if show {
                println!("Settings:");
                println!("  Config file: {}", Config::config_path()?.display());
                println!("  Output folder: {}", config.output_dir.display());
                println!("  Threshold: {}", config.threshold);
                println!("  Path column: {}", config.path_column);
                println!(
                    "  Task table columns: {} / {} / {} / {}",
                    config.columns.task,
                    config.columns.process,
                    config.columns.developer,
                    config.columns.inactive
                );
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_mapping(request: &MapRequest, output_dir: &Path, engine: &MatchEngine) -> anyhow::Result<ExitCode> {
    println!("[1/2] Loading and mapping...");
    let outcome = service::map_folder_to_task(request, output_dir, engine)?;

    match outcome {
        MapOutcome::Written { path, summary } => {
            print_summary(&summary);
            println!("[2/2] Saved");
            println!("✔ The mapped table is saved: {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        MapOutcome::WriteFailed { reason, summary } => {
            print_summary(&summary);
            println!("✖ Something went wrong while saving the mapped table: {}", reason);
            Ok(ExitCode::SUCCESS)
        }
        MapOutcome::LoadFailed { table, reason } => {
            println!("✖ Could not use the {}: {}", table, reason);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_summary(summary: &MapSummary) {
    println!("✔ {} folders, {} matched\n", summary.total, summary.matched());
    println!("  Task name (exact):    {}", summary.task_exact);
    println!("  Process name (exact): {}", summary.process_exact);
    println!("  Task name (fuzzy):    {}", summary.task_fuzzy);
    println!("  Process name (fuzzy): {}", summary.process_fuzzy);
    println!("  Unmatched:            {}\n", summary.unmatched);
}
