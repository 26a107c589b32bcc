use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "task-mapper")]
#[command(about = "Map scanned RPA folders to the task list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map a scan result file to the task list
    Map {
        /// Scan result CSV
        #[arg(short, long, required = true)]
        scan_result: PathBuf,

        /// Task list CSV
        #[arg(short, long, required = true)]
        task_table: PathBuf,

        /// Task column name (default from config: Task)
        #[arg(long)]
        task_column: Option<String>,

        /// Process column name (default from config: ProcessName)
        #[arg(long)]
        process_column: Option<String>,

        /// Developer column name (default from config: Developers)
        #[arg(long)]
        developer_column: Option<String>,

        /// Inactive column name (default from config: Inactive)
        #[arg(long)]
        inactive_column: Option<String>,

        /// Scan result column holding the file path (default from config: MatchedFile)
        #[arg(long)]
        path_column: Option<String>,

        /// Output folder (default from config: data)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Fuzzy match threshold, 0-100 (default from config: 75)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Ask for the files and column names interactively
    Interactive {
        /// Output folder (default from config: data)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show or edit settings
    Config {
        /// Set the output folder
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Set the fuzzy match threshold
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}
