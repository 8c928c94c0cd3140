use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use commands::{history, wrapped};
use std::path::PathBuf;
use watch_stats_config::PathManager;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelwrap")]
#[command(about = "ReelWrap - your year of movies and TV, wrapped")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the wrapped report from the stored watch history
    #[command(long_about = "Read the watched movies, watched episodes and favorites from the history directory and print the wrapped statistics. With --year, only entries watched in that calendar year are counted.")]
    Wrapped {
        /// History directory (overrides storage.data_dir)
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Only count entries watched in this year
        #[arg(long, value_name = "YYYY")]
        year: Option<i32>,
    },
    /// Show how many entries each history collection holds
    History {
        /// History directory (overrides storage.data_dir)
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::default();
    let config = commands::load_config(&paths)?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))
        .wrap_err("Failed to initialize logging")?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Wrapped { data_dir, year } => {
            wrapped::run_wrapped(&config, &paths, data_dir, year, &output).await
        }
        Commands::History { data_dir } => {
            history::run_history(&config, &paths, data_dir, &output).await
        }
        Commands::Config { cmd } => commands::config::run_config(cmd, &config, &paths, &output),
    }
}
