//! socialviz - summarize social media likes and prepare chart tables

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use socialviz_core::{Config, GroupField};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "socialviz", version, about)]
struct Cli {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Five-number summary of likes per group
    Summarize {
        /// Raw social media CSV
        #[arg(short, long, default_value = "socialMedia.csv")]
        input: PathBuf,

        /// Column to group by (defaults to the config value)
        #[arg(short, long, value_enum)]
        group_by: Option<GroupArg>,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Write the averages and time series tables
    Prepare {
        #[arg(short, long, default_value = "socialMedia.csv")]
        input: PathBuf,

        #[arg(short, long, default_value = ".")]
        outdir: PathBuf,
    },

    /// Box plot shapes in data space, as JSON
    Shapes {
        #[arg(short, long, default_value = "socialMedia.csv")]
        input: PathBuf,

        #[arg(short, long, value_enum)]
        group_by: Option<GroupArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GroupArg {
    AgeGroup,
    Platform,
    PostType,
}

impl From<GroupArg> for GroupField {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::AgeGroup => GroupField::AgeGroup,
            GroupArg::Platform => GroupField::Platform,
            GroupArg::PostType => GroupField::PostType,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    tracing::debug!(?config, "effective configuration");

    match cli.command {
        Command::Summarize {
            input,
            group_by,
            format,
        } => {
            if let Some(group) = group_by {
                config.group_field = group.into();
            }
            print!("{}", commands::summarize(&input, &config, format)?);
        }
        Command::Prepare { input, outdir } => {
            let outputs = socialviz_core::prepare(&input, &outdir, &config)?;
            println!(
                "wrote: {} ({} rows)",
                outputs.averages.display(),
                outputs.average_rows
            );
            println!(
                "wrote: {} ({} rows)",
                outputs.time_series.display(),
                outputs.time_rows
            );
        }
        Command::Shapes { input, group_by } => {
            if let Some(group) = group_by {
                config.group_field = group.into();
            }
            println!("{}", commands::shapes(&input, &config)?);
        }
    }

    Ok(())
}
