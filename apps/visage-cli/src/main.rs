//! visage - explore a table through statistics and Chernoff faces
//!
//! Loads a CSV or spreadsheet file and prints one of the views in the
//! terminal.

mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use visage_core::{attribute_keys, FaceLayout, Report, Selection, ViewConfig, VisageResult};
use visage_io::{read_table, Table};
use visage_stats::aggregate;

#[derive(Parser, Debug)]
#[command(name = "visage")]
#[command(about = "Descriptive statistics and Chernoff faces for tabular data")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to <config dir>/visage/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the loaded table with labelled headers
    Preview {
        file: PathBuf,

        /// Maximum rows to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Descriptive statistics per attribute
    Stats {
        file: PathBuf,

        /// Only this attribute (e.g. A1)
        #[arg(short, long)]
        attribute: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Face features and the levels driving them
    Faces { file: PathBuf },

    /// Chart domain and series overview
    Chart {
        file: PathBuf,

        /// Only this attribute (e.g. A1)
        #[arg(short, long)]
        attribute: Option<String>,
    },

    /// Full report as JSON
    Report { file: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ViewConfig::load_or_default(cli.config.as_deref())?;
    run(cli.command, &config)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(file: &Path) -> VisageResult<Table> {
    let table = read_table(file)?;
    if table.is_empty() {
        tracing::warn!(path = %file.display(), "File has no data rows");
    }
    Ok(table)
}

fn run(command: Command, config: &ViewConfig) -> VisageResult<()> {
    match command {
        Command::Preview { file, limit } => {
            let table = load(&file)?;
            println!("{}", render::preview_table(&table, limit, config));
            if table.row_count() > limit {
                println!("... {} more rows", table.row_count() - limit);
            }
        }

        Command::Stats {
            file,
            attribute,
            json,
        } => {
            let table = load(&file)?;
            let attributes = attribute_keys(&table.header);
            let shown = Selection::from_option(attribute.as_deref()).resolve(&attributes)?;
            let stats = aggregate(&table.rows, &shown);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", render::stats_table(&table, &attributes, &stats, config));
            }
        }

        Command::Faces { file } => {
            let table = load(&file)?;
            let attributes = attribute_keys(&table.header);
            let face_attributes = config.face.face_attributes(&attributes)?;
            let layout = FaceLayout::build(&table, &face_attributes)?;
            println!("{}", render::face_table(&layout, config));
        }

        Command::Chart { file, attribute } => {
            let table = load(&file)?;
            let attributes = attribute_keys(&table.header);
            let shown = Selection::from_option(attribute.as_deref()).resolve(&attributes)?;
            println!("{}", render::chart_overview(&table, &attributes, &shown, config));
        }

        Command::Report { file } => {
            let table = load(&file)?;
            let report = Report::build(&table, config)?;
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}
