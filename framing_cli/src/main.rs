//! # Framer CLI Application
//!
//! Command-line front end for the wall framing engine.
//!
//! ```text
//! framer calc-wood-needed -w 30 -l 10
//! framer houses create "Gerald's Cabin" -w 30 -l 10
//! framer houses list
//! framer houses show "Gerald's Cabin"
//! ```
//!
//! All dimensions are outer building dimensions in feet.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use framing_core::file_io::{load_or_default, save_store, FileLock};
use framing_core::units::LengthUnit;
use framing_core::{calculate_house_breakdown, FramingError, HouseRecord};

mod report;

/// Estimate studs and posts for framing the exterior walls of a house.
#[derive(Parser)]
#[command(name = "framer", version)]
#[command(about = "Lumber takeoff for stick framing a rectangular house", long_about = None)]
struct Cli {
    /// House store file
    #[arg(long, global = true, env = "FRAMER_STORE", default_value = "houses.json")]
    store: PathBuf,

    /// Log filter (e.g. "warn", "framing_core=debug")
    #[arg(long, global = true, env = "FRAMER_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the number of studs and posts required to stick frame a house.
    #[command(name = "calc-wood-needed")]
    CalcWoodNeeded {
        /// The outer width of the house in feet
        #[arg(short, long, allow_negative_numbers = true)]
        width: f64,

        /// The outer length of the house in feet
        #[arg(short, long, allow_negative_numbers = true)]
        length: f64,

        /// Length unit of width and length. Accepted but not applied:
        /// dimensions are always read as feet.
        #[arg(short, long)]
        units: Option<String>,

        /// Show the per-wall layout
        #[arg(long)]
        breakdown: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage named house records.
    Houses {
        #[command(subcommand)]
        action: HouseCommands,
    },
}

#[derive(Subcommand)]
enum HouseCommands {
    /// Create a new house record.
    Create {
        /// Unique house name
        name: String,

        /// Outer width in feet
        #[arg(short, long, allow_negative_numbers = true)]
        width: f64,

        /// Outer length in feet
        #[arg(short, long, allow_negative_numbers = true)]
        length: f64,
    },

    /// Create or overwrite a house record.
    Save {
        name: String,

        #[arg(short, long, allow_negative_numbers = true)]
        width: f64,

        #[arg(short, long, allow_negative_numbers = true)]
        length: f64,
    },

    /// List stored houses.
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show a house and the lumber it needs.
    Show {
        name: String,

        #[arg(long)]
        json: bool,
    },

    /// Per-wall studs, plates and posts for a stored house.
    Supplies { name: String },

    /// Delete a house record.
    Remove { name: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(framing_error) = e.downcast_ref::<FramingError>() {
                if let Ok(json) = serde_json::to_string_pretty(framing_error) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::CalcWoodNeeded {
            width,
            length,
            units,
            breakdown,
            json,
        } => {
            if let Some(units) = units {
                let unit: LengthUnit = units.parse()?;
                warn!(%unit, "--units is not applied; width and length are read as feet");
            }

            let result = calculate_house_breakdown(width, length)?;
            if json {
                let value = if breakdown {
                    serde_json::to_value(result)?
                } else {
                    serde_json::to_value(result.requirements)?
                };
                report::print_json(&value)?;
            } else {
                report::print_requirements(&result, breakdown);
            }
            Ok(())
        }
        Commands::Houses { action } => run_houses(&cli.store, action),
    }
}

fn run_houses(store_path: &Path, action: HouseCommands) -> Result<()> {
    debug!(store = %store_path.display(), "using house store");

    match action {
        HouseCommands::Create { name, width, length } => {
            let _lock = lock_store(store_path)?;
            let mut store = load_or_default(store_path)?;
            let record = store.create(name, width, length)?.clone();
            save_store(&store, store_path)?;
            println!("Created '{}' ({} ft x {} ft)", record.name, record.width_ft, record.length_ft);
        }
        HouseCommands::Save { name, width, length } => {
            let _lock = lock_store(store_path)?;
            let mut store = load_or_default(store_path)?;
            let record = HouseRecord::new(name, width, length)?;
            let label = record.name.clone();
            let replaced = store.save(record)?.is_some();
            save_store(&store, store_path)?;
            println!("{} '{}'", if replaced { "Updated" } else { "Created" }, label);
        }
        HouseCommands::List { json } => {
            let store = load_or_default(store_path)?;
            if json {
                report::print_json(&store.list())?;
            } else {
                report::print_house_list(&store.list());
            }
        }
        HouseCommands::Show { name, json } => {
            let store = load_or_default(store_path)?;
            let record = store.get(&name)?;
            let breakdown = record.breakdown()?;
            if json {
                report::print_json(&serde_json::json!({
                    "house": record,
                    "requirements": breakdown.requirements,
                }))?;
            } else {
                report::print_house(record, &breakdown);
            }
        }
        HouseCommands::Supplies { name } => {
            let store = load_or_default(store_path)?;
            let supplies = store.wall_supplies(&name)?;
            report::print_json(&supplies)?;
        }
        HouseCommands::Remove { name } => {
            let _lock = lock_store(store_path)?;
            let mut store = load_or_default(store_path)?;
            let removed = store.remove(&name)?;
            save_store(&store, store_path)?;
            println!("Removed '{}'", removed.name);
        }
    }

    Ok(())
}

fn lock_store(store_path: &Path) -> Result<FileLock> {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "framer".to_string());

    FileLock::acquire(store_path, user)
        .with_context(|| format!("could not lock house store {}", store_path.display()))
}
