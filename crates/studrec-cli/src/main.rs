//! Studrec CLI
//!
//! Composition root for the student records application: constructs the
//! Store/Gateway pair explicitly and wires user input through validation,
//! persistence, and dispatch.

use clap::{Parser, Subcommand};
use studrec_core::logging_facility::{self, Profile};

mod commands;
mod render;

#[derive(Debug, Parser)]
#[command(name = "studrec")]
#[command(about = "Studrec - Student records over an embedded SQLite file", long_about = None)]
struct Cli {
    /// Path to the datastore file
    #[arg(long, global = true, default_value = studrec_store::DEFAULT_DB_PATH)]
    db: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a new student record
    Add(commands::add::AddArgs),
    /// Fetch a record and render its fields
    Show(commands::show::ShowArgs),
    /// Overwrite the fields of an existing record
    Edit(commands::edit::EditArgs),
    /// Delete a record
    Remove(commands::remove::RemoveArgs),
}

fn main() {
    logging_facility::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => commands::add::execute(args, &cli.db),
        Commands::Show(args) => commands::show::execute(args, &cli.db),
        Commands::Edit(args) => commands::edit::execute(args, &cli.db),
        Commands::Remove(args) => commands::remove::execute(args, &cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
