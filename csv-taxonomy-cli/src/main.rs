use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csv_taxonomy::{Importer, MemoryTermStore, TaxonomyKind};
use std::str::FromStr;
use std::{fs, path::PathBuf};
use tracing::{info, Level};

mod template;

/// CSV Taxonomy Importer
/// Imports categories and tags from CSV files into a term store
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output for detailed processing information
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import terms from a CSV file into the term store
    Import {
        /// Path to the CSV file to import
        #[arg(short, long, value_name = "PATH TO CSV")]
        file: PathBuf,

        /// Taxonomy to import into (category or tag)
        #[arg(short, long, default_value = "category")]
        taxonomy: String,

        /// Path to the JSON term store, created if missing
        #[arg(short, long, default_value = "terms.json", value_name = "STORE PATH")]
        store: PathBuf,

        /// Print the import summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a CSV file's header without importing anything
    Validate {
        /// Path to the CSV file to validate
        #[arg(short, long, value_name = "PATH TO CSV")]
        file: PathBuf,
    },
    /// Write an example CSV file to get started
    Sample {
        /// Output path for the example CSV
        #[arg(
            short,
            long,
            default_value = "taxonomy-sample.csv",
            value_name = "OUTPUT PATH"
        )]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with appropriate level
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match &cli.command {
        Commands::Import {
            file,
            taxonomy,
            store,
            json,
        } => import_command(file, taxonomy, store, *json),
        Commands::Validate { file } => validate_command(file),
        Commands::Sample { output } => sample_command(output),
    }
}

fn import_command(file: &PathBuf, taxonomy: &str, store_path: &PathBuf, json: bool) -> Result<()> {
    let kind = TaxonomyKind::from_str(taxonomy)?;

    if !file.exists() {
        anyhow::bail!("CSV file not found: {}", file.display());
    }

    let mut store = if store_path.exists() {
        info!("Loading term store from {}", store_path.display());
        MemoryTermStore::from_file(store_path)
            .context("Failed to load term store. See errors for additional details:")?
    } else {
        info!(
            "Term store {} not found, starting empty",
            store_path.display()
        );
        MemoryTermStore::new()
    };

    info!("Importing {} terms from {}", kind, file.display());
    let summary = Importer::new(&mut store)
        .import_path(file, kind)
        .context("Import failed")?;

    store
        .save_to_file(store_path)
        .with_context(|| format!("Failed to save term store to: {}", store_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!("Import completed successfully");
        println!("{}", summary);
    }
    Ok(())
}

fn validate_command(file: &PathBuf) -> Result<()> {
    info!("Validating CSV header...");

    if !file.exists() {
        anyhow::bail!(
            "CSV file not found: {}. Try using --file <PATH TO CSV>",
            file.display()
        );
    }

    let columns = csv_taxonomy::validate_path(file)
        .context("Failed to validate CSV. See errors for additional details:")?;

    info!("CSV header validation successful");
    let optional = columns.optional_columns();
    if optional.is_empty() {
        println!("Header OK: name column found, no optional columns");
    } else {
        println!(
            "Header OK: name column found, optional columns: {}",
            optional.join(", ")
        );
    }
    Ok(())
}

fn sample_command(output: &PathBuf) -> Result<()> {
    info!("Generating sample CSV...");

    // if output is a directory, append the default file name
    let full_file_output_path = if output.is_dir() {
        output.join("taxonomy-sample.csv")
    } else {
        output.clone()
    };

    fs::write(&full_file_output_path, template::SAMPLE_CSV)
        .context(format!("Failed to write sample CSV to: {}", output.display()))?;

    info!(
        "Successfully generated sample CSV at: {}",
        full_file_output_path.display()
    );
    Ok(())
}
