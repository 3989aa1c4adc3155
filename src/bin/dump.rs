//! mmdbcsv: CLI tool for dumping MaxMind MMDB databases to CSV on stdout.

use clap::Parser;
use mmdbcsv::{export_csv, open_database, resolve_schema, Error, ExportOptions, Schema};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mmdbcsv")]
#[command(version = "0.1.0")]
#[command(about = "Dump MaxMind GeoIP2/GeoLite2 databases to CSV", long_about = None)]
struct Cli {
    /// Strip quote characters and trim whitespace from every field, for
    /// columnar-database CSV imports
    #[arg(short = 'c', long)]
    clean: bool,

    /// Schema override: city, country, connection-type or isp
    /// (default: detect from the database metadata, then the file name)
    #[arg(short, long)]
    schema: Option<String>,

    /// Path to the .mmdb (or .mmdb.gz) database file
    database: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> mmdbcsv::Result<()> {
    let explicit = match cli.schema.as_deref() {
        Some(name) => Some(
            Schema::parse(name).ok_or_else(|| Error::UnknownSchemaName(name.to_string()))?,
        ),
        None => None,
    };

    let reader = open_database(&cli.database)?;
    let schema = resolve_schema(explicit, &reader.metadata.database_type, &cli.database)?;

    let stdout = io::stdout();
    export_csv(
        &reader,
        schema,
        ExportOptions { clean: cli.clean },
        stdout.lock(),
    )?;
    Ok(())
}
