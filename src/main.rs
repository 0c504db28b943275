use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use datarev::{
    config::{ReviewConfig, DEFAULT_EXPORT_FILENAME, DEFAULT_FETCH_TIMEOUT_SECS},
    session::ReviewSession,
    sink::{ExportSink, FileExportSink},
    source::{DataSource, HttpDataSource, StaticDataSource},
    view::CellView,
    Category,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "datarev",
    about = "Record review: fetch, classify, inspect, export",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Endpoint serving the `{ "records": [...] }` payload
    #[arg(long, env = "DATAREV_SOURCE_URL", global = true)]
    source_url: Option<String>,

    /// Use the built-in sample collection instead of fetching
    #[arg(long, global = true)]
    demo: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DATAREV_LOG", global = true)]
    log: Option<String>,

    /// Acquisition timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS, global = true)]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Print the review table with per-field severity categories
    Show {
        /// Also print the error detail summary for one record id
        #[arg(long)]
        detail: Option<i64>,
    },
    /// Export the collection as CSV through the file sink
    Export {
        /// Directory the file lands in
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Filename handed to the sink (default: data.csv)
        #[arg(long)]
        filename: Option<String>,
    },
}

fn init_tracing(args: &Args) {
    let level = args.log.clone().unwrap_or_else(|| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .compact()
        .init();
}

fn build_source(args: &Args) -> Result<Box<dyn DataSource>> {
    if args.demo {
        info!("using built-in sample collection");
        return Ok(Box::new(StaticDataSource::sample()));
    }
    let url = args
        .source_url
        .clone()
        .context("--source-url (or DATAREV_SOURCE_URL) is required unless --demo is set")?;
    let mut config = ReviewConfig::new(url);
    config.fetch_timeout = Duration::from_secs(args.timeout_secs);
    info!(url = %config.source_url, "using HTTP data source");
    Ok(Box::new(HttpDataSource::new(
        config.source_url.clone(),
        config.fetch_timeout,
    )))
}

/// Cell text for the table: the value, tagged with the category when the
/// field carries a recognized severity.
fn cell_text(cell: &CellView) -> String {
    match cell.category {
        Category::Ok => cell.value.clone(),
        category => format!("{} [{}]", cell.value, category),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let source = build_source(&args)?;
    let mut session = ReviewSession::new(source);

    eprintln!("loading records...");
    session.start().await?;

    match args.command {
        Command::Show { detail } => {
            println!(
                "{:>4}  {:<14} {:<26} {:<18} {:<14} {:<20} {:<20} {:<10}",
                "ID", "NAME", "EMAIL", "STREET", "CITY", "ZIPCODE", "PHONE", "STATUS"
            );
            for row in session.rows() {
                println!(
                    "{:>4}  {:<14} {:<26} {:<18} {:<14} {:<20} {:<20} {:<10}",
                    row.id,
                    row.name,
                    cell_text(&row.email),
                    cell_text(&row.street),
                    row.city,
                    cell_text(&row.zipcode),
                    cell_text(&row.phone),
                    row.status,
                );
            }

            if let Some(id) = detail {
                session.select_row(id)?;
                println!("\nError summary for ID: {id}");
                let summary = session.detail_summary().unwrap_or_default();
                if summary.is_empty() {
                    println!("  no validation errors");
                }
                for entry in summary {
                    println!("  {}: {}", entry.label, entry.text);
                }
                session.close_detail();
            }
        }
        Command::Export { out, filename } => {
            let filename = filename.unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_string());
            let csv = session.export_csv()?;
            let sink = FileExportSink::new(out);
            let path = sink.save(&csv, &filename)?;
            println!(
                "exported {} records to {}",
                session.records().len(),
                path.display()
            );
        }
    }

    Ok(())
}
