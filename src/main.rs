mod cli;
mod commands;
mod files;
mod logging;
mod mcp;
mod page_range;
mod paths;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::parse_pages::PageBound;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::DefaultPath { filename } => {
            commands::default_path::run(&filename)?;
        }
        Commands::UniquePath { path } => {
            commands::unique_path::run(&path)?;
        }
        Commands::Validate { files, extensions } => {
            commands::validate::run(&files, &extensions)?;
        }
        Commands::ParsePages {
            pages,
            pdf,
            page_count,
        } => {
            let bound = match (&pdf, page_count) {
                (Some(path), _) => PageBound::Pdf(path),
                (None, Some(n)) => PageBound::Count(n),
                (None, None) => anyhow::bail!("Either --pdf or --page-count is required"),
            };
            commands::parse_pages::run(&pages, bound)?;
        }
        Commands::FormatPages { indices } => {
            commands::format_pages::run(&indices)?;
        }
        Commands::PageCount { path } => {
            commands::page_count::run(&path)?;
        }
    }

    Ok(())
}
