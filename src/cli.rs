use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfwerks")]
#[command(about = "Save-path, file validation and page-range helpers for PDF tools, with MCP server support")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Print the default save location (~/Downloads/<filename>)
    DefaultPath {
        /// File name to place in the downloads folder
        filename: String,
    },

    /// Print the first free variant of a path (name_1.pdf, name_2.pdf, ...)
    UniquePath {
        /// Desired output path
        path: PathBuf,
    },

    /// Keep only existing files with an allowed extension
    Validate {
        /// Candidate files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Allowed extension, with or without the dot (repeatable)
        #[arg(short, long = "ext", default_value = ".pdf")]
        extensions: Vec<String>,
    },

    /// Turn a page range string into zero-based page indices
    #[command(group(ArgGroup::new("bound").required(true).args(["pdf", "page_count"])))]
    ParsePages {
        /// Page ranges (e.g., "1-5, 8")
        pages: String,

        /// PDF whose page count bounds the ranges
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Page count to bound the ranges with
        #[arg(short = 'n', long)]
        page_count: Option<u32>,
    },

    /// Turn zero-based page indices into a page range string
    FormatPages {
        /// Zero-based page indices (space or comma separated)
        #[arg(value_delimiter = ',')]
        indices: Vec<u32>,
    },

    /// Print the number of pages in a PDF
    PageCount {
        /// PDF file to inspect
        path: PathBuf,
    },
}
