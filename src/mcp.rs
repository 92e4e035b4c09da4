use anyhow::{anyhow, Result};
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::files::validate_files;
use crate::page_range::{format_page_ranges, parse_page_ranges};
use crate::paths::{default_save_path, unique_save_path};
use crate::pdf::PdfDocument;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FilenameRequest {
    #[schemars(description = "File name to place in the Downloads folder")]
    pub filename: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateFilesRequest {
    #[schemars(description = "Candidate file paths")]
    pub files: Vec<String>,
    #[schemars(description = "Allowed extensions, with or without the dot (e.g. ['.pdf', 'png'])")]
    pub allowed_extensions: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParsePagesRequest {
    #[schemars(description = "Page ranges (e.g., '1-5, 8')")]
    pub pages: String,
    #[schemars(description = "PDF whose page count bounds the ranges")]
    #[serde(default)]
    pub path: Option<String>,
    #[schemars(description = "Page count bounding the ranges, used when no path is given")]
    #[serde(default)]
    pub page_count: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatPagesRequest {
    #[schemars(description = "Zero-based page indices")]
    pub pages: Vec<u32>,
}

#[derive(Debug, Clone)]
pub struct PdfwerksServer {
    tool_router: ToolRouter<Self>,
}

impl PdfwerksServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfwerksServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PdfwerksServer {
    #[tool(description = "Get the default save location for a file name: ~/Downloads/<filename>")]
    fn default_save_path(
        &self,
        Parameters(FilenameRequest { filename }): Parameters<FilenameRequest>,
    ) -> String {
        let result = SavePathResult {
            path: default_save_path(&filename).display().to_string(),
        };
        to_json(&result)
    }

    #[tool(description = "Get a path that does not exist yet, appending _1, _2, ... before the extension if needed")]
    fn unique_save_path(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        let result = SavePathResult {
            path: unique_save_path(&path).display().to_string(),
        };
        to_json(&result)
    }

    #[tool(description = "Filter a list of paths down to existing files with an allowed extension")]
    fn validate_files(&self, Parameters(req): Parameters<ValidateFilesRequest>) -> String {
        let valid = validate_files(&req.files, &req.allowed_extensions);
        let result = ValidateFilesResult {
            rejected: req.files.len() - valid.len(),
            valid_files: valid.iter().map(|p| p.display().to_string()).collect(),
        };
        to_json(&result)
    }

    #[tool(description = "Parse a page range string like '1-5, 8' into zero-based page indices, bounded by a PDF's page count")]
    fn parse_page_ranges(&self, Parameters(req): Parameters<ParsePagesRequest>) -> String {
        match parse_pages(&req) {
            Ok(result) => to_json(&result),
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Format zero-based page indices as a compact page range string like '1-3, 5'")]
    fn format_page_ranges(
        &self,
        Parameters(FormatPagesRequest { pages }): Parameters<FormatPagesRequest>,
    ) -> String {
        let result = FormatPagesResult {
            ranges: format_page_ranges(pages),
        };
        to_json(&result)
    }

    #[tool(description = "Get the number of pages in a PDF")]
    fn page_count(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        match PdfDocument::open(&path) {
            Ok(doc) => {
                let result = PageCountResult {
                    page_count: doc.page_count(),
                    path,
                };
                to_json(&result)
            }
            Err(e) => format!("Error: {}", e),
        }
    }
}

fn parse_pages(req: &ParsePagesRequest) -> Result<ParsePagesResult> {
    let page_count = match (&req.path, req.page_count) {
        (Some(path), _) => PdfDocument::open(path)?.page_count(),
        (None, Some(n)) => n,
        (None, None) => return Err(anyhow!("Either path or page_count is required")),
    };

    let pages = parse_page_ranges(&req.pages, page_count)?;
    tracing::info!("Parsed '{}' into {} page(s)", req.pages, pages.len());

    Ok(ParsePagesResult {
        normalized: format_page_ranges(pages.iter().copied()),
        pages: pages.into_iter().collect(),
        page_count,
    })
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Error: {}", e))
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SavePathResult {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ValidateFilesResult {
    pub valid_files: Vec<String>,
    pub rejected: usize,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ParsePagesResult {
    pub pages: Vec<u32>,
    pub normalized: String,
    pub page_count: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FormatPagesResult {
    pub ranges: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PageCountResult {
    pub path: String,
    pub page_count: u32,
}

#[tool_handler]
impl ServerHandler for PdfwerksServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Helpers for PDF tools. Use default_save_path and unique_save_path to pick output \
                 files, validate_files to filter inputs by extension, parse_page_ranges to turn \
                 '1-5, 8' into zero-based indices, and format_page_ranges for the reverse."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfwerksServer::new();
    tracing::info!("Starting MCP server on stdio");

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
