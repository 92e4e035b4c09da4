pub mod document;

pub use document::PdfDocument;

use crate::page_range::{parse_page_ranges, PageSet};
use anyhow::Result;
use std::path::Path;

/// Parse a page range string against the page count of the PDF at `path`.
pub fn parse_page_ranges_for<P: AsRef<Path>>(path: P, pages: &str) -> Result<PageSet> {
    let doc = PdfDocument::open(&path)?;
    Ok(parse_page_ranges(pages, doc.page_count())?)
}
