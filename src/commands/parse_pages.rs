use crate::page_range::{format_page_ranges, parse_page_ranges};
use crate::pdf::parse_page_ranges_for;
use anyhow::Result;
use std::path::Path;

/// Where the page count bounding a range string comes from.
pub enum PageBound<'a> {
    Pdf(&'a Path),
    Count(u32),
}

pub fn run(pages: &str, bound: PageBound<'_>) -> Result<()> {
    let page_set = match bound {
        PageBound::Pdf(path) => parse_page_ranges_for(path, pages)?,
        PageBound::Count(total_pages) => parse_page_ranges(pages, total_pages)?,
    };

    if page_set.is_empty() {
        println!("No pages specified.");
        return Ok(());
    }

    let indices: Vec<String> = page_set.iter().map(|p| p.to_string()).collect();
    println!("Indices: {}", indices.join(", "));
    println!("Pages: {}", format_page_ranges(page_set.iter().copied()));
    println!("\n{} page(s) selected.", page_set.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::testing::write_pdf;

    #[test]
    fn test_run_with_pdf_bound() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "three.pdf", 3);
        assert!(run("1-3", PageBound::Pdf(&path)).is_ok());

        let err = run("4", PageBound::Pdf(&path)).unwrap_err();
        assert!(err.to_string().contains("Page number out of bounds"));
    }

    #[test]
    fn test_run_rejects_bad_spec() {
        let err = run("5-3", PageBound::Count(10)).unwrap_err();
        assert!(err.to_string().contains("Invalid range"));
        assert!(run("1-3", PageBound::Count(10)).is_ok());
    }
}
