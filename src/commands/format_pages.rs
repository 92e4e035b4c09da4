use crate::page_range::format_page_ranges;
use anyhow::Result;

pub fn run(indices: &[u32]) -> Result<()> {
    println!("{}", format_page_ranges(indices.iter().copied()));

    Ok(())
}
