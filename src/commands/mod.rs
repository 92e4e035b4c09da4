pub mod default_path;
pub mod format_pages;
pub mod page_count;
pub mod parse_pages;
pub mod unique_path;
pub mod validate;
