use regex::Regex;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::sync::LazyLock;
use thiserror::Error;

/// Zero-based page indices, deduplicated.
pub type PageSet = BTreeSet<u32>;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:\s*-\s*([0-9]+))?$").expect("page token regex"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageRangeError {
    #[error("Page numbers must be >= 1 (got {0})")]
    NonPositivePage(u64),

    #[error("Page number out of bounds: {page} (document has {total} pages)")]
    OutOfBounds { page: u64, total: u32 },

    #[error("Invalid range: {start}-{end} (start is after end)")]
    InvertedRange { start: u64, end: u64 },

    #[error("Invalid page specifier: '{0}'")]
    InvalidSpecifier(String),
}

/// One comma-separated token of a page range string, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u64,
    pub end: Option<u64>,
}

impl PageRange {
    /// Parse a single token like "5" or "1-5". Whitespace around the
    /// numbers and the dash is ignored.
    pub fn parse(s: &str) -> Result<Self, PageRangeError> {
        let s = s.trim();
        let caps = TOKEN
            .captures(s)
            .ok_or_else(|| PageRangeError::InvalidSpecifier(s.to_string()))?;

        // Digits that overflow u64 are certainly past the last page.
        let number = |digits: &str| digits.parse::<u64>().unwrap_or(u64::MAX);

        Ok(PageRange {
            start: number(&caps[1]),
            end: caps.get(2).map(|m| number(m.as_str())),
        })
    }

    /// Expand this range into zero-based page indices.
    pub fn expand(&self, total_pages: u32) -> Result<RangeInclusive<u32>, PageRangeError> {
        let start = self.start;
        let end = self.end.unwrap_or(start);

        if start == 0 {
            return Err(PageRangeError::NonPositivePage(start));
        }
        if end == 0 {
            return Err(PageRangeError::NonPositivePage(end));
        }

        let total = u64::from(total_pages);
        if start > total {
            return Err(PageRangeError::OutOfBounds {
                page: start,
                total: total_pages,
            });
        }
        if end > total {
            return Err(PageRangeError::OutOfBounds {
                page: end,
                total: total_pages,
            });
        }

        if start > end {
            return Err(PageRangeError::InvertedRange { start, end });
        }

        // Both bounds are within 1..=total_pages, so they fit in u32.
        Ok((start - 1) as u32..=(end - 1) as u32)
    }
}

/// Parse a comma-separated list of page ranges like "1-5, 8" into
/// zero-based page indices. Empty tokens are skipped.
pub fn parse_page_ranges(s: &str, total_pages: u32) -> Result<PageSet, PageRangeError> {
    let mut pages = PageSet::new();
    for part in s.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let range = PageRange::parse(part)?;
        pages.extend(range.expand(total_pages)?);
    }
    Ok(pages)
}

/// Format zero-based page indices as a 1-based range string, collapsing
/// consecutive pages: {0, 1, 3, 4, 6} becomes "1-2, 4-5, 7".
pub fn format_page_ranges<I>(pages: I) -> String
where
    I: IntoIterator<Item = u32>,
{
    let sorted: PageSet = pages.into_iter().collect();

    let mut runs: Vec<(u64, u64)> = Vec::new();
    for page in sorted {
        let page = u64::from(page) + 1;
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == page => *end = page,
            _ => runs.push((page, page)),
        }
    }

    runs.iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pages: &[u32]) -> PageSet {
        pages.iter().copied().collect()
    }

    #[test]
    fn test_single_page() {
        let range = PageRange::parse("5").unwrap();
        assert_eq!(range.start, 5);
        assert_eq!(range.end, None);
        assert_eq!(range.expand(10).unwrap(), 4..=4);
    }

    #[test]
    fn test_page_range() {
        let range = PageRange::parse("1-5").unwrap();
        assert_eq!(range.end, Some(5));
        assert_eq!(parse_page_ranges("1-5", 10).unwrap(), set(&[0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            parse_page_ranges("1,3,5-7", 10).unwrap(),
            set(&[0, 2, 4, 5, 6])
        );
    }

    #[test]
    fn test_whitespace_and_empty_tokens() {
        assert_eq!(
            parse_page_ranges("1, ,, 3, 5 -  7", 10).unwrap(),
            set(&[0, 2, 4, 5, 6])
        );
        assert_eq!(parse_page_ranges("  ", 10).unwrap(), PageSet::new());
        assert_eq!(parse_page_ranges("", 10).unwrap(), PageSet::new());
    }

    #[test]
    fn test_overlapping_ranges_deduplicate() {
        assert_eq!(
            parse_page_ranges("1-3, 2-4, 3", 10).unwrap(),
            set(&[0, 1, 2, 3])
        );
    }

    #[test]
    fn test_full_document() {
        assert_eq!(parse_page_ranges("1-10", 10).unwrap().len(), 10);
    }

    #[test]
    fn test_invalid_page_zero() {
        let err = parse_page_ranges("0", 10).unwrap_err();
        assert_eq!(err, PageRangeError::NonPositivePage(0));
        assert!(err.to_string().contains("Page numbers must be >= 1"));

        assert!(matches!(
            parse_page_ranges("0-3", 10),
            Err(PageRangeError::NonPositivePage(0))
        ));
    }

    #[test]
    fn test_page_exceeds_total() {
        let err = parse_page_ranges("11", 10).unwrap_err();
        assert_eq!(err, PageRangeError::OutOfBounds { page: 11, total: 10 });
        assert!(err.to_string().contains("Page number out of bounds"));

        assert!(matches!(
            parse_page_ranges("8-12", 10),
            Err(PageRangeError::OutOfBounds { page: 12, .. })
        ));
        assert!(matches!(
            parse_page_ranges("99999999999999999999999", 10),
            Err(PageRangeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            parse_page_ranges("1", 0),
            Err(PageRangeError::OutOfBounds { page: 1, total: 0 })
        ));
    }

    #[test]
    fn test_inverted_range() {
        let err = parse_page_ranges("5-3", 10).unwrap_err();
        assert_eq!(err, PageRangeError::InvertedRange { start: 5, end: 3 });
        assert!(err.to_string().contains("Invalid range"));
    }

    #[test]
    fn test_error_precedence() {
        assert_eq!(
            parse_page_ranges("15-5", 10),
            Err(PageRangeError::OutOfBounds { page: 15, total: 10 })
        );
        assert_eq!(
            parse_page_ranges("3-0", 10),
            Err(PageRangeError::NonPositivePage(0))
        );
        assert_eq!(
            parse_page_ranges("0-15", 10),
            Err(PageRangeError::NonPositivePage(0))
        );
        assert!(matches!(
            parse_page_ranges("5-3, abc", 10),
            Err(PageRangeError::InvertedRange { start: 5, end: 3 })
        ));
    }

    #[test]
    fn test_token_regex_compiles() {
        assert!(TOKEN.is_match("12 - 14"));
        assert!(!TOKEN.is_match("12-"));
    }

    #[test]
    fn test_malformed_tokens() {
        for spec in ["abc", "1-", "-3", "1-2-3", "1 2", "2x", "1,abc"] {
            let err = parse_page_ranges(spec, 10).unwrap_err();
            assert!(
                matches!(err, PageRangeError::InvalidSpecifier(_)),
                "{spec}: {err:?}"
            );
            assert!(err.to_string().contains("Invalid page specifier"));
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(format_page_ranges(set(&[0])), "1");
        assert_eq!(format_page_ranges(set(&[0, 1, 2])), "1-3");
        assert_eq!(format_page_ranges(set(&[0, 2, 4])), "1, 3, 5");
        assert_eq!(format_page_ranges(set(&[0, 1, 3, 4, 6])), "1-2, 4-5, 7");
        assert_eq!(format_page_ranges(PageSet::new()), "");
    }

    #[test]
    fn test_format_unsorted_with_duplicates() {
        assert_eq!(format_page_ranges(vec![4, 1, 3, 0, 2, 2]), "1-5");
    }

    #[test]
    fn test_round_trip() {
        for spec in ["1-10", "2, 4, 6", "1-3, 7, 9-10", "5"] {
            let pages = parse_page_ranges(spec, 10).unwrap();
            let formatted = format_page_ranges(pages.iter().copied());
            assert_eq!(formatted, spec);
            assert_eq!(parse_page_ranges(&formatted, 10).unwrap(), pages);
        }
    }
}
