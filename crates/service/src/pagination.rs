//! Fixed-size pagination over an already-loaded, id-ordered collection.
//!
//! The listing endpoints load the full result set and return a contiguous
//! slice of it; out-of-range pages yield a short or empty slice, never a
//! panic.

/// Page size shared by every question listing surface.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parse a raw `page` query value. Absent or non-numeric input falls back
/// to page 1; any parsed integer (including zero and negatives) is kept
/// as-is and resolved by `page_slice`.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok()).unwrap_or(1)
}

/// The `[(page-1)*10, page*10)` slice of `items`, with saturating bounds.
/// Pages below 1 and pages past the end both come back empty.
pub fn page_slice<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    let end = start.saturating_add(QUESTIONS_PER_PAGE);
    let start = start.min(items.len());
    let end = end.min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_holds_ten() {
        let items = seq(23);
        let page = page_slice(&items, 1);
        assert_eq!(page, &items[0..10]);
    }

    #[test]
    fn last_page_is_the_remainder() {
        let items = seq(23);
        assert_eq!(page_slice(&items, 3), &[20, 21, 22]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = seq(23);
        assert!(page_slice(&items, 4).is_empty());
        assert!(page_slice(&items, 1000).is_empty());
    }

    #[test]
    fn zero_and_negative_pages_are_empty() {
        let items = seq(23);
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&items, -2).is_empty());
    }

    #[test]
    fn empty_collection_never_panics() {
        let items: Vec<usize> = vec![];
        assert!(page_slice(&items, 1).is_empty());
        assert!(page_slice(&items, i64::MAX).is_empty());
    }

    #[test]
    fn parse_page_defaults_to_one() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("2")), 2);
        assert_eq!(parse_page(Some("-1")), -1);
    }
}
