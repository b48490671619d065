//! Fixed-size paging over an ordered list

use crate::error::{TriviaError, TriviaResult};

/// Questions shown on each page of the listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// One page of items plus the size of the whole list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Parse a raw 1-indexed page number; absent means page 1
pub fn parse_page(raw: Option<&str>) -> TriviaResult<u32> {
    let Some(raw) = raw else {
        return Ok(1);
    };

    match raw.trim().parse::<u32>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(TriviaError::invalid(format!(
            "page must be a positive integer, got '{}'",
            raw
        ))),
    }
}

/// Slice page `page` (1-indexed) of `page_size` items out of `items`
///
/// Fails with `OutOfRange` when the page starts at or past the end, which
/// includes page 1 of an empty list.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: usize) -> TriviaResult<Page<T>> {
    if page == 0 {
        return Err(TriviaError::invalid("page must be a positive integer, got '0'"));
    }
    if page_size == 0 {
        return Err(TriviaError::invalid("page size must be positive"));
    }

    let total = items.len();
    let start = (page as usize - 1).saturating_mul(page_size);
    if start >= total {
        return Err(TriviaError::OutOfRange { page, total });
    }

    let end = start.saturating_add(page_size).min(total);
    Ok(Page {
        items: items[start..end].to_vec(),
        total,
    })
}
