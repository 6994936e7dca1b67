//! This modules defines the common functionality for paging data.

use std::ops::Range;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The rows to display per page when not specified in a request.
    pub default_page_size: u64,
    /// The page sizes a user may pick from.
    pub page_size_options: Vec<u64>,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![5, 10, 20],
            max_pages: 5,
        }
    }
}

impl PaginationConfig {
    /// The default config with `page_size` as the default page size.
    ///
    /// `page_size` is added to the page size options if it is not already one of them.
    pub fn with_default_page_size(page_size: u64) -> Self {
        let mut config = Self {
            default_page_size: page_size.max(1),
            ..Default::default()
        };

        if !config.page_size_options.contains(&config.default_page_size) {
            config.page_size_options.push(config.default_page_size);
            config.page_size_options.sort_unstable();
        }

        config
    }

    /// Use `page_size` if it is one of the allowed options, otherwise the default page size.
    pub fn resolve_page_size(&self, page_size: Option<u64>) -> u64 {
        match page_size {
            Some(size) if self.page_size_options.contains(&size) => size,
            _ => self.default_page_size.max(1),
        }
    }
}

/// The slice of rows that make up one page.
#[derive(Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// The 1-based page number after clamping to the valid range.
    pub page: u64,
    /// The number of pages needed to show every row.
    pub page_count: u64,
    /// The indices of the rows on this page.
    pub rows: Range<usize>,
}

/// Work out which rows fall on `page` (1-based).
///
/// Pages before the first or after the last page are clamped, so the window
/// always refers to a page that exists. With zero rows there is still one
/// empty page.
pub fn page_window(row_count: usize, page: u64, page_size: u64) -> PageWindow {
    let page_size = page_size.max(1);
    let page_count = (row_count as u64).div_ceil(page_size).max(1);
    let page = page.clamp(1, page_count);

    let start = ((page - 1) * page_size) as usize;
    let end = (start + page_size as usize).min(row_count);

    PageWindow {
        page,
        page_count,
        rows: start.min(end)..end,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    Page(u64),
    CurrPage(u64),
    Ellipsis,
    NextButton(u64),
    BackButton(u64),
}

pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    // A single page needs no navigation.
    if page_count <= 1 {
        return Vec::new();
    }

    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let mut indicators: Vec<PaginationIndicator> = if page_count <= max_pages {
        (1..=page_count).map(map_page).collect()
    } else if curr_page <= (max_pages / 2) {
        (1..=max_pages).map(map_page).collect()
    } else if curr_page > (page_count - max_pages / 2) {
        ((page_count - max_pages + 1)..=page_count)
            .map(map_page)
            .collect()
    } else {
        ((curr_page - max_pages / 2)..=(curr_page + max_pages / 2))
            .map(map_page)
            .collect()
    };

    if page_count > max_pages {
        if curr_page > (max_pages / 2) + 1 {
            indicators.insert(0, PaginationIndicator::Page(1));
            indicators.insert(1, PaginationIndicator::Ellipsis);
        }

        if curr_page < (page_count - max_pages / 2) {
            indicators.push(PaginationIndicator::Ellipsis);
            indicators.push(PaginationIndicator::Page(page_count));
        }
    }

    if curr_page > 1 {
        indicators.insert(0, PaginationIndicator::BackButton(curr_page - 1));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}


#[cfg(test)]
mod indicator_tests {
    use crate::pagination::{PaginationIndicator, create_pagination_indicators};

    #[test]
    fn single_page_has_no_indicators() {
        let got = create_pagination_indicators(1, 1, 5);

        assert!(got.is_empty(), "want no indicators, got {got:?}");
    }

    #[test]
    fn shows_all_pages() {
        let want = [
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::NextButton(2),
        ];

        let got = create_pagination_indicators(1, 3, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_on_left() {
        let want = [
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(2),
        ];

        let got = create_pagination_indicators(1, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_on_right() {
        let want = [
            PaginationIndicator::BackButton(9),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::Page(8),
            PaginationIndicator::Page(9),
            PaginationIndicator::CurrPage(10),
        ];

        let got = create_pagination_indicators(10, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_in_center() {
        let want = [
            PaginationIndicator::BackButton(4),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::CurrPage(5),
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(6),
        ];

        let got = create_pagination_indicators(5, 10, 5);

        assert_eq!(want, got.as_slice());
    }
}
