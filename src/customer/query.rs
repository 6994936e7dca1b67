//! Filtering, sorting and paging of the customer list.
//!
//! The list state lives entirely in the query string so every view of the
//! list has its own URL.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    customer::aggregation::CustomerTotal,
    html::format_currency,
    pagination::{PageWindow, PaginationConfig, page_window},
};

/// A column of the customer list that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Id,
    Name,
    TotalAmount,
}

impl SortColumn {
    pub(crate) const ALL: [SortColumn; 3] =
        [SortColumn::Id, SortColumn::Name, SortColumn::TotalAmount];

    pub(crate) fn label(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "Name",
            SortColumn::TotalAmount => "Total Amount",
        }
    }

    fn compare(self, a: &CustomerTotal, b: &CustomerTotal) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::TotalAmount => a.total_amount.total_cmp(&b.total_amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// The active sort of the customer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// The query parameters accepted by the customer list page, as sent by the client.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerListParams {
    pub filter: Option<String>,
    pub sort: Option<SortColumn>,
    pub direction: Option<SortDirection>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// The validated state of the customer list.
///
/// Build links with the `with_*` methods and [CustomerListQuery::to_url] so
/// the links always agree with how the page was rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerListQuery {
    /// The filter as the user typed it, shown in the filter input and kept in links.
    filter_input: String,
    /// The normalized filter used for matching.
    filter: String,
    sort: Option<Sort>,
    page: u64,
    per_page: u64,
}

/// The flat form of [CustomerListQuery] written to URLs.
#[derive(Serialize)]
struct QueryString<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<SortDirection>,
    page: u64,
    per_page: u64,
}

impl CustomerListQuery {
    /// Apply defaults to `params`.
    ///
    /// The filter is matched trimmed and lower-cased. A sort column without a
    /// direction sorts ascending and a direction without a column is
    /// ignored. Page sizes that are not one of the configured options fall
    /// back to the default.
    pub fn from_params(params: CustomerListParams, config: &PaginationConfig) -> Self {
        let sort = params.sort.map(|column| Sort {
            column,
            direction: params.direction.unwrap_or(SortDirection::Asc),
        });

        let filter_input = params.filter.unwrap_or_default();

        Self {
            filter: normalize_filter(&filter_input),
            filter_input,
            sort,
            page: params.page.unwrap_or(1).max(1),
            per_page: config.resolve_page_size(params.per_page),
        }
    }

    /// The normalized filter.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn filter_input(&self) -> &str {
        &self.filter_input
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Advance the sort for `column` to its next state: ascending, then
    /// descending, then unsorted. Clicking a different column starts that
    /// column at ascending.
    pub fn with_sort_toggled(&self, column: SortColumn) -> Self {
        let sort = match self.sort {
            Some(Sort {
                column: current,
                direction: SortDirection::Asc,
            }) if current == column => Some(Sort {
                column,
                direction: SortDirection::Desc,
            }),
            Some(Sort {
                column: current,
                direction: SortDirection::Desc,
            }) if current == column => None,
            _ => Some(Sort {
                column,
                direction: SortDirection::Asc,
            }),
        };

        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn to_query_string(&self) -> String {
        let query_string = QueryString {
            filter: (!self.filter.is_empty()).then_some(self.filter_input.as_str()),
            sort: self.sort.map(|sort| sort.column),
            direction: self.sort.map(|sort| sort.direction),
            page: self.page,
            per_page: self.per_page,
        };

        serde_urlencoded::to_string(query_string).unwrap_or_else(|error| {
            tracing::error!("could not encode customer list query {self:?}: {error}");
            String::new()
        })
    }

    pub fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }
}

/// Filters are matched case-insensitively and ignore surrounding whitespace.
pub fn normalize_filter(filter: &str) -> String {
    filter.trim().to_lowercase()
}

/// Whether any field of `row` contains `filter`.
///
/// `filter` must already be normalized with [normalize_filter]. The total
/// is matched against both its plain text form, e.g. "15" or "12.5", and the
/// currency form shown in the table, e.g. "$15.00". An empty filter matches
/// every row.
pub fn row_matches_filter(row: &CustomerTotal, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }

    row.id.to_string().contains(filter)
        || row.name.to_lowercase().contains(filter)
        || row.total_amount.to_string().contains(filter)
        || format_currency(row.total_amount).contains(filter)
}

/// The rows for one page of the customer list.
#[derive(Debug)]
pub struct CustomerListPage<'a> {
    /// The rows on the current page, filtered and sorted.
    pub rows: Vec<&'a CustomerTotal>,
    /// How many rows matched the filter across all pages.
    pub match_count: usize,
    /// The page that was actually shown, after clamping.
    pub window: PageWindow,
}

/// Filter, sort and then page `totals` according to `query`.
pub fn select_page<'a>(totals: &'a [CustomerTotal], query: &CustomerListQuery) -> CustomerListPage<'a> {
    let mut rows: Vec<&CustomerTotal> = totals
        .iter()
        .filter(|row| row_matches_filter(row, &query.filter))
        .collect();

    if let Some(sort) = query.sort {
        // `sort_by` is stable, so equal rows keep their original order.
        rows.sort_by(|a, b| match sort.direction {
            SortDirection::Asc => sort.column.compare(a, b),
            SortDirection::Desc => sort.column.compare(b, a),
        });
    }

    let match_count = rows.len();
    let window = page_window(match_count, query.page, query.per_page);
    let rows = rows[window.rows.clone()].to_vec();

    CustomerListPage {
        rows,
        match_count,
        window,
    }
}
