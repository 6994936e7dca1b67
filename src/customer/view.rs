//! HTML rendering for the customer list page.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency, truncate_graphemes,
    },
    navigation::NavBar,
    pagination::{PaginationConfig, PaginationIndicator, create_pagination_indicators},
};

use super::{
    aggregation::CustomerTotal,
    chart::TRANSACTION_CHART_ID,
    details::TRANSACTION_DETAILS_ID,
    query::{CustomerListPage, CustomerListQuery, SortColumn, SortDirection},
};

/// The max number of graphemes of a customer name to display before
/// truncating and displaying ellipses.
const MAX_NAME_GRAPHEMES: usize = 40;

/// The ID of the element that holds the table, swapped by htmx on filter, sort and page changes.
pub(crate) const CUSTOMER_TABLE_ID: &str = "customer-table";
const FILTER_FORM_ID: &str = "customer-filter-form";

pub(crate) fn customer_list_view(
    page: &CustomerListPage,
    query: &CustomerListQuery,
    config: &PaginationConfig,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::CUSTOMER_LIST_VIEW).into_html();
    let table_target = format!("#{CUSTOMER_TABLE_ID}");

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full lg:max-w-5xl space-y-4"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Customers" }
                }

                form
                    id=(FILTER_FORM_ID)
                    action=(endpoints::CUSTOMER_LIST_VIEW)
                    method="get"
                    hx-get=(endpoints::CUSTOMER_LIST_VIEW)
                    hx-target=(table_target)
                    hx-swap="innerHTML"
                    hx-trigger="input changed delay:300ms from:#customer-filter, change from:#per-page, submit"
                    class="flex flex-wrap items-end gap-4"
                {
                    div class="flex-1 min-w-[12rem]"
                    {
                        label for="customer-filter" class=(FORM_LABEL_STYLE) { "Filter" }

                        input
                            id="customer-filter"
                            type="search"
                            name="filter"
                            placeholder="e.g. Alice"
                            autocomplete="off"
                            value=(query.filter_input())
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="per-page" class=(FORM_LABEL_STYLE) { "Rows per page" }

                        select id="per-page" name="per_page" class=(FORM_TEXT_INPUT_STYLE)
                        {
                            @for size in &config.page_size_options {
                                option value=(size) selected[*size == query.per_page()] { (size) }
                            }
                        }
                    }

                    noscript
                    {
                        button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Apply" }
                    }
                }

                div id=(CUSTOMER_TABLE_ID) class="w-full"
                {
                    (customer_table_view(page, query, config))
                }

                div id=(TRANSACTION_DETAILS_ID) class="w-full" {}

                div id=(TRANSACTION_CHART_ID) class="w-full" {}
            }
        }
    };

    let scripts = [HeadElement::ScriptLink(
        "/static/echarts.6.0.0.min.js".to_owned(),
    )];

    base("Customers", &scripts, &content)
}

/// The table, its row count and its pagination, as swapped into the page by htmx.
pub(crate) fn customer_table_view(
    page: &CustomerListPage,
    query: &CustomerListQuery,
    config: &PaginationConfig,
) -> Markup {
    let current_query = query.with_page(page.window.page);
    let indicators =
        create_pagination_indicators(page.window.page, page.window.page_count, config.max_pages);
    let empty_message = if query.filter().is_empty() {
        "There are no customers yet.".to_owned()
    } else {
        format!("No customers match \"{}\".", query.filter_input())
    };

    html! {
        // Keep the sort when the filter form is submitted.
        @if let Some(sort) = query.sort() {
            input
                type="hidden"
                form=(FILTER_FORM_ID)
                name="sort"
                value=(sort_column_value(sort.column));
            input
                type="hidden"
                form=(FILTER_FORM_ID)
                name="direction"
                value=(sort_direction_value(sort.direction));
        }

        table class="w-full my-2 text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    @for column in SortColumn::ALL {
                        (sortable_header(column, &current_query))
                    }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for row in &page.rows {
                    (customer_row_view(row))
                }

                @if page.rows.is_empty() {
                    tr
                    {
                        td colspan="4" data-empty-state="true" class="px-6 py-4 text-center"
                        {
                            (empty_message)
                        }
                    }
                }
            }
        }

        div class="flex flex-wrap items-center justify-between gap-2"
        {
            p class="text-sm text-gray-600 dark:text-gray-400" data-row-count="true"
            {
                (row_count_label(page))
            }

            @if !indicators.is_empty() {
                (pagination_view(&indicators, &current_query))
            }
        }
    }
}

fn customer_row_view(row: &CustomerTotal) -> Markup {
    let (name, tooltip) = truncate_graphemes(&row.name, MAX_NAME_GRAPHEMES);
    let details_url = format_endpoint(endpoints::CUSTOMER_TRANSACTIONS, row.id);
    let chart_url = format_endpoint(endpoints::CUSTOMER_CHART, row.id);
    let details_target = format!("#{TRANSACTION_DETAILS_ID}");
    let chart_target = format!("#{TRANSACTION_CHART_ID}");

    html! {
        tr class=(TABLE_ROW_STYLE) data-customer-row="true"
        {
            td class=(TABLE_CELL_STYLE) { (row.id) }
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (name) }
            td class={ (TABLE_CELL_STYLE) " text-right" } { (format_currency(row.total_amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-2"
                {
                    a
                        href=(details_url)
                        hx-get=(details_url)
                        hx-target=(details_target)
                        hx-swap="innerHTML"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Details"
                    }

                    a
                        href=(chart_url)
                        hx-get=(chart_url)
                        hx-target=(chart_target)
                        hx-swap="innerHTML"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Graph"
                    }
                }
            }
        }
    }
}

fn sortable_header(column: SortColumn, query: &CustomerListQuery) -> Markup {
    let href = query
        .with_sort_toggled(column)
        .to_url(endpoints::CUSTOMER_LIST_VIEW);
    let table_target = format!("#{CUSTOMER_TABLE_ID}");
    let direction = query
        .sort()
        .filter(|sort| sort.column == column)
        .map(|sort| sort.direction);
    let (aria_sort, arrow) = match direction {
        Some(SortDirection::Asc) => ("ascending", " ▲"),
        Some(SortDirection::Desc) => ("descending", " ▼"),
        None => ("none", ""),
    };
    let cell_class = if column == SortColumn::TotalAmount {
        "px-6 py-3 text-right"
    } else {
        "px-6 py-3"
    };

    html! {
        th scope="col" class=(cell_class) aria-sort=(aria_sort) data-sort-column=(sort_column_value(column))
        {
            a
                href=(href)
                hx-get=(href)
                hx-target=(table_target)
                hx-swap="innerHTML"
                class="hover:underline"
            {
                (column.label()) (arrow)
            }
        }
    }
}

fn pagination_view(indicators: &[PaginationIndicator], query: &CustomerListQuery) -> Markup {
    let table_target = format!("#{CUSTOMER_TABLE_ID}");
    let page_link = |page: u64, text: String| {
        let href = query.with_page(page).to_url(endpoints::CUSTOMER_LIST_VIEW);

        html! {
            a
                href=(href)
                hx-get=(href)
                hx-target=(table_target)
                hx-swap="innerHTML"
                class={ "block px-3 py-2 rounded-sm " (LINK_STYLE) }
            {
                (text)
            }
        }
    };

    html! {
        nav class="pagination" aria-label="Customer list pages"
        {
            ul class="pagination flex items-center gap-1"
            {
                @for indicator in indicators {
                    li
                    {
                        @match indicator {
                            PaginationIndicator::Page(page) => {
                                (page_link(*page, page.to_string()))
                            }
                            PaginationIndicator::CurrPage(page) => {
                                span
                                    aria-current="page"
                                    class="block px-3 py-2 rounded-sm font-bold text-black dark:text-white"
                                {
                                    (page)
                                }
                            }
                            PaginationIndicator::Ellipsis => {
                                span class="px-3 py-2" { "..." }
                            }
                            PaginationIndicator::BackButton(page) => {
                                (page_link(*page, "Back".to_owned()))
                            }
                            PaginationIndicator::NextButton(page) => {
                                (page_link(*page, "Next".to_owned()))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn row_count_label(page: &CustomerListPage) -> String {
    if page.match_count == 0 {
        return "0 customers".to_owned();
    }

    let first = page.window.rows.start + 1;
    let last = page.window.rows.end;

    format!("{first}–{last} of {}", page.match_count)
}

fn sort_column_value(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Id => "id",
        SortColumn::Name => "name",
        SortColumn::TotalAmount => "total_amount",
    }
}

fn sort_direction_value(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "asc",
        SortDirection::Desc => "desc",
    }
}
