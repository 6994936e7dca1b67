//! The line chart of a single customer's transaction amounts.
//!
//! The chart is an ECharts line chart whose options are generated with
//! charming. The fragment carries its own initialization script so it can
//! be swapped in by htmx.

use axum::extract::{Path, State};
use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, JsFunction, Tooltip, Trigger},
    series::Line,
};
use maud::{Markup, PreEscaped, html};

use crate::{
    Error,
    customer::{
        core::CustomerId,
        details::SelectionState,
        selection::{CustomerSelection, select_customer},
    },
};

/// The ID of the element the chart fragment is swapped into.
pub(crate) const TRANSACTION_CHART_ID: &str = "transaction-chart";

/// The ID of the element ECharts draws into.
const CHART_CANVAS_ID: &str = "transaction-chart-canvas";

/// The `window` property holding the chart currently on the page.
const LIVE_CHART_GLOBAL: &str = "transactionChart";

/// The `window` property holding the one resize listener shared by every chart.
const RESIZE_LISTENER_GLOBAL: &str = "transactionChartResize";

/// The points of the chart: one per transaction, in asset order.
#[derive(Debug, PartialEq)]
pub struct TransactionSeries {
    /// The x-axis labels, the transaction dates.
    pub categories: Vec<String>,
    /// The y values, the transaction amounts.
    pub amounts: Vec<f64>,
}

impl TransactionSeries {
    pub fn from_selection(selection: &CustomerSelection) -> Self {
        let (categories, amounts) = selection
            .transactions
            .iter()
            .map(|transaction| (transaction.date.clone(), transaction.amount))
            .unzip();

        Self {
            categories,
            amounts,
        }
    }
}

/// Render the transaction chart for one customer.
///
/// Responds with 204 No Content if the customer does not exist so htmx
/// leaves the current chart in place.
pub async fn get_transaction_chart(
    State(state): State<SelectionState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Markup, Error> {
    let selection = select_customer(&state.customer_data, customer_id)?;
    let series = TransactionSeries::from_selection(&selection);
    let chart = transactions_chart(&selection.customer.name, series);

    Ok(transaction_chart_view(&chart))
}

pub(crate) fn transactions_chart(customer_name: &str, series: TransactionSeries) -> Chart {
    Chart::new()
        .title(Title::new().text("Transactions").subtext(customer_name))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter()),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.categories),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Amount").data(series.amounts))
}

fn transaction_chart_view(chart: &Chart) -> Markup {
    // Customer names end up in the options, so stop them from closing the script tag.
    let options = chart.to_string().replace("</", "<\\/");
    // Each Graph click swaps in a new canvas, so the previous chart is disposed
    // here and a single page-wide resize listener always targets the live chart.
    let script = format!(
        r#"(function() {{
            if (window.{LIVE_CHART_GLOBAL}) {{
                window.{LIVE_CHART_GLOBAL}.dispose();
            }}
            const chartDom = document.getElementById("{CHART_CANVAS_ID}");
            const chart = echarts.init(chartDom);
            chart.setOption({options});
            window.{LIVE_CHART_GLOBAL} = chart;

            if (!window.{RESIZE_LISTENER_GLOBAL}) {{
                window.{RESIZE_LISTENER_GLOBAL} = function() {{
                    const liveChart = window.{LIVE_CHART_GLOBAL};
                    if (liveChart && !liveChart.isDisposed()) {{
                        liveChart.resize();
                    }}
                }};
                window.addEventListener('resize', window.{RESIZE_LISTENER_GLOBAL});
            }}
        }})();"#
    );

    html! {
        div
            id=(CHART_CANVAS_ID)
            class="w-full min-h-[350px] rounded dark:bg-gray-100"
        {}

        script { (PreEscaped(script)) }
    }
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return currencyFormatter.format(number);",
    )
}
