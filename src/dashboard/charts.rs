//! Chart generation and rendering for the dashboard.
//!
//! The dashboard has a single stacked bar chart that breaks transaction
//! amounts down by day and category. The chart is generated as JSON
//! configuration for the ECharts library and rendered with an HTML container
//! and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, EmphasisFocus, JsFunction,
        Tooltip, Trigger,
    },
    series::bar,
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::prelude::ToPrimitive;

use crate::{
    dashboard::aggregation::compute_daily_breakdown, html::HeadElement, transaction::Transaction,
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            h3 class="text-xl font-semibold mb-4"
            {
                "Income, Expenses, and Savings Over Time"
            }

            div class="grid grid-cols-1 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Builds the stacked bar chart of daily totals per category.
///
/// Each date with at least one transaction gets a bar, in chronological
/// order, and every category contributes a segment to every bar so the stacks
/// line up even on days where a category recorded nothing.
pub(super) fn daily_breakdown_chart(transactions: &[Transaction]) -> Chart {
    let breakdown = compute_daily_breakdown(transactions);
    let labels: Vec<String> = breakdown.dates.iter().map(|date| date.to_string()).collect();

    let mut chart = Chart::new()
        .title(Title::new().text("Daily Income, Expenses, and Savings"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().top(30))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Total Amount")
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        );

    for (category, daily_totals) in breakdown.series {
        let data: Vec<f64> = daily_totals
            .iter()
            .map(|amount| amount.to_f64().unwrap_or_default())
            .collect();

        chart = chart.series(
            bar::Bar::new()
                .name(category.as_str())
                .stack("daily")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(data),
        );
    }

    chart
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "return (number || number === 0)
            ? \"RS-\" + number.toLocaleString('en-US', {
                minimumFractionDigits: 2,
                maximumFractionDigits: 2,
              })
            : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
