//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for rendering the dashboard UI
//! - The state type used by the handler

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::{Totals, compute_totals},
        charts::{DashboardChart, charts_script, charts_view, daily_breakdown_chart},
        tables::{totals_table, transactions_table},
    },
    endpoints,
    html::{HeadElement, base, link},
    navigation::NavBar,
    transaction::{Transaction, get_all_transactions},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData {
    totals: Totals,
    charts: [DashboardChart; 1],
    transactions: Vec<Transaction>,
}

/// Display a page with an overview of the recorded transactions.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    match build_dashboard_data(&connection)? {
        Some(data) => Ok(dashboard_view(nav_bar, &data).into_response()),
        None => Ok(dashboard_no_data_view(nav_bar).into_response()),
    }
}

/// Fetches and builds all data needed for the dashboard display.
///
/// # Returns
/// All dashboard data ready for rendering, or `None` if no transactions
/// exist.
///
/// # Errors
/// Returns an error if the database query fails.
fn build_dashboard_data(connection: &Connection) -> Result<Option<DashboardData>, Error> {
    let transactions = get_all_transactions(connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;

    if transactions.is_empty() {
        return Ok(None);
    }

    let totals = compute_totals(&transactions);
    let charts = build_dashboard_charts(&transactions);

    Ok(Some(DashboardData {
        totals,
        charts,
        transactions,
    }))
}

/// Creates the array of dashboard charts from transaction data.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(transactions: &[Transaction]) -> [DashboardChart; 1] {
    [DashboardChart {
        id: "daily-breakdown-chart",
        options: daily_breakdown_chart(transactions).to_string(),
    }]
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "adding one");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "No transactions recorded yet."
            }

            p
            {
                "The chart and totals will show up here once you record some
                transactions. Start by " (new_transaction_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with the chart, totals and history table.
fn dashboard_view(nav_bar: NavBar, data: &DashboardData) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            h1 class="text-2xl font-bold mb-4"
            {
                "Income, Expense, and Savings Tracker"
            }

            (charts_view(&data.charts))

            section
                id="totals"
                class="w-full mx-auto mb-4"
            {
                (totals_table(&data.totals))
            }

            section
                id="history"
                class="w-full mx-auto mb-8"
            {
                (transactions_table(&data.transactions))
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&data.charts),
    ];

    base("Dashboard", &scripts, &content)
}
