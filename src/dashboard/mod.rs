//! The dashboard summarises the recorded transactions.
//!
//! It displays running totals for each category, the net balance and a
//! stacked bar chart breaking down each day's activity.

mod aggregation;
mod charts;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
