//! Transaction data aggregation for the dashboard.
//!
//! Provides functions to total transaction amounts by category and to pivot
//! them into per-day series for the chart.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use time::Date;

use crate::transaction::{Category, Transaction};

/// The per-category totals across all transactions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) struct Totals {
    /// The sum of all income amounts.
    pub income: Decimal,
    /// The sum of all expense amounts.
    pub expense: Decimal,
    /// The sum of all savings amounts.
    pub savings: Decimal,
    /// Income minus expenses minus savings.
    pub net_balance: Decimal,
}

/// A date by category breakdown of transaction amounts for the chart.
pub(super) struct DailyBreakdown {
    /// The dates that have at least one transaction, in chronological order.
    pub dates: Vec<Date>,
    /// Daily totals for each category, one value per date in `dates`.
    pub series: Vec<(Category, Vec<Decimal>)>,
}

/// Sums transaction amounts into per-category totals.
///
/// The net balance is income minus expenses minus savings. Money put into
/// savings is not counted as spent but is still unavailable, so it is
/// excluded from the balance.
pub(super) fn compute_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();

    for transaction in transactions {
        match transaction.category {
            Category::Expense => totals.expense += transaction.amount,
            Category::Income => totals.income += transaction.amount,
            Category::Savings => totals.savings += transaction.amount,
        }
    }

    totals.net_balance = totals.income - totals.expense - totals.savings;

    totals
}

/// Pivots transactions into daily totals for each category.
///
/// Dates are in chronological order and every category has a value for every
/// date, with zero filling the days a category has no transactions, so the
/// stacked chart series stay aligned with the x-axis.
pub(super) fn compute_daily_breakdown(transactions: &[Transaction]) -> DailyBreakdown {
    let dates = get_sorted_dates(transactions);

    let series = Category::ALL
        .into_iter()
        .map(|category| {
            let mut totals_by_date: HashMap<Date, Decimal> = HashMap::new();

            for transaction in transactions
                .iter()
                .filter(|transaction| transaction.category == category)
            {
                *totals_by_date
                    .entry(transaction.date)
                    .or_insert(Decimal::ZERO) += transaction.amount;
            }

            let daily_totals = dates
                .iter()
                .map(|date| totals_by_date.get(date).copied().unwrap_or(Decimal::ZERO))
                .collect();

            (category, daily_totals)
        })
        .collect();

    DailyBreakdown { dates, series }
}

/// Extracts the unique dates from transactions in chronological order.
fn get_sorted_dates(transactions: &[Transaction]) -> Vec<Date> {
    let mut dates = HashSet::new();

    for transaction in transactions {
        dates.insert(transaction.date);
    }

    let mut sorted: Vec<_> = dates.into_iter().collect();
    sorted.sort();
    sorted
}
