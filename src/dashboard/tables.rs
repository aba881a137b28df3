//! Table views for dashboard data display.
//!
//! Provides HTML table components for the category totals and the transaction
//! history.

use maud::{Markup, html};
use rust_decimal::Decimal;
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    dashboard::aggregation::Totals,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
    transaction::{Category, Transaction},
};

// Times are stored with a subsecond component, only show whole seconds.
const TIME_DISPLAY_FORMAT: &[BorrowedFormatItem] = format_description!("[hour]:[minute]:[second]");

const TABLE_STICKY_CELL_STYLE: &str =
    "px-6 py-4 font-medium text-gray-900 dark:text-white text-left";
const TABLE_CELL_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const TABLE_CELL_RED_STYLE: &str = "text-red-600 dark:text-red-400";
const TABLE_CELL_BLUE_STYLE: &str = "text-blue-600 dark:text-blue-400";

/// Gets the CSS class for coloring amounts (green for positive, red for negative).
fn amount_color_class(amount: Decimal) -> &'static str {
    if amount >= Decimal::ZERO {
        TABLE_CELL_GREEN_STYLE
    } else {
        TABLE_CELL_RED_STYLE
    }
}

/// Gets the CSS class for coloring amounts by their category.
fn category_color_class(category: Category) -> &'static str {
    match category {
        Category::Expense => TABLE_CELL_RED_STYLE,
        Category::Income => TABLE_CELL_GREEN_STYLE,
        Category::Savings => TABLE_CELL_BLUE_STYLE,
    }
}

/// Renders a table showing the totals for each category and the net balance.
pub(super) fn totals_table(totals: &Totals) -> Markup {
    html! {
        div {
            h3 class="text-xl font-semibold mb-4" { "Totals" }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    tbody {
                        tr class=(TABLE_ROW_STYLE) {
                            th scope="row" class=(TABLE_STICKY_CELL_STYLE) {
                                "Total Income:"
                            }
                            td class={(TABLE_CELL_STYLE) " " (TABLE_CELL_GREEN_STYLE)} {
                                (format_currency(totals.income))
                            }
                        }

                        tr class=(TABLE_ROW_STYLE) {
                            th scope="row" class=(TABLE_STICKY_CELL_STYLE) {
                                "Total Expenses:"
                            }
                            td class={(TABLE_CELL_STYLE) " " (TABLE_CELL_RED_STYLE)} {
                                (format_currency(totals.expense))
                            }
                        }

                        tr class=(TABLE_ROW_STYLE) {
                            th scope="row" class=(TABLE_STICKY_CELL_STYLE) {
                                "Total Savings:"
                            }
                            td class={(TABLE_CELL_STYLE) " " (TABLE_CELL_BLUE_STYLE)} {
                                (format_currency(totals.savings))
                            }
                        }

                        tr class=(TABLE_ROW_STYLE) {
                            th scope="row" class=(TABLE_STICKY_CELL_STYLE) {
                                "Net Balance (Income - Expenses):"
                            }
                            td class={(TABLE_CELL_STYLE) " " (amount_color_class(totals.net_balance)) " font-bold"} {
                                (format_currency(totals.net_balance))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the transaction history table, most recent first.
pub(super) fn transactions_table(transactions: &[Transaction]) -> Markup {
    html! {
        div {
            h3 class="text-xl font-semibold mb-4" { "Transaction History" }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Comment" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Time" }
                        }
                    }
                    tbody {
                        @for transaction in transactions {
                            tr class=(TABLE_ROW_STYLE) {
                                td class={(TABLE_CELL_STYLE) " " (category_color_class(transaction.category))} {
                                    (format_currency(transaction.amount))
                                }
                                td class=(TABLE_CELL_STYLE) {
                                    (transaction.comment)
                                }
                                td class=(TABLE_CELL_STYLE) {
                                    (transaction.category)
                                }
                                td class=(TABLE_CELL_STYLE) {
                                    (transaction.date)
                                }
                                td class=(TABLE_CELL_STYLE) {
                                    (transaction.time.format(TIME_DISPLAY_FORMAT).unwrap_or_default())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
