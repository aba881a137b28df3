//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing and querying transactions
//! - View handlers for the new transaction page and endpoint

mod core;
mod create_endpoint;
mod create_page;

pub use self::core::{Category, Transaction, create_transaction_table, get_all_transactions};
pub use self::create_endpoint::create_transaction_endpoint;
pub use self::create_page::get_create_transaction_page;

#[cfg(test)]
pub use self::core::{count_transactions, create_transaction};
