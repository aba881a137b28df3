//! Defines the core data models and database queries for transactions.

use std::{fmt, str::FromStr};

use rusqlite::{Connection, Row, types::Type};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::{Error, database_id::DatabaseId};

// ============================================================================
// MODELS
// ============================================================================

/// The kind of transaction being recorded.
///
/// Every transaction belongs to exactly one category, which decides the total
/// that the amount counts towards on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Money spent.
    Expense,
    /// Money earned.
    Income,
    /// Money put aside.
    Savings,
}

impl Category {
    /// All categories in the order they appear in forms and charts.
    pub const ALL: [Category; 3] = [Category::Expense, Category::Income, Category::Savings];

    /// The category name as it is stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Expense => "Expense",
            Category::Income => "Income",
            Category::Savings => "Savings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when a string does not name a [Category].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is not a valid category, expected 'Expense', 'Income' or 'Savings'")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "Expense" => Ok(Category::Expense),
            "Income" => Ok(Category::Income),
            "Savings" => Ok(Category::Savings),
            _ => Err(ParseCategoryError(string.to_owned())),
        }
    }
}

/// An amount of money earned, spent or put aside at a particular date and time.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// The amount of money. Always greater than zero, the direction of the
    /// money is given by the category.
    pub amount: Decimal,
    /// A note describing what the transaction was for. May be empty.
    pub comment: String,
    /// The category that the amount counts towards.
    pub category: Category,
    /// The date when the transaction happened.
    pub date: Date,
    /// The time of day when the transaction was recorded.
    pub time: Time,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: Decimal, category: Category, date: Date, time: Time) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            category,
            date,
            time,
            comment: String::new(),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The comment defaults to an empty string. Pass the finished builder to
/// [create_transaction] to validate it and store the transaction.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The amount of money. Must be greater than zero, the direction of the
    /// money is given by the category.
    pub amount: Decimal,

    /// The category that the amount counts towards.
    pub category: Category,

    /// The date when the transaction happened.
    pub date: Date,

    /// The time of day when the transaction was recorded.
    pub time: Time,

    /// A note describing what the transaction was for.
    pub comment: String,
}

impl TransactionBuilder {
    /// Set the comment for the transaction.
    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_owned();
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database from a builder.
///
/// Amounts are stored as exact decimal strings so that reading a transaction
/// back gives the same amount that was written, with no floating point drift.
///
/// # Errors
/// This function will return a:
/// - [Error::NonPositiveAmount] if the amount is zero or negative,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    if builder.amount <= Decimal::ZERO {
        return Err(Error::NonPositiveAmount(builder.amount));
    }

    let transaction = connection
        .prepare(
            "INSERT INTO transactions (amount, comment, category, date, time)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, amount, comment, category, date, time",
        )?
        .query_row(
            (
                builder.amount.to_string(),
                builder.comment,
                builder.category.as_str(),
                builder.date,
                builder.time,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve all transactions in the database, most recent first.
///
/// Transactions are ordered by date and then by time of day, both descending.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, amount, comment, category, date, time FROM transactions
             ORDER BY date DESC, time DESC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount TEXT NOT NULL,
                comment TEXT NOT NULL,
                category TEXT NOT NULL CHECK (category IN ('Expense', 'Income', 'Savings')),
                date TEXT NOT NULL,
                time TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transactions', 0)",
        (),
    )?;

    // Add composite index used by dashboard page.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date_time ON transactions(date, time);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount: String = row.get(1)?;
    let amount = amount
        .parse::<Decimal>()
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(error)))?;
    let comment = row.get(2)?;
    let category: String = row.get(3)?;
    let category = category
        .parse::<Category>()
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(error)))?;
    let date = row.get(4)?;
    let time = row.get(5)?;

    Ok(Transaction {
        id,
        amount,
        comment,
        category,
        date,
        time,
    })
}

// ============================================================================
// TESTS
// ============================================================================
