//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    alert::Alert,
    html::format_currency,
    timezone::get_local_offset,
    transaction::{Category, Transaction, core::create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The value of the transaction in the local currency.
    pub amount: Decimal,
    /// The category that the amount counts towards.
    pub category: Category,
    /// Text detailing the transaction.
    #[serde(default)]
    pub comment: Option<String>,
}

/// A route handler for creating a new transaction.
///
/// The transaction is stamped with the current date and time in the configured
/// local timezone. Responds with an alert that htmx swaps into the alert
/// container of the page.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let Some(local_timezone) = get_local_offset(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };

    let now_local_time = OffsetDateTime::now_utc().to_offset(local_timezone);

    let transaction = Transaction::build(
        form.amount,
        form.category,
        now_local_time.date(),
        now_local_time.time(),
    )
    .comment(form.comment.as_deref().unwrap_or_default());

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = create_transaction(transaction, &connection) {
        tracing::error!("could not create transaction: {error}");

        return error.into_alert_response();
    }

    Alert::Success {
        message: "Transaction added successfully!".to_owned(),
        details: format!(
            "Recorded {} of {}",
            form.category,
            format_currency(form.amount)
        ),
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use rust_decimal::Decimal;
    use scraper::Selector;
    use time::OffsetDateTime;

    use crate::{
        db::initialize,
        test_utils::parse_html_fragment,
        transaction::{
            Category, count_transactions,
            create_endpoint::{CreateTransactionState, TransactionForm},
            create_transaction_endpoint, get_all_transactions,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn get_test_state(conn: Connection) -> CreateTransactionState {
        CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state(get_test_connection());
        let form = TransactionForm {
            amount: Decimal::new(123, 1),
            category: Category::Income,
            comment: Some("test transaction".to_owned()),
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(StatusCode::OK, response.status());

        // We know the first transaction will have ID 1
        let connection = state.db_connection.lock().unwrap();
        let transaction = get_all_transactions(&connection)
            .unwrap()
            .pop()
            .expect("expected one transaction");
        assert_eq!(Decimal::new(123, 1), transaction.amount);
        assert_eq!(Category::Income, transaction.category);
        assert_eq!("test transaction", transaction.comment);
        assert_eq!(OffsetDateTime::now_utc().date(), transaction.date);
    }

    #[tokio::test]
    async fn create_transaction_defaults_to_empty_comment() {
        let state = get_test_state(get_test_connection());
        let form = TransactionForm {
            amount: Decimal::new(999, 2),
            category: Category::Savings,
            comment: None,
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(StatusCode::OK, response.status());

        let connection = state.db_connection.lock().unwrap();
        let transaction = get_all_transactions(&connection)
            .unwrap()
            .pop()
            .expect("expected one transaction");
        assert_eq!("", transaction.comment);
    }

    #[tokio::test]
    async fn create_transaction_responds_with_success_alert() {
        let state = get_test_state(get_test_connection());
        let form = TransactionForm {
            amount: Decimal::new(5000, 2),
            category: Category::Expense,
            comment: None,
        };

        let response = create_transaction_endpoint(State(state), Form(form))
            .await
            .into_response();

        let fragment = parse_html_fragment(response).await;
        let alert = fragment
            .select(&Selector::parse("#alert-container").unwrap())
            .next()
            .expect("No alert container found");

        assert_eq!(
            Some("true"),
            alert.value().attr("hx-swap-oob"),
            "want alert container to swap out of band"
        );

        let alert_text = alert.text().collect::<String>();
        assert!(
            alert_text.contains("Transaction added successfully!"),
            "want success alert, got {alert_text:?}"
        );
        assert!(
            alert_text.contains("RS-50.00"),
            "want alert to name the amount, got {alert_text:?}"
        );
    }

    #[tokio::test]
    async fn create_transaction_rejects_zero_amount() {
        let state = get_test_state(get_test_connection());
        let form = TransactionForm {
            amount: Decimal::ZERO,
            category: Category::Expense,
            comment: None,
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(StatusCode::BAD_REQUEST, response.status());

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(0, count_transactions(&connection).unwrap());
    }

    #[tokio::test]
    async fn create_transaction_fails_on_invalid_timezone() {
        let conn = get_test_connection();
        let state = CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Middle/Nowhere".to_owned(),
        };
        let form = TransactionForm {
            amount: Decimal::ONE,
            category: Category::Income,
            comment: None,
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(0, count_transactions(&connection).unwrap());
    }

    #[test]
    fn transaction_form_parses_empty_comment_as_none() {
        // An empty text input is submitted as an empty string.
        let form_data = "amount=12.30&category=Expense&comment=";
        let form: TransactionForm = serde_html_form::from_str(form_data).unwrap();
        assert_eq!(Decimal::new(1230, 2), form.amount);
        assert_eq!(Category::Expense, form.category);
        assert_eq!(None, form.comment);

        // Comment text is passed through as-is.
        let form_data = "amount=5&category=Income&comment=Weekly+pay";
        let form: TransactionForm = serde_html_form::from_str(form_data).unwrap();
        assert_eq!(Some("Weekly pay".to_owned()), form.comment);

        // The comment field may be left out entirely.
        let form_data = "amount=5&category=Savings";
        let form: TransactionForm = serde_html_form::from_str(form_data).unwrap();
        assert_eq!(None, form.comment);
    }
}
