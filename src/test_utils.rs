//! Shared helpers for view and handler tests.

use axum::{body::Body, http::StatusCode, response::Response};
use scraper::{ElementRef, Html, Selector};

/// Reads the whole response body as text.
async fn response_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    String::from_utf8_lossy(&body).into_owned()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&response_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&response_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "want well formed HTML, got parse errors: {:?}",
        html.errors
    );
}

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(
        StatusCode::OK,
        response.status(),
        "want 200 OK, got {}",
        response.status()
    );
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, want: &str) {
    let got = get_header(response, "content-type");

    assert_eq!(want, got, "want content type {want:?}, got {got:?}");
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, name: &str) -> String {
    let value = response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("no {name} header in response"));

    value
        .to_str()
        .unwrap_or_else(|error| panic!("{name} header is not valid text: {error}"))
        .to_owned()
}

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("no form in page")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = form.value().attr(attribute);

    assert_eq!(
        Some(endpoint),
        got,
        "want form with {attribute}={endpoint:?}, got {got:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, input_type: &str) {
    let selector = format!("input[name={name}]");
    let input = form
        .select(&Selector::parse(&selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("no input named {name:?} in form"));

    let got_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        input_type, got_type,
        "want input {name:?} with type {input_type:?}, got {got_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input {name:?} to be required"
    );
}

#[track_caller]
pub(crate) fn assert_form_select(form: &ElementRef<'_>, name: &str, want_options: &[&str]) {
    let selector = format!("select[name={name}]");
    let select = form
        .select(&Selector::parse(&selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("no select named {name:?} in form"));

    let got_options: Vec<String> = select
        .select(&Selector::parse("option").unwrap())
        .map(|option| option.text().collect::<String>().trim().to_owned())
        .collect();
    let want_options: Vec<String> = want_options.iter().map(|option| option.to_string()).collect();

    assert_eq!(
        want_options, got_options,
        "want select {name:?} options {want_options:?}, got {got_options:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let button = form
        .select(&Selector::parse("button[type=submit]").unwrap())
        .next()
        .expect("no submit button in form");

    let got_text = button.text().collect::<String>();
    let got_text = got_text.trim();

    assert_eq!(
        text, got_text,
        "want submit button labelled {text:?}, got {got_text:?}"
    );
}
