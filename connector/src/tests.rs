/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use reqwest::header::{ACCEPT, AUTHORIZATION};

fn config(session: Option<&str>) -> RequestConfig {
    RequestConfig::new(
        "https://hr.example.com/api/",
        session.and_then(|token| Session::new(token.to_string())),
    )
}

#[test]
fn test_endpoint_url_joins_without_double_slash() {
    let config = config(None);

    assert_eq!(
        config.endpoint_url("employees/"),
        "https://hr.example.com/api/employees/"
    );
    assert_eq!(
        config.endpoint_url("/payroll/4/recalculate/"),
        "https://hr.example.com/api/payroll/4/recalculate/"
    );
}

#[test]
fn test_authenticated_request_carries_bearer_token() {
    let config = config(Some("abc.def.ghi"));

    let request = get_client(&config, "departments/", RequestType::GET, true)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(request.method(), RequestType::GET);
    assert_eq!(
        request.url().as_str(),
        "https://hr.example.com/api/departments/"
    );
    assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc.def.ghi");
    assert_eq!(request.headers()[ACCEPT], "application/json");
}

#[test]
fn test_authenticated_request_without_session_fails() {
    let config = config(None);

    let err = get_client(&config, "employees/", RequestType::GET, true).unwrap_err();
    assert!(matches!(err, ConnectorError::Auth(_)));
}

#[test]
fn test_login_request_has_no_authorization() {
    let config = config(Some("abc.def.ghi"));

    let request = get_client(&config, "auth/token/", RequestType::POST, false)
        .unwrap()
        .build()
        .unwrap();

    assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn test_with_session_keeps_server() {
    let anonymous = config(None);
    let session = Session::new("token".to_string()).unwrap();

    let authenticated = anonymous.with_session(session);
    assert_eq!(authenticated.server_url, anonymous.server_url);
    assert!(authenticated.session.is_some());
}

#[test]
fn test_query_pairs_skip_unset_filters() {
    let pairs = query_pairs(&[
        ("search", Some("ali".to_string())),
        ("department", None),
        ("year", Some("2025".to_string())),
    ]);

    assert_eq!(
        pairs,
        vec![("search", "ali".to_string()), ("year", "2025".to_string())]
    );
}

#[test]
fn test_payroll_filter_in_query_string() {
    let config = config(Some("token"));
    let filter = payroll::PayrollFilter {
        employee: Some(7),
        month: Some(3),
        year: None,
    };

    let request = get_client(&config, "payroll/", RequestType::GET, true)
        .unwrap()
        .query(&filter.query())
        .build()
        .unwrap();

    assert_eq!(request.url().query(), Some("employee=7&month=3"));
}

#[test]
fn test_status_mapping() {
    assert!(matches!(
        ConnectorError::from_status(StatusCode::UNAUTHORIZED, "users/me/", String::new()),
        ConnectorError::Auth(_)
    ));
    assert!(matches!(
        ConnectorError::from_status(StatusCode::FORBIDDEN, "payroll/", String::new()),
        ConnectorError::Auth(_)
    ));
    assert!(matches!(
        ConnectorError::from_status(StatusCode::NOT_FOUND, "employees/9/", String::new()),
        ConnectorError::NotFound(endpoint) if endpoint == "employees/9/"
    ));

    let err = ConnectorError::from_status(
        StatusCode::BAD_REQUEST,
        "payroll/",
        "{\"non_field_errors\":[\"duplicate\"]}".to_string(),
    );
    assert!(matches!(err, ConnectorError::Server { status, .. } if status == StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_multipart_form_missing_file() {
    let err = multipart_form(
        vec![("title", "Leave policy".to_string())],
        "file",
        Some(Path::new("/nonexistent/leave-policy.pdf")),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ConnectorError::File { .. }));
}

#[tokio::test]
async fn test_multipart_form_without_file() {
    let form = multipart_form(vec![("title", "Leave policy".to_string())], "file", None)
        .await
        .unwrap();

    assert!(!form.boundary().is_empty());
}
