/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod departments;
pub mod designations;
pub mod employees;
pub mod error;
pub mod payroll;
pub mod policies;
pub mod salary_components;
pub mod user;

#[cfg(test)]
mod tests;

pub use error::{ConnectorError, ConnectorResult};

use entity::ListBody;
use hr_core::Session;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::path::Path;

pub type RequestType = reqwest::Method;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub session: Option<Session>,
    client: reqwest::Client,
}

impl RequestConfig {
    pub fn new(server_url: impl Into<String>, session: Option<Session>) -> Self {
        RequestConfig {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            session,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_session(&self, session: Session) -> Self {
        RequestConfig {
            server_url: self.server_url.clone(),
            session: Some(session),
            client: self.client.clone(),
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.server_url, endpoint.trim_start_matches('/'))
    }
}

fn get_client(
    config: &RequestConfig,
    endpoint: &str,
    request_type: RequestType,
    login: bool,
) -> ConnectorResult<reqwest::RequestBuilder> {
    let client = config
        .client
        .request(request_type, config.endpoint_url(endpoint))
        .header(reqwest::header::ACCEPT, "application/json");

    if !login {
        return Ok(client);
    }

    let session = config
        .session
        .as_ref()
        .ok_or_else(ConnectorError::not_logged_in)?;

    Ok(client.header(reqwest::header::AUTHORIZATION, session.bearer()))
}

async fn check_status(res: reqwest::Response, endpoint: &str) -> ConnectorResult<reqwest::Response> {
    let status = res.status();

    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    tracing::debug!(%status, endpoint, "Request rejected");
    Err(ConnectorError::from_status(status, endpoint, body))
}

async fn parse_response<T: DeserializeOwned>(
    res: reqwest::Response,
    endpoint: &str,
) -> ConnectorResult<T> {
    let res = check_status(res, endpoint).await?;
    let bytes = res.bytes().await?;

    Ok(serde_json::from_slice::<T>(&bytes)?)
}

async fn parse_list<T: DeserializeOwned>(
    res: reqwest::Response,
    endpoint: &str,
) -> ConnectorResult<Vec<T>> {
    Ok(parse_response::<ListBody<T>>(res, endpoint).await?.into_vec())
}

async fn expect_empty(res: reqwest::Response, endpoint: &str) -> ConnectorResult<()> {
    let res = check_status(res, endpoint).await?;

    if res.status() != StatusCode::NO_CONTENT {
        tracing::debug!(status = %res.status(), endpoint, "Ignoring response body");
    }

    Ok(())
}

/// Multipart body from text fields plus an optional file under `file_field`.
async fn multipart_form(
    fields: Vec<(&'static str, String)>,
    file_field: &'static str,
    file: Option<&Path>,
) -> ConnectorResult<Form> {
    let mut form = fields
        .into_iter()
        .fold(Form::new(), |form, (key, value)| form.text(key, value));

    if let Some(path) = file {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ConnectorError::File {
                path: path.display().to_string(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_field.to_string());

        form = form.part(file_field, Part::bytes(bytes).file_name(file_name));
    }

    Ok(form)
}

/// Query pairs from optional filter values; unset filters are not sent.
fn query_pairs(pairs: &[(&'static str, Option<String>)]) -> Vec<(&'static str, String)> {
    pairs
        .iter()
        .filter_map(|(key, value)| value.clone().map(|value| (*key, value)))
        .collect()
}
