/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use hr_core::InputError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Validation(#[from] InputError),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Server returned {status}: {body}")]
    Server { status: StatusCode, body: String },
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

impl ConnectorError {
    pub fn not_logged_in() -> Self {
        ConnectorError::Auth("Token not set. Use `hrctl login` to log in.".to_string())
    }

    pub fn from_status(status: StatusCode, endpoint: &str, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ConnectorError::Auth(format!("{} rejected by server: {}", endpoint, body))
            }
            StatusCode::NOT_FOUND => ConnectorError::NotFound(endpoint.to_string()),
            _ => ConnectorError::Server { status, body },
        }
    }
}
