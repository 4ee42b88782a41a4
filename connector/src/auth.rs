/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::{LoginRequest, TokenResponse};
use tracing::instrument;

#[instrument(skip(config, password))]
pub async fn post_token(
    config: &RequestConfig,
    username: String,
    password: String,
) -> ConnectorResult<TokenResponse> {
    let req = LoginRequest { username, password };
    let endpoint = "auth/token/";

    let res = get_client(config, endpoint, RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res, endpoint).await
}

/// Exchanges credentials for a session.
pub async fn login(
    config: &RequestConfig,
    username: String,
    password: String,
) -> ConnectorResult<Session> {
    let token = post_token(config, username, password).await?;

    Session::new(token.access)
        .ok_or_else(|| ConnectorError::Auth("Server returned an empty access token".to_string()))
}
