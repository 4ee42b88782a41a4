/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use entity::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Claims read from the bearer token payload. Nothing here is verified;
/// the values only steer what the client offers to show. Odd field shapes
/// are tolerated so one bad claim cannot hide the role.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TokenClaims {
    pub user_id: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::text")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub user_type: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_staff: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_superuser: bool,
    #[serde(deserialize_with = "lenient::integer")]
    pub exp: Option<i64>,
}

/// Authenticated session. Created from a login response, dropped on
/// logout; requests borrow it to build their `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Returns `None` for a blank token so a cleared config entry never
    /// counts as logged in.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();

        if token.is_empty() {
            return None;
        }

        Some(Session { token })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn decode_claims(&self) -> Option<TokenClaims> {
        decode_claims(&self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"[redacted]").finish()
    }
}

/// Best-effort decode of the payload segment of `header.payload.signature`.
/// Accepts the URL-safe alphabet as well as the standard one.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;

    match serde_json::from_slice::<TokenClaims>(&bytes) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!("Token payload is not a claims object: {}", e);
            None
        }
    }
}
