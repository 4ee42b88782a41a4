/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Route-level access decisions from the session token and, failing
//! that, the caller's profile.
//!
//! The result only decides what the client offers to show; the backend
//! authorizes every request on its own.

use anyhow::Result;
use async_trait::async_trait;
use entity::UserProfile;
use std::fmt;
use tracing::{debug, instrument, warn};

use super::consts::*;
use super::session::{Session, TokenClaims};

/// Anything carrying role-like fields.
pub trait RoleSubject {
    fn role(&self) -> Option<String>;
    fn is_elevated(&self) -> bool;
}

impl RoleSubject for TokenClaims {
    fn role(&self) -> Option<String> {
        self.role.clone().or_else(|| self.user_type.clone())
    }

    fn is_elevated(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

impl RoleSubject for UserProfile {
    fn role(&self) -> Option<String> {
        self.role
            .clone()
            .or_else(|| self.user_type.clone())
            .or_else(|| self.is_staff.then(|| ELEVATED_FALLBACK_ROLE.to_string()))
            .or_else(|| self.is_employee.then(|| EMPLOYEE_FALLBACK_ROLE.to_string()))
    }

    fn is_elevated(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

/// Where the caller's profile comes from when the token is not enough.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self) -> Result<UserProfile>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NoToken,
    RoleNotAllowed,
    FallbackUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Render,
    RedirectLogin,
    RedirectForbidden,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn route(&self) -> Route {
        match self {
            Decision::Allowed => Route::Render,
            Decision::Denied(DenyReason::NoToken) => Route::RedirectLogin,
            Decision::Denied(_) => Route::RedirectForbidden,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Decision::Allowed => write!(f, "allowed"),
            Decision::Denied(DenyReason::NoToken) => write!(f, "denied: not logged in"),
            Decision::Denied(DenyReason::RoleNotAllowed) => write!(f, "denied: role not allowed"),
            Decision::Denied(DenyReason::FallbackUnavailable) => {
                write!(f, "denied: profile could not be fetched")
            }
        }
    }
}

/// Allow-list of role names guarding one route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleGuard {
    allowed: Vec<String>,
}

impl RoleGuard {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RoleGuard {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Only requires a session; never consults claims or the profile.
    pub fn authenticated() -> Self {
        RoleGuard::default()
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn permits<S: RoleSubject + ?Sized>(&self, subject: &S) -> bool {
        if let Some(role) = subject.role() {
            if self.allowed.iter().any(|allowed| *allowed == role) {
                return true;
            }
        }

        subject.is_elevated()
            && self
                .allowed
                .iter()
                .any(|allowed| ADMIN_EQUIVALENT_ROLES.contains(&allowed.as_str()))
    }

    /// Evaluates the guard from scratch. Nothing is cached between calls.
    #[instrument(skip_all, fields(allowed = ?self.allowed))]
    pub async fn evaluate<P>(&self, session: Option<&Session>, source: &P) -> Decision
    where
        P: ProfileSource + ?Sized,
    {
        let Some(session) = session else {
            debug!("No session token");
            return Decision::Denied(DenyReason::NoToken);
        };

        if self.allowed.is_empty() {
            return Decision::Allowed;
        }

        if let Some(claims) = session.decode_claims() {
            if self.permits(&claims) {
                debug!("Token claims permit access");
                return Decision::Allowed;
            }
        }

        match source.fetch_profile().await {
            Ok(profile) if self.permits(&profile) => {
                debug!("Profile permits access");
                Decision::Allowed
            }
            Ok(_) => Decision::Denied(DenyReason::RoleNotAllowed),
            Err(e) => {
                warn!("Profile lookup failed, denying access: {:#}", e);
                Decision::Denied(DenyReason::FallbackUnavailable)
            }
        }
    }
}
