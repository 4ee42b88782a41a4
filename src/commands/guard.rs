/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use crate::input::*;
use connector::{ConnectorError, ConnectorResult, RequestConfig};
use hr_core::consts::ADMIN_EQUIVALENT_ROLES;
use hr_core::roles::{RoleGuard, Route};
use std::fmt::Display;
use std::future::Future;
use std::process::exit;
use tracing::warn;

/// Exit status after Ctrl-C, as shells report SIGINT.
const INTERRUPTED: i32 = 130;

/// Runs `fut` unless Ctrl-C arrives first, in which case the request is
/// dropped and the process exits.
pub async fn interruptible<F: Future>(fut: F) -> F::Output {
    tokio::select! {
        output = fut => output,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted.");
            exit(INTERRUPTED);
        }
    }
}

pub fn or_exit<T, E: Display>(res: Result<T, E>) -> T {
    match res {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}

/// List loads degrade to an empty list. Rejected sessions still end the command.
pub fn or_empty<T>(what: &str, res: ConnectorResult<Vec<T>>) -> Vec<T> {
    match res {
        Ok(list) => list,
        Err(e @ ConnectorError::Auth(_)) => {
            eprintln!("{}", e);
            eprintln!("Use `hrctl login` to log in again.");
            exit(1);
        }
        Err(e) => {
            warn!(error = %e, "Failed to load {}", what);
            Vec::new()
        }
    }
}

pub fn admin_or_hr() -> RoleGuard {
    RoleGuard::new(ADMIN_EQUIVALENT_ROLES)
}

/// Loads the request config and evaluates `guard` against the stored session.
/// Returns only when the command may proceed.
pub async fn require(guard: RoleGuard) -> RequestConfig {
    let config = or_exit(load_config().and_then(get_request_config));
    let decision = interruptible(guard.evaluate(config.session.as_ref(), &config)).await;

    match decision.route() {
        Route::Render => config,
        Route::RedirectLogin => {
            eprintln!("Not logged in. Use `hrctl login` to log in.");
            exit(1);
        }
        Route::RedirectForbidden => {
            eprintln!("Forbidden: {}", decision);
            exit(1);
        }
    }
}

pub async fn require_session() -> RequestConfig {
    require(RoleGuard::authenticated()).await
}
