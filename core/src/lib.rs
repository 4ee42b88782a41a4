/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod directory;
pub mod error;
pub mod input;
pub mod payroll;
pub mod roles;
pub mod session;

pub use error::InputError;
pub use session::{Session, TokenClaims};
