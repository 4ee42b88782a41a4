/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use rust_decimal::Decimal;
use std::ops::RangeInclusive;

pub const MONTH_RANGE: RangeInclusive<u32> = 1..=12;
pub const PERCENTAGE_MAX: u32 = 100;
/// Decimal places the backend stores money with.
pub const MONEY_SCALE: u32 = 2;
/// Largest amount a ten digit, two decimal money column holds.
pub const MONEY_MAX: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, MONEY_SCALE);
/// Roles that staff and superuser accounts are treated as.
pub const ADMIN_EQUIVALENT_ROLES: [&str; 2] = ["admin", "hr"];
pub const ELEVATED_FALLBACK_ROLE: &str = "admin";
pub const EMPLOYEE_FALLBACK_ROLE: &str = "employee";
