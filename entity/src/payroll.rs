/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryComponent;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PayrollRecord {
    pub id: i64,
    pub employee: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub month: u32,
    pub year: i32,
    pub basic_salary: Decimal,
    #[serde(default)]
    pub hra: Decimal,
    #[serde(default)]
    pub components: Vec<i64>,
    /// Component definitions as they were when the totals were computed.
    #[serde(default)]
    pub components_details: Vec<SalaryComponent>,
    #[serde(default)]
    pub gross_salary: Decimal,
    #[serde(default)]
    pub total_deductions: Decimal,
    #[serde(default)]
    pub net_salary: Decimal,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST payroll/` and `PUT payroll/{id}/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PayrollRequest {
    pub employee: i64,
    pub month: u32,
    pub year: i32,
    pub basic_salary: Decimal,
    pub hra: Decimal,
    pub components: Vec<i64>,
    pub gross_salary: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
}
