/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use thiserror::Error;

/// Operator input rejected before anything is submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} is required")]
    Missing(String),
    #[error("`{value}` is not a valid number for {field}")]
    InvalidNumber { field: String, value: String },
    #[error("{0} cannot be negative")]
    Negative(String),
    #[error("{0} cannot exceed {max}", max = crate::consts::MONEY_MAX)]
    OutOfRange(String),
    #[error("month must be between 1 and 12, got `{0}`")]
    InvalidMonth(String),
    #[error("percentage must be between 0 and 100, got {0}")]
    PercentageOutOfRange(String),
    #[error("set either an amount or a percentage, not both")]
    AmbiguousComponentValue,
    #[error("`{0}` is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("payroll already exists for employee {employee} for {month}/{year}")]
    DuplicatePayroll { employee: i64, month: u32, year: i32 },
}

impl InputError {
    pub fn missing(field: &str) -> Self {
        InputError::Missing(field.to_string())
    }

    pub fn invalid_number(field: &str, value: &str) -> Self {
        InputError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
