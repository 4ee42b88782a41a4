/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use entity::ComponentValue;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::consts::*;
use super::error::InputError;

/// Parses a money-like field. Blank input is an error, never zero.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, InputError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(InputError::missing(field));
    }

    Decimal::from_str(raw).map_err(|_| InputError::invalid_number(field, raw))
}

pub fn parse_non_negative(field: &str, raw: &str) -> Result<Decimal, InputError> {
    let value = parse_decimal(field, raw)?;
    check_money(field, value)?;
    Ok(value)
}

/// Rejects amounts the backend cannot store: anything below zero or above
/// [`MONEY_MAX`].
pub fn check_money(field: &str, value: Decimal) -> Result<(), InputError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(InputError::Negative(field.to_string()));
    }

    if value > MONEY_MAX {
        return Err(InputError::OutOfRange(field.to_string()));
    }

    Ok(())
}

pub fn parse_month(raw: &str) -> Result<u32, InputError> {
    let raw = raw.trim();

    match raw.parse::<u32>() {
        Ok(month) if MONTH_RANGE.contains(&month) => Ok(month),
        _ => Err(InputError::InvalidMonth(raw.to_string())),
    }
}

pub fn parse_year(raw: &str) -> Result<i32, InputError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(InputError::missing("year"));
    }

    raw.parse::<i32>()
        .map_err(|_| InputError::invalid_number("year", raw))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(raw.to_string()))
}

/// Builds a component value from the two optional form fields. Leaving
/// both empty is allowed; such a component contributes nothing.
pub fn parse_component_value(
    amount: Option<&str>,
    percentage: Option<&str>,
) -> Result<Option<ComponentValue>, InputError> {
    let amount = amount.map(str::trim).filter(|s| !s.is_empty());
    let percentage = percentage.map(str::trim).filter(|s| !s.is_empty());

    match (amount, percentage) {
        (Some(_), Some(_)) => Err(InputError::AmbiguousComponentValue),
        (Some(amount), None) => Ok(Some(ComponentValue::Fixed(parse_non_negative(
            "amount", amount,
        )?))),
        (None, Some(percentage)) => {
            let pct = parse_non_negative("percentage", percentage)?;

            if pct > Decimal::from(PERCENTAGE_MAX) {
                return Err(InputError::PercentageOutOfRange(pct.to_string()));
            }

            Ok(Some(ComponentValue::Percentage(pct)))
        }
        (None, None) => Ok(None),
    }
}

pub fn parse_role_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|role| role.trim())
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .collect()
}

/// `value_parser` adapter for clap arguments carrying money.
pub fn non_negative_amount(s: &str) -> Result<Decimal, String> {
    parse_non_negative("amount", s).map_err(|e| e.to_string())
}

pub fn month_number(s: &str) -> Result<u32, String> {
    parse_month(s).map_err(|e| e.to_string())
}

pub fn date_value(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}
