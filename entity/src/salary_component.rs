/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[serde(alias = "Earning", alias = "addition", alias = "Addition")]
    Earning,
    #[serde(alias = "Deduction")]
    Deduction,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComponentKind::Earning => write!(f, "earning"),
            ComponentKind::Deduction => write!(f, "deduction"),
        }
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "earning" | "addition" => Ok(ComponentKind::Earning),
            "deduction" => Ok(ComponentKind::Deduction),
            other => Err(format!(
                "`{}` is not a component kind, expected earning or deduction",
                other
            )),
        }
    }
}

/// How a component's contribution is derived from the basic salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentValue {
    Fixed(Decimal),
    Percentage(Decimal),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RawSalaryComponent", into = "RawSalaryComponent")]
pub struct SalaryComponent {
    pub id: i64,
    pub name: String,
    pub kind: ComponentKind,
    /// `None` when the backend sent neither an amount nor a percentage.
    pub value: Option<ComponentValue>,
}

/// A component definition as submitted to the backend, before it has an id.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(into = "RawSalaryComponent")]
pub struct ComponentDefinition {
    pub name: String,
    pub kind: ComponentKind,
    pub value: Option<ComponentValue>,
}

// Wire shape shared by every backend variant: `component_type` or `type`,
// and an optional amount and/or percentage.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct RawSalaryComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    name: String,
    #[serde(alias = "type")]
    component_type: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    percentage: Option<Decimal>,
}

fn resolve_value(amount: Option<Decimal>, percentage: Option<Decimal>) -> Option<ComponentValue> {
    match (amount, percentage) {
        (Some(amount), _) => Some(ComponentValue::Fixed(amount)),
        (None, Some(pct)) => Some(ComponentValue::Percentage(pct)),
        (None, None) => None,
    }
}

fn split_value(value: Option<ComponentValue>) -> (Option<Decimal>, Option<Decimal>) {
    match value {
        Some(ComponentValue::Fixed(amount)) => (Some(amount), None),
        Some(ComponentValue::Percentage(pct)) => (None, Some(pct)),
        None => (None, None),
    }
}

impl TryFrom<RawSalaryComponent> for SalaryComponent {
    type Error = String;

    fn try_from(raw: RawSalaryComponent) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .ok_or_else(|| format!("salary component `{}` has no id", raw.name))?;

        Ok(SalaryComponent {
            id,
            name: raw.name,
            kind: raw.component_type,
            value: resolve_value(raw.amount, raw.percentage),
        })
    }
}

impl From<SalaryComponent> for RawSalaryComponent {
    fn from(component: SalaryComponent) -> Self {
        let (amount, percentage) = split_value(component.value);
        RawSalaryComponent {
            id: Some(component.id),
            name: component.name,
            component_type: component.kind,
            amount,
            percentage,
        }
    }
}

impl From<ComponentDefinition> for RawSalaryComponent {
    fn from(definition: ComponentDefinition) -> Self {
        let (amount, percentage) = split_value(definition.value);
        RawSalaryComponent {
            id: None,
            name: definition.name,
            component_type: definition.kind,
            amount,
            percentage,
        }
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComponentValue::Fixed(amount) => write!(f, "{}", amount),
            ComponentValue::Percentage(pct) => write!(f, "{}%", pct),
        }
    }
}
