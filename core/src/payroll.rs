/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Gross, deduction and net figures for a payroll.
//!
//! Everything here is a pure function of its inputs. A stored payroll is
//! recomputed from the component snapshot it carries, so later edits to a
//! component definition never change totals that were already issued.

use entity::{ComponentKind, ComponentValue, PayrollRecord, PayrollRequest, SalaryComponent};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::consts::*;
use super::error::InputError;
use super::input::check_money;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollTotals {
    pub gross: Decimal,
    pub deductions: Decimal,
    pub net: Decimal,
}

/// One resolved component line on a payslip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipLine {
    pub component_id: i64,
    pub name: String,
    pub kind: ComponentKind,
    pub value: Option<ComponentValue>,
    pub contribution: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payslip {
    pub basic: Decimal,
    pub hra: Decimal,
    pub earnings: Vec<PayslipLine>,
    pub deductions: Vec<PayslipLine>,
    pub totals: PayrollTotals,
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Amount a component adds (earning) or removes (deduction), unsigned.
pub fn contribution(component: &SalaryComponent, basic: Decimal) -> Decimal {
    match component.value {
        Some(ComponentValue::Fixed(amount)) => round_money(amount),
        Some(ComponentValue::Percentage(pct)) => {
            round_money((pct / Decimal::ONE_HUNDRED).saturating_mul(basic))
        }
        None => Decimal::ZERO,
    }
}

pub fn compute_totals(
    basic: Decimal,
    hra: Decimal,
    components: &[SalaryComponent],
) -> PayrollTotals {
    let (earnings, deductions) =
        components
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(earn, deduct), component| {
                let amount = contribution(component, basic);
                match component.kind {
                    ComponentKind::Earning => (earn.saturating_add(amount), deduct),
                    ComponentKind::Deduction => (earn, deduct.saturating_add(amount)),
                }
            });

    // Saturates instead of panicking; `PayrollDraft::validate` keeps real
    // drafts far below the limit.
    let gross = basic.saturating_add(hra).saturating_add(earnings);

    PayrollTotals {
        gross,
        deductions,
        net: gross.saturating_sub(deductions),
    }
}

pub fn payslip(basic: Decimal, hra: Decimal, components: &[SalaryComponent]) -> Payslip {
    let (earnings, deductions): (Vec<PayslipLine>, Vec<PayslipLine>) = components
        .iter()
        .map(|component| PayslipLine {
            component_id: component.id,
            name: component.name.clone(),
            kind: component.kind,
            value: component.value,
            contribution: contribution(component, basic),
        })
        .partition(|line| line.kind == ComponentKind::Earning);

    Payslip {
        basic,
        hra,
        earnings,
        deductions,
        totals: compute_totals(basic, hra, components),
    }
}

/// Recomputes a stored payroll from its own component snapshot.
pub fn recalculate(record: &PayrollRecord) -> PayrollTotals {
    compute_totals(record.basic_salary, record.hra, &record.components_details)
}

/// Stored totals that disagree with a recomputation, if any.
pub fn drift(record: &PayrollRecord) -> Option<PayrollTotals> {
    let computed = recalculate(record);
    let stored = PayrollTotals {
        gross: record.gross_salary,
        deductions: record.total_deductions,
        net: record.net_salary,
    };

    if computed == stored {
        None
    } else {
        Some(computed)
    }
}

/// A payroll being composed by an operator before submission.
#[derive(Debug, Clone)]
pub struct PayrollDraft {
    pub employee: i64,
    pub month: u32,
    pub year: i32,
    pub basic: Decimal,
    pub hra: Decimal,
    components: Vec<SalaryComponent>,
}

impl PayrollDraft {
    pub fn new(employee: i64, month: u32, year: i32, basic: Decimal, hra: Decimal) -> Self {
        PayrollDraft {
            employee,
            month,
            year,
            basic,
            hra,
            components: Vec::new(),
        }
    }

    /// Adds a component unless one with the same id is already selected.
    pub fn select(&mut self, component: SalaryComponent) -> &mut Self {
        if !self.components.iter().any(|c| c.id == component.id) {
            self.components.push(component);
        }

        self
    }

    pub fn select_all<I: IntoIterator<Item = SalaryComponent>>(&mut self, components: I) -> &mut Self {
        for component in components {
            self.select(component);
        }

        self
    }

    /// Keeps the registry entries whose ids were picked, in pick order.
    /// Unknown ids are reported back to the caller.
    pub fn select_ids(&mut self, ids: &[i64], registry: &[SalaryComponent]) -> Vec<i64> {
        let mut seen = HashSet::new();
        let mut missing = Vec::new();

        for id in ids.iter().filter(|id| seen.insert(**id)) {
            match registry.iter().find(|c| c.id == *id) {
                Some(component) => {
                    self.select(component.clone());
                }
                None => missing.push(*id),
            }
        }

        missing
    }

    pub fn components(&self) -> &[SalaryComponent] {
        &self.components
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if !MONTH_RANGE.contains(&self.month) {
            return Err(InputError::InvalidMonth(self.month.to_string()));
        }

        check_money("basic salary", self.basic)?;
        check_money("hra", self.hra)?;

        for component in &self.components {
            if let Some(ComponentValue::Fixed(amount)) = component.value {
                check_money(&component.name, amount)?;
            }
        }

        let totals = self.totals();
        check_money("gross salary", totals.gross)?;
        check_money("total deductions", totals.deductions)?;

        Ok(())
    }

    pub fn totals(&self) -> PayrollTotals {
        compute_totals(self.basic, self.hra, &self.components)
    }

    pub fn payslip(&self) -> Payslip {
        payslip(self.basic, self.hra, &self.components)
    }

    pub fn into_request(self) -> Result<PayrollRequest, InputError> {
        self.validate()?;
        let totals = self.totals();

        Ok(PayrollRequest {
            employee: self.employee,
            month: self.month,
            year: self.year,
            basic_salary: self.basic,
            hra: self.hra,
            components: self.components.iter().map(|c| c.id).collect(),
            gross_salary: totals.gross,
            total_deductions: totals.deductions,
            net_salary: totals.net,
        })
    }
}
