/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for payroll totals, drafts and recalculation

use entity::{ComponentKind, ComponentValue, PayrollRecord, SalaryComponent};
use hr_core::InputError;
use hr_core::payroll::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn component(id: i64, kind: ComponentKind, value: Option<ComponentValue>) -> SalaryComponent {
    SalaryComponent {
        id,
        name: format!("component-{}", id),
        kind,
        value,
    }
}

fn record(components: Vec<SalaryComponent>, gross: Decimal, deductions: Decimal) -> PayrollRecord {
    PayrollRecord {
        id: 1,
        employee: 9,
        employee_name: None,
        month: 4,
        year: 2025,
        basic_salary: dec!(40000),
        hra: dec!(2000),
        components: components.iter().map(|c| c.id).collect(),
        components_details: components,
        gross_salary: gross,
        total_deductions: deductions,
        net_salary: gross - deductions,
        created_at: None,
    }
}

#[test]
fn test_fixed_earning() {
    let components = vec![component(
        1,
        ComponentKind::Earning,
        Some(ComponentValue::Fixed(dec!(2000))),
    )];

    let totals = compute_totals(dec!(50000), dec!(5000), &components);
    assert_eq!(totals.gross, dec!(57000));
    assert_eq!(totals.deductions, dec!(0));
    assert_eq!(totals.net, dec!(57000));
}

#[test]
fn test_percentage_deduction() {
    let components = vec![component(
        1,
        ComponentKind::Deduction,
        Some(ComponentValue::Percentage(dec!(10))),
    )];

    let totals = compute_totals(dec!(40000), dec!(0), &components);
    assert_eq!(totals.gross, dec!(40000));
    assert_eq!(totals.deductions, dec!(4000));
    assert_eq!(totals.net, dec!(36000));
}

#[test]
fn test_percentage_earning_uses_basic_only() {
    let components = vec![component(
        1,
        ComponentKind::Earning,
        Some(ComponentValue::Percentage(dec!(20))),
    )];

    let totals = compute_totals(dec!(30000), dec!(10000), &components);
    assert_eq!(totals.gross, dec!(46000));
}

#[test]
fn test_percentage_contribution_for_any_basic() {
    for (basic, pct) in [(dec!(12345.67), dec!(7.5)), (dec!(0), dec!(50)), (dec!(999), dec!(100))] {
        let deduction = component(1, ComponentKind::Deduction, Some(ComponentValue::Percentage(pct)));
        let expected = (pct / dec!(100) * basic).round_dp_with_strategy(
            2,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        );
        assert_eq!(contribution(&deduction, basic), expected);
    }
}

#[test]
fn test_component_without_value_contributes_nothing() {
    let components = vec![
        component(1, ComponentKind::Earning, None),
        component(2, ComponentKind::Deduction, None),
    ];

    let totals = compute_totals(dec!(1000), dec!(100), &components);
    assert_eq!(totals.gross, dec!(1100));
    assert_eq!(totals.deductions, dec!(0));
    assert_eq!(totals.net, dec!(1100));
}

#[test]
fn test_mixed_components_net_is_gross_minus_deductions() {
    let components = vec![
        component(1, ComponentKind::Earning, Some(ComponentValue::Fixed(dec!(1500.50)))),
        component(2, ComponentKind::Earning, Some(ComponentValue::Percentage(dec!(5)))),
        component(3, ComponentKind::Deduction, Some(ComponentValue::Fixed(dec!(200)))),
        component(4, ComponentKind::Deduction, Some(ComponentValue::Percentage(dec!(12)))),
    ];

    let totals = compute_totals(dec!(25000), dec!(2500), &components);
    assert_eq!(totals.gross, dec!(30250.50));
    assert_eq!(totals.deductions, dec!(3200));
    assert_eq!(totals.net, totals.gross - totals.deductions);
}

#[test]
fn test_compute_totals_is_idempotent() {
    let components = vec![
        component(1, ComponentKind::Earning, Some(ComponentValue::Percentage(dec!(33.333)))),
        component(2, ComponentKind::Deduction, Some(ComponentValue::Fixed(dec!(10)))),
    ];

    let first = compute_totals(dec!(10000), dec!(500), &components);
    let second = compute_totals(dec!(10000), dec!(500), &components);
    assert_eq!(first, second);
}

#[test]
fn test_negative_amounts_are_not_clamped() {
    let components = vec![component(
        1,
        ComponentKind::Earning,
        Some(ComponentValue::Fixed(dec!(-100))),
    )];

    let totals = compute_totals(dec!(1000), dec!(0), &components);
    assert_eq!(totals.gross, dec!(900));
}

#[test]
fn test_draft_deduplicates_components() {
    let transport = component(1, ComponentKind::Earning, Some(ComponentValue::Fixed(dec!(2000))));
    let mut draft = PayrollDraft::new(9, 4, 2025, dec!(50000), dec!(5000));
    draft.select(transport.clone()).select(transport);

    assert_eq!(draft.components().len(), 1);
    assert_eq!(draft.totals().gross, dec!(57000));
}

#[test]
fn test_draft_select_ids_keeps_pick_order() {
    let registry = vec![
        component(1, ComponentKind::Earning, Some(ComponentValue::Fixed(dec!(10)))),
        component(2, ComponentKind::Deduction, Some(ComponentValue::Fixed(dec!(5)))),
        component(3, ComponentKind::Earning, Some(ComponentValue::Fixed(dec!(1)))),
    ];

    let mut draft = PayrollDraft::new(9, 4, 2025, dec!(100), dec!(0));
    let missing = draft.select_ids(&[3, 1, 3, 42], &registry);

    assert_eq!(missing, vec![42]);
    assert_eq!(
        draft.components().iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![3, 1]
    );
}

#[test]
fn test_draft_into_request() {
    let mut draft = PayrollDraft::new(9, 12, 2025, dec!(40000), dec!(0));
    draft.select(component(
        7,
        ComponentKind::Deduction,
        Some(ComponentValue::Percentage(dec!(10))),
    ));

    let request = draft.into_request().unwrap();
    assert_eq!(request.components, vec![7]);
    assert_eq!(request.total_deductions, dec!(4000));
    assert_eq!(request.net_salary, dec!(36000));
}

#[test]
fn test_draft_validation() {
    let draft = PayrollDraft::new(9, 13, 2025, dec!(100), dec!(0));
    assert_eq!(
        draft.validate().unwrap_err(),
        InputError::InvalidMonth("13".to_string())
    );

    let draft = PayrollDraft::new(9, 1, 2025, dec!(-1), dec!(0));
    assert_eq!(
        draft.into_request().unwrap_err(),
        InputError::Negative("basic salary".to_string())
    );
}

#[test]
fn test_draft_rejects_amounts_beyond_money_column() {
    let basic = hr_core::input::parse_non_negative("basic", "79228162514264337593543950335");
    assert_eq!(basic.unwrap_err(), InputError::OutOfRange("basic".to_string()));

    let draft = PayrollDraft::new(9, 1, 2025, Decimal::MAX, dec!(1));
    assert_eq!(
        draft.validate().unwrap_err(),
        InputError::OutOfRange("basic salary".to_string())
    );

    let mut draft = PayrollDraft::new(9, 1, 2025, dec!(99999999.99), dec!(0));
    assert!(draft.validate().is_ok());
    draft.select(component(1, ComponentKind::Earning, Some(ComponentValue::Fixed(dec!(0.01)))));
    assert_eq!(
        draft.into_request().unwrap_err(),
        InputError::OutOfRange("gross salary".to_string())
    );
}

#[test]
fn test_compute_totals_saturates_instead_of_panicking() {
    let components = vec![
        component(1, ComponentKind::Earning, Some(ComponentValue::Fixed(Decimal::MAX))),
        component(2, ComponentKind::Earning, Some(ComponentValue::Percentage(dec!(100)))),
    ];

    let totals = compute_totals(Decimal::MAX, dec!(1), &components);
    assert_eq!(totals.gross, Decimal::MAX);
    assert_eq!(totals.net, Decimal::MAX);
}

#[test]
fn test_recalculate_uses_snapshot() {
    let snapshot = vec![component(
        1,
        ComponentKind::Earning,
        Some(ComponentValue::Fixed(dec!(1000))),
    )];
    let stored = record(snapshot, dec!(43000), dec!(0));

    assert_eq!(recalculate(&stored).gross, dec!(43000));
    assert_eq!(drift(&stored), None);
    assert_eq!(recalculate(&stored), recalculate(&stored));
}

#[test]
fn test_drift_detects_stale_totals() {
    let snapshot = vec![component(
        1,
        ComponentKind::Deduction,
        Some(ComponentValue::Percentage(dec!(10))),
    )];
    let stored = record(snapshot, dec!(42000), dec!(0));

    let computed = drift(&stored).unwrap();
    assert_eq!(computed.deductions, dec!(4000));
    assert_eq!(computed.net, dec!(38000));
}

#[test]
fn test_payslip_lines() {
    let components = vec![
        component(1, ComponentKind::Earning, Some(ComponentValue::Fixed(dec!(2000)))),
        component(2, ComponentKind::Deduction, Some(ComponentValue::Percentage(dec!(10)))),
    ];

    let slip = payslip(dec!(40000), dec!(1000), &components);
    assert_eq!(slip.earnings.len(), 1);
    assert_eq!(slip.deductions.len(), 1);
    assert_eq!(slip.deductions[0].contribution, dec!(4000));
    assert_eq!(slip.totals.net, dec!(39000));
}
