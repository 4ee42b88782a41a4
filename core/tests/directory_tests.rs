/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for derived employee counts, filtering and sorting

use entity::{Department, Designation, Employee, EmploymentType, ModulePermissions};
use hr_core::directory::*;

fn department(id: i64, name: &str) -> Department {
    Department {
        id,
        name: name.to_string(),
        description: None,
    }
}

fn designation(id: i64, title: &str, department: Option<i64>) -> Designation {
    Designation {
        id,
        title: title.to_string(),
        description: None,
        department,
        department_detail: None,
    }
}

fn employee(id: i64, department: Option<Department>, designation: Option<Designation>) -> Employee {
    Employee {
        id,
        emp_code: format!("E-{:03}", id),
        first_name: format!("First{}", id),
        middle_name: None,
        last_name: format!("Last{}", id),
        gender: None,
        date_of_birth: None,
        email: format!("e{}@example.com", id),
        phone: None,
        alternate_phone: None,
        address: None,
        role: None,
        department,
        designation,
        joining_date: None,
        employment_type: EmploymentType::FullTime,
        reporting_to: None,
        salary: None,
        is_active: true,
        permissions: ModulePermissions::default(),
    }
}

#[test]
fn test_counts_ignore_unknown_departments() {
    let departments = vec![department(1, "Eng")];
    let employees = vec![
        employee(1, Some(department(1, "Eng")), None),
        employee(2, Some(department(1, "Eng")), None),
        employee(3, Some(department(2, "Ops")), None),
    ];

    let annotated = annotate_departments(departments, &employees);
    assert_eq!(annotated.len(), 1);
    assert_eq!(annotated[0].employee_count, 2);
    assert_eq!(annotated[0].status(), Status::Active);
}

#[test]
fn test_count_sum_matches_employees_with_department() {
    let departments = vec![department(1, "Eng"), department(2, "Ops"), department(3, "HR")];
    let employees = vec![
        employee(1, Some(department(1, "Eng")), None),
        employee(2, Some(department(2, "Ops")), None),
        employee(3, None, None),
        employee(4, Some(department(2, "Ops")), None),
    ];

    let annotated = annotate_departments(departments, &employees);
    let total: usize = annotated.iter().map(|a| a.employee_count).sum();
    let with_department = employees.iter().filter(|e| e.department.is_some()).count();

    assert_eq!(total, with_department);
    assert_eq!(annotated[2].employee_count, 0);
    assert_eq!(annotated[2].status(), Status::Inactive);
}

#[test]
fn test_annotate_is_pure() {
    let employees = vec![employee(1, Some(department(1, "Eng")), None)];

    let first = annotate_departments(vec![department(1, "Eng")], &employees);
    let second = annotate_departments(vec![department(1, "Eng")], &employees);
    assert_eq!(first, second);
}

#[test]
fn test_most_common_department_first_seen_wins() {
    let architect = designation(5, "Architect", None);
    let employees = vec![
        employee(1, Some(department(2, "Ops")), Some(architect.clone())),
        employee(2, Some(department(1, "Eng")), Some(architect.clone())),
        employee(3, Some(department(1, "Eng")), Some(architect.clone())),
        employee(4, Some(department(2, "Ops")), Some(architect.clone())),
        employee(5, Some(department(3, "HR")), None),
    ];

    let department = most_common_department(5, &employees).unwrap();
    assert_eq!(department.name, "Ops");
    assert!(most_common_department(6, &employees).is_none());
}

#[test]
fn test_designation_related_department() {
    let departments = vec![department(1, "Eng"), department(2, "Ops")];
    let designations = vec![
        designation(5, "Architect", None),
        designation(6, "Operator", Some(2)),
        designation(7, "Vacant", None),
    ];
    let employees = vec![
        employee(1, Some(department(1, "Eng")), Some(designation(5, "Architect", None))),
        employee(2, Some(department(1, "Eng")), Some(designation(5, "Architect", None))),
        employee(3, Some(department(1, "Eng")), Some(designation(6, "Operator", None))),
    ];

    let annotated = annotate_designations(designations, &departments, &employees);
    assert_eq!(annotated[0].employee_count, 2);
    assert_eq!(annotated[0].related.as_deref(), Some("Eng"));
    assert_eq!(annotated[1].related.as_deref(), Some("Ops"));
    assert_eq!(annotated[2].related, None);
    assert_eq!(annotated[2].employee_count, 0);
}

#[test]
fn test_query_filters_case_insensitively() {
    let mut departments = vec![department(1, "Engineering"), department(2, "Operations")];
    departments[1].description = Some("Runs the ENGINE room".to_string());

    let annotated = annotate_departments(departments, &[]);
    let query = DirectoryQuery {
        search: Some("  engine ".to_string()),
        ..Default::default()
    };

    assert_eq!(query.apply(annotated.clone()).len(), 2);

    let query = DirectoryQuery {
        search: Some("ops".to_string()),
        ..Default::default()
    };
    assert!(query.apply(annotated).is_empty());
}

#[test]
fn test_query_filters_on_related_name() {
    let departments = vec![department(1, "Radiology")];
    let designations = vec![designation(5, "Technician", Some(1)), designation(6, "Clerk", None)];

    let annotated = annotate_designations(designations, &departments, &[]);
    let query = DirectoryQuery {
        search: Some("radio".to_string()),
        ..Default::default()
    };

    let result = query.apply(annotated);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].entity.title, "Technician");
}

#[test]
fn test_query_sorts_by_name_and_count() {
    let departments = vec![department(1, "beta"), department(2, "Alpha"), department(3, "Gamma")];
    let employees = vec![
        employee(1, Some(department(3, "Gamma")), None),
        employee(2, Some(department(3, "Gamma")), None),
        employee(3, Some(department(1, "beta")), None),
    ];
    let annotated = annotate_departments(departments, &employees);

    let by_name = DirectoryQuery::default().apply(annotated.clone());
    assert_eq!(
        by_name.iter().map(|a| a.entity.id).collect::<Vec<_>>(),
        vec![2, 1, 3]
    );

    let by_count_desc = DirectoryQuery {
        sort_by: SortKey::Count,
        direction: Direction::Desc,
        ..Default::default()
    }
    .apply(annotated);
    assert_eq!(
        by_count_desc.iter().map(|a| a.entity.id).collect::<Vec<_>>(),
        vec![3, 1, 2]
    );
}

#[test]
fn test_count_sort_is_stable() {
    let departments = vec![department(1, "C"), department(2, "A"), department(3, "B")];
    let annotated = annotate_departments(departments, &[]);

    let sorted = DirectoryQuery {
        sort_by: SortKey::Count,
        direction: Direction::Desc,
        ..Default::default()
    }
    .apply(annotated);

    assert_eq!(
        sorted.iter().map(|a| a.entity.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_sort_key_from_str() {
    assert_eq!("Count".parse::<SortKey>().unwrap(), SortKey::Count);
    assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
    assert!("size".parse::<SortKey>().is_err());
    assert_eq!("DESC".parse::<Direction>().unwrap(), Direction::Desc);
    assert!("down".parse::<Direction>().is_err());
}
