/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Employee counts per department and designation.
//!
//! Counts are derived from the two lists handed in and recomputed on every
//! call; nothing is kept between loads.

use entity::{Department, Designation, Employee};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub trait DirectoryEntity {
    fn id(&self) -> i64;
    fn label(&self) -> &str;
    fn description(&self) -> Option<&str>;
    /// Name of the directly referenced related entity, if any.
    fn related_name(&self) -> Option<&str> {
        None
    }
}

impl DirectoryEntity for Department {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl DirectoryEntity for Designation {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn related_name(&self) -> Option<&str> {
        self.department_detail.as_ref().map(|d| d.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Inactive,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Active => write!(f, "Active"),
            Status::Inactive => write!(f, "Inactive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotated<E> {
    pub entity: E,
    pub employee_count: usize,
    /// Related entity name, either referenced directly or derived from the
    /// entity's employees.
    pub related: Option<String>,
}

impl<E: DirectoryEntity> Annotated<E> {
    pub fn status(&self) -> Status {
        if self.employee_count > 0 {
            Status::Active
        } else {
            Status::Inactive
        }
    }

    fn matches(&self, query: &str) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(query);

        contains(self.entity.label())
            || self.entity.description().is_some_and(contains)
            || self.related.as_deref().is_some_and(contains)
    }
}

pub fn group_counts<F>(employees: &[Employee], key_fn: F) -> HashMap<i64, usize>
where
    F: Fn(&Employee) -> Option<i64>,
{
    let mut counts = HashMap::new();

    for key in employees.iter().filter_map(key_fn) {
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
}

/// Annotates every entity with the number of employees whose key equals
/// its id. Employees pointing at ids not in `entities` are ignored.
pub fn annotate_counts<E, F>(entities: Vec<E>, employees: &[Employee], key_fn: F) -> Vec<Annotated<E>>
where
    E: DirectoryEntity,
    F: Fn(&Employee) -> Option<i64>,
{
    let counts = group_counts(employees, key_fn);

    entities
        .into_iter()
        .map(|entity| {
            let employee_count = counts.get(&entity.id()).copied().unwrap_or(0);
            let related = entity.related_name().map(str::to_string);

            Annotated {
                entity,
                employee_count,
                related,
            }
        })
        .collect()
}

/// Most frequent department among employees holding a designation. Ties
/// go to the department encountered first.
pub fn most_common_department(designation_id: i64, employees: &[Employee]) -> Option<&Department> {
    let mut tally: Vec<(&Department, usize)> = Vec::new();

    for department in employees
        .iter()
        .filter(|e| e.designation_id() == Some(designation_id))
        .filter_map(|e| e.department.as_ref())
    {
        match tally.iter_mut().find(|(d, _)| d.id == department.id) {
            Some((_, count)) => *count += 1,
            None => tally.push((department, 1)),
        }
    }

    tally
        .into_iter()
        .fold(None, |best: Option<(&Department, usize)>, (department, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((department, count)),
        })
        .map(|(department, _)| department)
}

/// Designation annotation: counts plus a related department, taken from
/// the designation itself or else from its employees.
pub fn annotate_designations(
    designations: Vec<Designation>,
    departments: &[Department],
    employees: &[Employee],
) -> Vec<Annotated<Designation>> {
    annotate_counts(designations, employees, Employee::designation_id)
        .into_iter()
        .map(|mut annotated| {
            if annotated.related.is_none() {
                annotated.related = annotated
                    .entity
                    .department_id()
                    .and_then(|id| departments.iter().find(|d| d.id == id))
                    .or_else(|| most_common_department(annotated.entity.id, employees))
                    .map(|d| d.name.clone());
            }

            annotated
        })
        .collect()
}

pub fn annotate_departments(
    departments: Vec<Department>,
    employees: &[Employee],
) -> Vec<Annotated<Department>> {
    annotate_counts(departments, employees, Employee::department_id)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Count,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "count" => Ok(SortKey::Count),
            _ => Err(format!("`{}` is not a sort key, expected name or count", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(format!("`{}` is not a direction, expected asc or desc", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryQuery {
    pub search: Option<String>,
    pub sort_by: SortKey,
    pub direction: Direction,
}

impl DirectoryQuery {
    pub fn apply<E: DirectoryEntity>(&self, list: Vec<Annotated<E>>) -> Vec<Annotated<E>> {
        let query = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let mut list = list
            .into_iter()
            .filter(|a| query.is_empty() || a.matches(&query))
            .collect::<Vec<_>>();

        list.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortKey::Name => compare_labels(a.entity.label(), b.entity.label()),
                SortKey::Count => a.employee_count.cmp(&b.employee_count),
            };

            match self.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });

        list
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
