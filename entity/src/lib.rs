/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod department;
pub mod designation;
pub mod employee;
pub mod lenient;
pub mod payroll;
pub mod policy;
pub mod salary_component;
pub mod user;


use serde::{Deserialize, Serialize};

pub use department::{Department, DepartmentRequest};
pub use designation::{Designation, DesignationRequest};
pub use employee::{
    Employee, EmployeeForm, EmploymentType, ModulePermissions, PERMISSION_MODULES, PermissionSet,
};
pub use payroll::{PayrollRecord, PayrollRequest};
pub use policy::{Policy, PolicyForm};
pub use salary_component::{ComponentDefinition, ComponentKind, ComponentValue, SalaryComponent};
pub use user::{LoginRequest, TokenResponse, UserProfile};

/// List endpoints answer either with a bare array or with a paginated
/// envelope, depending on the backend's pagination settings.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ListBody<T> {
    Plain(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> ListBody<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListBody::Plain(items) => items,
            ListBody::Paged { results } => results,
        }
    }
}
