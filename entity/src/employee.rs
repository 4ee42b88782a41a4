/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{Department, Designation};

pub const PERMISSION_MODULES: [&str; 11] = [
    "Holidays",
    "Leaves",
    "Clients",
    "Projects",
    "Tasks",
    "Chats",
    "Assets",
    "TimingSheets",
    "Payroll",
    "Attendance",
    "Reports",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    Contract,
    Intern,
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            EmploymentType::FullTime => "Full-Time",
            EmploymentType::PartTime => "Part-Time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Intern => "Intern",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "fulltime" => Ok(EmploymentType::FullTime),
            "parttime" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            "intern" => Ok(EmploymentType::Intern),
            _ => Err(format!("`{}` is not an employment type", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PermissionSet {
    pub read: bool,
    pub write: bool,
    pub create: bool,
    pub delete: bool,
    pub import: bool,
    pub export: bool,
}

impl PermissionSet {
    pub fn uniform(value: bool) -> Self {
        PermissionSet {
            read: value,
            write: value,
            create: value,
            delete: value,
            import: value,
            export: value,
        }
    }

    pub fn any(&self) -> bool {
        self.read || self.write || self.create || self.delete || self.import || self.export
    }
}

/// Per-module permission flags attached to an employee.
///
/// Older records carry the blob as a JSON-encoded string, newer ones as an
/// object; both decode to the same map.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ModulePermissions(pub BTreeMap<String, PermissionSet>);

impl ModulePermissions {
    pub fn uniform(value: bool) -> Self {
        ModulePermissions(
            PERMISSION_MODULES
                .iter()
                .map(|module| (module.to_string(), PermissionSet::uniform(value)))
                .collect(),
        )
    }

    pub fn get(&self, module: &str) -> PermissionSet {
        self.0.get(module).copied().unwrap_or_default()
    }

    pub fn all_granted(&self) -> bool {
        PERMISSION_MODULES.iter().all(|module| self.get(module).any())
    }
}

impl<'de> Deserialize<'de> for ModulePermissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Encoded(String),
            Map(BTreeMap<String, PermissionSet>),
        }

        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(ModulePermissions::default()),
            Some(Repr::Map(map)) => Ok(ModulePermissions(map)),
            Some(Repr::Encoded(s)) if s.trim().is_empty() => Ok(ModulePermissions::default()),
            Some(Repr::Encoded(s)) => serde_json::from_str(&s)
                .map(ModulePermissions)
                .map_err(D::Error::custom),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub emp_code: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub alternate_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub designation: Option<Designation>,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub reporting_to: Option<i64>,
    #[serde(default)]
    pub salary: Option<Decimal>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub permissions: ModulePermissions,
}

fn default_active() -> bool {
    true
}

impl Employee {
    pub fn department_id(&self) -> Option<i64> {
        self.department.as_ref().map(|d| d.id)
    }

    pub fn designation_id(&self) -> Option<i64> {
        self.designation.as_ref().map(|d| d.id)
    }

    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Fields submitted on employee create/update. Sent as multipart form
/// data so a photo can travel alongside.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub emp_code: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    pub department_id: Option<i64>,
    pub designation_id: Option<i64>,
    pub joining_date: Option<NaiveDate>,
    pub employment_type: Option<EmploymentType>,
    pub reporting_to: Option<i64>,
    pub salary: Option<Decimal>,
    pub is_active: Option<bool>,
    pub permissions: Option<ModulePermissions>,
}

impl EmployeeForm {
    /// Text fields in submission order. Unset fields are left out so a
    /// partial update does not clear them.
    pub fn fields(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        let mut fields = Vec::new();

        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                fields.push((key, value));
            }
        };

        push("emp_code", self.emp_code.clone());
        push("first_name", self.first_name.clone());
        push("middle_name", self.middle_name.clone());
        push("last_name", self.last_name.clone());
        push("email", self.email.clone());
        push("phone", self.phone.clone());
        push("address", self.address.clone());
        push("role", self.role.clone());
        push("department_id", self.department_id.map(|id| id.to_string()));
        push("designation_id", self.designation_id.map(|id| id.to_string()));
        push("joining_date", self.joining_date.map(|d| d.format("%Y-%m-%d").to_string()));
        push("employment_type", self.employment_type.map(|t| t.to_string()));
        push("reporting_to", self.reporting_to.map(|id| id.to_string()));
        push("salary", self.salary.map(|s| s.to_string()));
        push("is_active", self.is_active.map(|a| a.to_string()));

        if let Some(permissions) = &self.permissions {
            fields.push(("permissions", serde_json::to_string(permissions)?));
        }

        Ok(fields)
    }
}
