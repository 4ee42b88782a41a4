/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::guard::*;
use crate::input::*;
use anyhow::{Context, Result};
use clap::{Args, Subcommand, arg};
use connector::employees::{self, EmployeeFilter};
use entity::{Employee, EmployeeForm, EmploymentType, ModulePermissions, PERMISSION_MODULES};
use hr_core::InputError;
use hr_core::input::{parse_date, parse_non_negative};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        department: Option<i64>,
        #[arg(short = 'g', long)]
        designation: Option<i64>,
        #[arg(short, long)]
        active: Option<bool>,
        #[arg(short = 't', long)]
        employment_type: Option<EmploymentType>,
    },
    Show {
        id: i64,
    },
    /// Prints total, active and inactive headcount
    Count,
    Create {
        #[command(flatten)]
        fields: EmployeeArgs,
    },
    Edit {
        id: i64,
        #[command(flatten)]
        fields: EmployeeArgs,
    },
    Activate {
        id: i64,
    },
    Deactivate {
        id: i64,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Default)]
pub struct EmployeeArgs {
    #[arg(long)]
    code: Option<String>,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    department: Option<i64>,
    #[arg(long)]
    designation: Option<i64>,
    #[arg(long)]
    employment_type: Option<EmploymentType>,
    #[arg(long)]
    joining_date: Option<String>,
    #[arg(long)]
    salary: Option<String>,
    /// Profile photo to upload
    #[arg(long)]
    photo: Option<PathBuf>,
    /// Module permissions as JSON, e.g. {"Payroll":{"read":true}}
    #[arg(long, conflicts_with = "grant_all")]
    permissions: Option<String>,
    /// Grants every permission on every module
    #[arg(long)]
    grant_all: bool,
}

impl EmployeeArgs {
    fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.designation.is_none()
            && self.employment_type.is_none()
            && self.joining_date.is_none()
            && self.salary.is_none()
    }

    /// Form fields, falling back to `current` for anything not given.
    fn input_fields(&self, current: Option<&Employee>) -> InputFields {
        let id = |value: Option<i64>| value.map(|id| id.to_string());

        fields([
            (
                "Code",
                self.code.clone().or(current.map(|e| e.emp_code.clone())),
            ),
            (
                "First Name",
                self.first_name.clone().or(current.map(|e| e.first_name.clone())),
            ),
            (
                "Last Name",
                self.last_name.clone().or(current.map(|e| e.last_name.clone())),
            ),
            ("Email", self.email.clone().or(current.map(|e| e.email.clone()))),
            ("Phone", self.phone.clone().or(current.and_then(|e| e.phone.clone()))),
            ("Role", self.role.clone().or(current.and_then(|e| e.role.clone()))),
            (
                "Department",
                id(self.department.or(current.and_then(Employee::department_id))),
            ),
            (
                "Designation",
                id(self.designation.or(current.and_then(Employee::designation_id))),
            ),
            (
                "Employment Type",
                self.employment_type
                    .or(current.map(|e| e.employment_type))
                    .map(|t| t.to_string()),
            ),
            (
                "Joining Date",
                self.joining_date.clone().or(current
                    .and_then(|e| e.joining_date)
                    .map(|d| d.format("%Y-%m-%d").to_string())),
            ),
            (
                "Salary",
                self.salary
                    .clone()
                    .or(current.and_then(|e| e.salary).map(|s| s.to_string())),
            ),
        ])
    }

    fn permissions(&self) -> Result<Option<ModulePermissions>> {
        if self.grant_all {
            return Ok(Some(ModulePermissions::uniform(true)));
        }

        self.permissions
            .as_deref()
            .map(|raw| serde_json::from_str(raw).context("Invalid permissions JSON"))
            .transpose()
    }
}

fn parse_id(field: &'static str) -> impl Fn(&str) -> Result<i64, InputError> {
    move |raw| {
        raw.trim()
            .parse()
            .map_err(|_| InputError::invalid_number(field, raw))
    }
}

fn build_form(input: &HashMap<String, String>, args: &EmployeeArgs) -> Result<EmployeeForm> {
    Ok(EmployeeForm {
        emp_code: Some(required(input, "Code")?),
        first_name: Some(required(input, "First Name")?),
        last_name: input.get("Last Name").cloned(),
        email: Some(required(input, "Email")?),
        phone: input.get("Phone").cloned(),
        role: filled(input, "Role"),
        department_id: optional(input, "Department", parse_id("Department"))?,
        designation_id: optional(input, "Designation", parse_id("Designation"))?,
        employment_type: optional(input, "Employment Type", |raw| raw.parse::<EmploymentType>())
            .map_err(anyhow::Error::msg)?,
        joining_date: optional(input, "Joining Date", parse_date)?,
        salary: optional(input, "Salary", |raw| parse_non_negative("Salary", raw))?,
        permissions: args.permissions()?,
        ..Default::default()
    })
}

fn print_employee(employee: &Employee) {
    let or_dash = |value: Option<&str>| value.unwrap_or("-").to_string();

    println!("ID: {}", employee.id);
    println!("Code: {}", employee.emp_code);
    println!("Name: {}", employee.full_name());
    println!("Email: {}", employee.email);
    println!("Phone: {}", or_dash(employee.phone.as_deref()));
    println!("Role: {}", or_dash(employee.role.as_deref()));
    println!(
        "Department: {}",
        or_dash(employee.department.as_ref().map(|d| d.name.as_str()))
    );
    println!(
        "Designation: {}",
        or_dash(employee.designation.as_ref().map(|d| d.title.as_str()))
    );
    println!("Employment Type: {}", employee.employment_type);
    println!(
        "Joining Date: {}",
        employee
            .joining_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Active: {}", employee.is_active);

    println!("Permissions:");
    println!(
        "  {:<14} {:<5} {:<5} {:<6} {:<6} {:<6} {:<6}",
        "Module", "Read", "Write", "Create", "Delete", "Import", "Export"
    );

    let flag = |set: bool| if set { "x" } else { "-" };

    for module in PERMISSION_MODULES {
        let set = employee.permissions.get(module);
        println!(
            "  {:<14} {:<5} {:<5} {:<6} {:<6} {:<6} {:<6}",
            module,
            flag(set.read),
            flag(set.write),
            flag(set.create),
            flag(set.delete),
            flag(set.import),
            flag(set.export)
        );
    }
}

async fn set_active(id: i64, is_active: bool) {
    let config = require_session().await;
    let form = EmployeeForm {
        is_active: Some(is_active),
        ..Default::default()
    };

    or_exit(interruptible(employees::patch(&config, id, &form)).await);
    println!(
        "Employee {}.",
        if is_active { "activated" } else { "deactivated" }
    );
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List {
            search,
            department,
            designation,
            active,
            employment_type,
        } => {
            let config = require_session().await;
            let filter = EmployeeFilter {
                search,
                department,
                designation,
                active,
                employment_type,
            };

            let employee_list =
                or_empty("employees", interruptible(employees::list(&config, &filter)).await);

            if employee_list.is_empty() {
                println!("No employees found.");
                return;
            }

            println!(
                "{:<6} {:<10} {:<28} {:<20} {:<10} Active",
                "ID", "Code", "Name", "Department", "Type"
            );

            for employee in employee_list {
                println!(
                    "{:<6} {:<10} {:<28} {:<20} {:<10} {}",
                    employee.id,
                    employee.emp_code,
                    employee.full_name(),
                    employee
                        .department
                        .as_ref()
                        .map(|d| d.name.as_str())
                        .unwrap_or("-"),
                    employee.employment_type.to_string(),
                    employee.is_active
                );
            }
        }

        Commands::Show { id } => {
            let config = require_session().await;
            let employee = or_exit(interruptible(employees::get(&config, id)).await);
            print_employee(&employee);
        }

        Commands::Count => {
            let config = require_session().await;
            let count = or_exit(interruptible(employees::count(&config)).await);

            println!("Total: {}", count.total);
            println!("Active: {}", count.active);
            println!("Inactive: {}", count.inactive);
        }

        Commands::Create { fields } => {
            let config = require_session().await;
            let skip = fields.code.is_some() && fields.first_name.is_some() && fields.email.is_some();

            let input = or_exit(handle_input(fields.input_fields(None), skip));
            let form = or_exit(build_form(&input, &fields));

            let employee = or_exit(
                interruptible(employees::post(&config, &form, fields.photo.as_deref())).await,
            );
            println!(
                "Employee {} created with ID {}.",
                employee.full_name(),
                employee.id
            );
        }

        Commands::Edit { id, fields } => {
            let config = require_session().await;
            let current = or_exit(interruptible(employees::get(&config, id)).await);

            let skip = !fields.is_empty() || fields.photo.is_some() || fields.grant_all
                || fields.permissions.is_some();
            let input = or_exit(handle_input(fields.input_fields(Some(&current)), skip));
            let form = or_exit(build_form(&input, &fields));

            or_exit(
                interruptible(employees::put(&config, id, &form, fields.photo.as_deref())).await,
            );
            println!("Employee updated.");
        }

        Commands::Activate { id } => set_active(id, true).await,
        Commands::Deactivate { id } => set_active(id, false).await,

        Commands::Delete { id } => {
            let config = require_session().await;
            or_exit(interruptible(employees::delete(&config, id)).await);
            println!("Employee deleted.");
        }
    }
}
