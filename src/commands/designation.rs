/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::guard::*;
use crate::input::*;
use clap::{Subcommand, arg};
use connector::{departments, designations, employees};
use entity::DesignationRequest;
use hr_core::InputError;
use hr_core::directory::{DirectoryQuery, Direction, SortKey, annotate_designations};

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long, default_value = "name")]
        sort_by: SortKey,
        #[arg(long, default_value = "asc")]
        direction: Direction,
    },
    Create {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
        #[arg(short, long)]
        department: Option<i64>,
    },
    Edit {
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
        #[arg(short, long)]
        department: Option<i64>,
    },
    Delete {
        id: i64,
    },
}

fn parse_department(raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::invalid_number("Department", raw))
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List {
            search,
            sort_by,
            direction,
        } => {
            let config = require_session().await;

            let (designation_list, department_list, employee_list) = interruptible(async {
                let employee_filter = Default::default();
                tokio::join!(
                    designations::list(&config),
                    departments::list(&config),
                    employees::list(&config, &employee_filter),
                )
            })
            .await;

            let annotated = annotate_designations(
                or_empty("designations", designation_list),
                &or_empty("departments", department_list),
                &or_empty("employees", employee_list),
            );

            let query = DirectoryQuery {
                search,
                sort_by,
                direction,
            };

            let annotated = query.apply(annotated);

            if annotated.is_empty() {
                println!("No designations found.");
                return;
            }

            println!(
                "{:<6} {:<28} {:<20} {:>9}  Status",
                "ID", "Title", "Department", "Employees"
            );

            for row in annotated {
                println!(
                    "{:<6} {:<28} {:<20} {:>9}  {}",
                    row.entity.id,
                    row.entity.title,
                    row.related.as_deref().unwrap_or("-"),
                    row.employee_count,
                    row.status()
                );
            }
        }

        Commands::Create {
            title,
            description,
            department,
        } => {
            let config = require_session().await;
            let skip = title.is_some();
            let input = or_exit(handle_input(
                fields([
                    ("Title", title),
                    ("Description", description),
                    ("Department", department.map(|id| id.to_string())),
                ]),
                skip,
            ));

            let req = DesignationRequest {
                title: Some(or_exit(required(&input, "Title"))),
                description: input.get("Description").cloned(),
                department_id: or_exit(optional(&input, "Department", parse_department)),
            };

            let designation = or_exit(interruptible(designations::post(&config, &req)).await);
            println!(
                "Designation {} created with ID {}.",
                designation.title, designation.id
            );
        }

        Commands::Edit {
            id,
            title,
            description,
            department,
        } => {
            let config = require_session().await;
            let current = or_exit(interruptible(designations::get(&config, id)).await);
            let skip = title.is_some() || description.is_some() || department.is_some();

            let input = or_exit(handle_input(
                fields([
                    ("Title", title.or(Some(current.title.clone()))),
                    ("Description", description.or(current.description.clone())),
                    (
                        "Department",
                        department
                            .or(current.department_id())
                            .map(|id| id.to_string()),
                    ),
                ]),
                skip,
            ));

            // Department is always sent; leaving it out would unassign it.
            let req = DesignationRequest {
                title: Some(or_exit(required(&input, "Title"))),
                description: input.get("Description").cloned(),
                department_id: or_exit(optional(&input, "Department", parse_department)),
            };

            or_exit(interruptible(designations::patch(&config, id, &req)).await);
            println!("Designation updated.");
        }

        Commands::Delete { id } => {
            let config = require_session().await;
            or_exit(interruptible(designations::delete(&config, id)).await);
            println!("Designation deleted.");
        }
    }
}
