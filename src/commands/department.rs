/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::guard::*;
use crate::input::*;
use clap::{Subcommand, arg};
use connector::{departments, employees};
use entity::DepartmentRequest;
use hr_core::directory::{DirectoryQuery, Direction, SortKey, annotate_departments};

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
        name: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
    },
    Edit {
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
    },
    Delete {
        id: i64,
    },
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List {
            search,
            sort_by,
            direction,
        } => {
            let config = require_session().await;

            let (department_list, employee_list) = interruptible(async {
                let employee_filter = Default::default();
                tokio::join!(
                    departments::list(&config),
                    employees::list(&config, &employee_filter),
                )
            })
            .await;

            let annotated = annotate_departments(
                or_empty("departments", department_list),
                &or_empty("employees", employee_list),
            );

            let query = DirectoryQuery {
                search,
                sort_by,
                direction,
            };

            let annotated = query.apply(annotated);

            if annotated.is_empty() {
                println!("No departments found.");
                return;
            }

            println!("{:<6} {:<28} {:>9}  {:<8}  Description", "ID", "Name", "Employees", "Status");

            for row in annotated {
                println!(
                    "{:<6} {:<28} {:>9}  {:<8}  {}",
                    row.entity.id,
                    row.entity.name,
                    row.employee_count,
                    row.status().to_string(),
                    row.entity.description.as_deref().unwrap_or_default()
                );
            }
        }

        Commands::Create { name, description } => {
            let config = require_session().await;
            let skip = name.is_some();
            let input = or_exit(handle_input(
                fields([("Name", name), ("Description", description)]),
                skip,
            ));

            let req = DepartmentRequest {
                name: Some(or_exit(required(&input, "Name"))),
                description: input.get("Description").cloned(),
            };

            let department = or_exit(interruptible(departments::post(&config, &req)).await);
            println!("Department {} created with ID {}.", department.name, department.id);
        }

        Commands::Edit {
            id,
            name,
            description,
        } => {
            let config = require_session().await;
            let skip = name.is_some() || description.is_some();

            let input = if skip {
                or_exit(handle_input(
                    fields([("Name", name), ("Description", description)]),
                    true,
                ))
            } else {
                let current = or_exit(interruptible(departments::get(&config, id)).await);
                or_exit(handle_input(
                    fields([
                        ("Name", Some(current.name)),
                        ("Description", current.description),
                    ]),
                    false,
                ))
            };

            let req = DepartmentRequest {
                name: filled(&input, "Name"),
                description: input.get("Description").cloned(),
            };

            or_exit(interruptible(departments::patch(&config, id, &req)).await);
            println!("Department updated.");
        }

        Commands::Delete { id } => {
            let config = require_session().await;
            or_exit(interruptible(departments::delete(&config, id)).await);
            println!("Department deleted.");
        }
    }
}
