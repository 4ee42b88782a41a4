/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::guard::*;
use crate::input::*;
use chrono::NaiveDate;
use clap::{Subcommand, arg};
use connector::policies::{self, PolicyFilter};
use entity::{Policy, PolicyForm};
use hr_core::InputError;
use hr_core::input::date_value;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        department: Option<i64>,
        /// Earliest creation date, YYYY-MM-DD
        #[arg(long, value_parser = date_value)]
        from: Option<NaiveDate>,
        /// Latest creation date, YYYY-MM-DD
        #[arg(long, value_parser = date_value)]
        to: Option<NaiveDate>,
    },
    Show {
        id: i64,
    },
    Create {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
        #[arg(short, long)]
        department: Option<i64>,
        /// Policy document to upload
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    Edit {
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
        #[arg(short, long)]
        department: Option<i64>,
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    Delete {
        id: i64,
    },
}

fn read_form(
    title: Option<String>,
    description: Option<String>,
    department: Option<i64>,
    skip: bool,
) -> anyhow::Result<PolicyForm> {
    let input = handle_input(
        fields([
            ("Title", title),
            ("Description", description),
            ("Department", department.map(|id| id.to_string())),
        ]),
        skip,
    )?;

    Ok(PolicyForm {
        title: Some(required(&input, "Title")?),
        description: input.get("Description").cloned(),
        department: optional(&input, "Department", |raw| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| InputError::invalid_number("Department", raw))
        })?,
    })
}

fn department_name(policy: &Policy) -> String {
    policy
        .department_detail
        .as_ref()
        .map(|d| d.name.clone())
        .or_else(|| policy.department.map(|id| format!("#{}", id)))
        .unwrap_or_else(|| "All".to_string())
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List {
            search,
            department,
            from,
            to,
        } => {
            let config = require_session().await;
            let filter = PolicyFilter {
                search,
                department,
                from,
                to,
            };

            let policy_list =
                or_empty("policies", interruptible(policies::list(&config, &filter)).await);

            if policy_list.is_empty() {
                println!("No policies found.");
                return;
            }

            println!("{:<6} {:<32} {:<20} Created", "ID", "Title", "Department");

            for policy in policy_list {
                println!(
                    "{:<6} {:<32} {:<20} {}",
                    policy.id,
                    policy.title,
                    department_name(&policy),
                    policy
                        .created_at
                        .map(|created| created.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "-".to_string())
                );
            }
        }

        Commands::Show { id } => {
            let config = require_session().await;
            let policy = or_exit(interruptible(policies::get(&config, id)).await);

            println!("ID: {}", policy.id);
            println!("Title: {}", policy.title);
            println!("Department: {}", department_name(&policy));
            println!(
                "Description: {}",
                policy.description.as_deref().unwrap_or("-")
            );
            println!("File: {}", policy.file.as_deref().unwrap_or("-"));
        }

        Commands::Create {
            title,
            description,
            department,
            file,
        } => {
            let config = require(admin_or_hr()).await;
            let skip = title.is_some();
            let form = or_exit(read_form(title, description, department, skip));

            let policy =
                or_exit(interruptible(policies::post(&config, &form, file.as_deref())).await);
            println!("Policy {} created with ID {}.", policy.title, policy.id);
        }

        Commands::Edit {
            id,
            title,
            description,
            department,
            file,
        } => {
            let config = require(admin_or_hr()).await;
            let current = or_exit(interruptible(policies::get(&config, id)).await);
            let skip = title.is_some() || description.is_some() || department.is_some() || file.is_some();

            let form = or_exit(read_form(
                title.or(Some(current.title.clone())),
                description.or(current.description.clone()),
                department.or(current.department_id()),
                skip,
            ));

            or_exit(interruptible(policies::put(&config, id, &form, file.as_deref())).await);
            println!("Policy updated.");
        }

        Commands::Delete { id } => {
            let config = require(admin_or_hr()).await;
            or_exit(interruptible(policies::delete(&config, id)).await);
            println!("Policy deleted.");
        }
    }
}
