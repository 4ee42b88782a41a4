/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::guard::*;
use crate::input::*;
use clap::{Subcommand, arg};
use connector::salary_components;
use entity::{ComponentDefinition, ComponentKind, ComponentValue};
use hr_core::input::parse_component_value;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List,
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        kind: Option<ComponentKind>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        percentage: Option<String>,
    },
    Edit {
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        kind: Option<ComponentKind>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        percentage: Option<String>,
    },
    Delete {
        id: i64,
    },
}

fn definition_fields(
    name: Option<String>,
    kind: Option<ComponentKind>,
    amount: Option<String>,
    percentage: Option<String>,
) -> InputFields {
    fields([
        ("Name", name),
        ("Type", kind.map(|kind| kind.to_string())),
        ("Amount", amount),
        ("Percentage", percentage),
    ])
}

fn read_definition(values: InputFields, skip: bool) -> anyhow::Result<ComponentDefinition> {
    let input = handle_input(values, skip)?;

    Ok(ComponentDefinition {
        name: required(&input, "Name")?,
        kind: required(&input, "Type")?
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?,
        value: parse_component_value(
            input.get("Amount").map(String::as_str),
            input.get("Percentage").map(String::as_str),
        )?,
    })
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List => {
            let config = require_session().await;
            let components = or_empty(
                "salary components",
                interruptible(salary_components::list(&config)).await,
            );

            if components.is_empty() {
                println!("No salary components defined.");
                return;
            }

            println!("{:<6} {:<28} {:<10} Value", "ID", "Name", "Type");

            for component in components {
                println!(
                    "{:<6} {:<28} {:<10} {}",
                    component.id,
                    component.name,
                    component.kind.to_string(),
                    component
                        .value
                        .map(|value| value.to_string())
                        .unwrap_or_else(|| "-".to_string())
                );
            }
        }

        Commands::Create {
            name,
            kind,
            amount,
            percentage,
        } => {
            let config = require(admin_or_hr()).await;
            let skip = name.is_some() && kind.is_some();

            let definition = or_exit(read_definition(
                definition_fields(name, kind, amount, percentage),
                skip,
            ));

            let component =
                or_exit(interruptible(salary_components::post(&config, &definition)).await);
            println!(
                "Salary component {} created with ID {}.",
                component.name, component.id
            );
        }

        Commands::Edit {
            id,
            name,
            kind,
            amount,
            percentage,
        } => {
            let config = require(admin_or_hr()).await;
            let current = or_exit(interruptible(salary_components::get(&config, id)).await);
            let skip = name.is_some() || kind.is_some() || amount.is_some() || percentage.is_some();

            // A new amount replaces a stored percentage and vice versa.
            let (amount, percentage) = match (amount, percentage, current.value) {
                (None, None, Some(ComponentValue::Fixed(value))) => (Some(value.to_string()), None),
                (None, None, Some(ComponentValue::Percentage(value))) => {
                    (None, Some(value.to_string()))
                }
                (amount, percentage, _) => (amount, percentage),
            };

            let definition = or_exit(read_definition(
                definition_fields(
                    name.or(Some(current.name)),
                    kind.or(Some(current.kind)),
                    amount,
                    percentage,
                ),
                skip,
            ));

            or_exit(interruptible(salary_components::put(&config, id, &definition)).await);
            println!("Salary component updated.");
        }

        Commands::Delete { id } => {
            let config = require(admin_or_hr()).await;
            or_exit(interruptible(salary_components::delete(&config, id)).await);
            println!("Salary component deleted.");
        }
    }
}
