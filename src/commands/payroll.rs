/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::guard::*;
use clap::{Args, Subcommand, arg};
use connector::payroll::PayrollFilter;
use connector::{RequestConfig, employees, payroll, salary_components};
use entity::{Employee, PayrollRecord};
use hr_core::InputError;
use hr_core::input::{month_number, non_negative_amount};
use hr_core::payroll::{PayrollDraft, Payslip, PayslipLine, drift, payslip};
use rust_decimal::Decimal;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long)]
        employee: Option<i64>,
        #[arg(short, long, value_parser = month_number)]
        month: Option<u32>,
        #[arg(short, long)]
        year: Option<i32>,
    },
    Show {
        id: i64,
    },
    /// Computes a payslip without submitting it
    Preview {
        #[command(flatten)]
        draft: DraftArgs,
    },
    Create {
        #[command(flatten)]
        draft: DraftArgs,
    },
    Edit {
        id: i64,
        #[arg(short, long, value_parser = non_negative_amount)]
        basic: Option<Decimal>,
        #[arg(long, value_parser = non_negative_amount)]
        hra: Option<Decimal>,
        /// Replaces the selected components
        #[arg(short, long, value_delimiter = ',')]
        components: Option<Vec<i64>>,
    },
    Delete {
        id: i64,
    },
    /// Recomputes stored totals on the server from the current component definitions
    Recalculate {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct DraftArgs {
    #[arg(short, long)]
    employee: i64,
    #[arg(short, long, value_parser = month_number)]
    month: u32,
    #[arg(short, long)]
    year: i32,
    #[arg(short, long, value_parser = non_negative_amount)]
    basic: Decimal,
    #[arg(long, value_parser = non_negative_amount, default_value = "0")]
    hra: Decimal,
    #[arg(short, long, value_delimiter = ',')]
    components: Vec<i64>,
}

/// Loads the employee and the component registry together, then selects the
/// requested components. Unknown component ids abort the command.
async fn load_draft(config: &RequestConfig, args: &DraftArgs) -> (Employee, PayrollDraft) {
    let (employee, registry) = interruptible(async {
        tokio::join!(
            employees::get(config, args.employee),
            salary_components::list(config),
        )
    })
    .await;

    let employee = or_exit(employee);
    let registry = or_empty("salary components", registry);

    let mut draft = PayrollDraft::new(args.employee, args.month, args.year, args.basic, args.hra);
    exit_on_missing(draft.select_ids(&args.components, &registry));

    (employee, draft)
}

fn exit_on_missing(missing: Vec<i64>) {
    if !missing.is_empty() {
        let ids = missing
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("Unknown salary components: {}", ids);
        exit(1);
    }
}

fn print_line(line: &PayslipLine) {
    let value = line
        .value
        .map(|value| format!(" ({})", value))
        .unwrap_or_default();
    println!("  {:<30} {:>12}", format!("{}{}", line.name, value), line.contribution);
}

fn print_payslip(heading: &str, slip: &Payslip) {
    println!("{}", heading);
    println!("  {:<30} {:>12}", "Basic salary", slip.basic);
    println!("  {:<30} {:>12}", "HRA", slip.hra);

    if !slip.earnings.is_empty() {
        println!("Earnings");
        slip.earnings.iter().for_each(print_line);
    }

    if !slip.deductions.is_empty() {
        println!("Deductions");
        slip.deductions.iter().for_each(print_line);
    }

    println!("  {:<30} {:>12}", "Gross salary", slip.totals.gross);
    println!("  {:<30} {:>12}", "Total deductions", slip.totals.deductions);
    println!("  {:<30} {:>12}", "Net salary", slip.totals.net);
}

fn record_heading(record: &PayrollRecord) -> String {
    format!(
        "Payroll {} for {} ({:02}/{})",
        record.id,
        record
            .employee_name
            .clone()
            .unwrap_or_else(|| format!("employee {}", record.employee)),
        record.month,
        record.year
    )
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::List {
            employee,
            month,
            year,
        } => {
            let config = require_session().await;
            let filter = PayrollFilter {
                employee,
                month,
                year,
            };

            let records = or_empty("payrolls", interruptible(payroll::list(&config, &filter)).await);

            if records.is_empty() {
                println!("No payrolls found.");
                return;
            }

            println!(
                "{:<6} {:<24} {:<8} {:>12} {:>12} {:>12}",
                "ID", "Employee", "Period", "Gross", "Deductions", "Net"
            );

            for record in records {
                println!(
                    "{:<6} {:<24} {:<8} {:>12} {:>12} {:>12}",
                    record.id,
                    record
                        .employee_name
                        .clone()
                        .unwrap_or_else(|| record.employee.to_string()),
                    format!("{:02}/{}", record.month, record.year),
                    record.gross_salary,
                    record.total_deductions,
                    record.net_salary
                );
            }
        }

        Commands::Show { id } => {
            let config = require_session().await;
            let record = or_exit(interruptible(payroll::get(&config, id)).await);

            let slip = payslip(record.basic_salary, record.hra, &record.components_details);
            print_payslip(&record_heading(&record), &slip);

            if let Some(computed) = drift(&record) {
                println!();
                println!(
                    "Stored totals differ from the component snapshot (computed net {}). Run `hrctl payroll recalculate {}` to refresh.",
                    computed.net, record.id
                );
            }
        }

        Commands::Preview { draft } => {
            let config = require_session().await;
            let (employee, draft) = load_draft(&config, &draft).await;
            or_exit(draft.validate());

            print_payslip(
                &format!(
                    "Payslip preview for {} ({:02}/{})",
                    employee.full_name(),
                    draft.month,
                    draft.year
                ),
                &draft.payslip(),
            );
        }

        Commands::Create { draft } => {
            let config = require(admin_or_hr()).await;
            let (employee, draft) = load_draft(&config, &draft).await;
            or_exit(draft.validate());

            let existing = or_exit(
                interruptible(payroll::find_existing(
                    &config,
                    draft.employee,
                    draft.month,
                    draft.year,
                ))
                .await,
            );

            if existing.is_some() {
                let duplicate = InputError::DuplicatePayroll {
                    employee: draft.employee,
                    month: draft.month,
                    year: draft.year,
                };
                eprintln!("{}", duplicate);
                exit(1);
            }

            let req = or_exit(draft.into_request());
            let record = or_exit(interruptible(payroll::post(&config, &req)).await);

            println!(
                "Payroll {} created for {}: net {}.",
                record.id,
                employee.full_name(),
                record.net_salary
            );
        }

        Commands::Edit {
            id,
            basic,
            hra,
            components,
        } => {
            let config = require(admin_or_hr()).await;

            let (record, registry) = interruptible(async {
                tokio::join!(payroll::get(&config, id), salary_components::list(&config))
            })
            .await;

            let record = or_exit(record);
            let registry = or_empty("salary components", registry);

            let ids = components.unwrap_or_else(|| record.components.clone());
            let mut draft = PayrollDraft::new(
                record.employee,
                record.month,
                record.year,
                basic.unwrap_or(record.basic_salary),
                hra.unwrap_or(record.hra),
            );
            exit_on_missing(draft.select_ids(&ids, &registry));

            let req = or_exit(draft.into_request());
            let record = or_exit(interruptible(payroll::put(&config, id, &req)).await);
            println!("Payroll updated: net {}.", record.net_salary);
        }

        Commands::Delete { id } => {
            let config = require(admin_or_hr()).await;
            or_exit(interruptible(payroll::delete(&config, id)).await);
            println!("Payroll deleted.");
        }

        Commands::Recalculate { id } => {
            let config = require(admin_or_hr()).await;
            let record = or_exit(interruptible(payroll::recalculate(&config, id)).await);

            println!(
                "Payroll {} recalculated: gross {}, deductions {}, net {}.",
                record.id, record.gross_salary, record.total_deductions, record.net_salary
            );
        }
    }
}
