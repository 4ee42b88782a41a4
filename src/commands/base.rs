/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::guard::*;
use super::*;
use crate::config::*;
use crate::input::*;
use chrono::DateTime;
use clap::{CommandFactory, Parser, Subcommand, arg};
use clap_complete::{Shell, generate};
use connector::{auth, user};
use hr_core::input::parse_role_list;
use hr_core::roles::RoleGuard;
use std::io;
use std::process::exit;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "hrctl", display_name = "hrctl", bin_name = "hrctl", author = "Wavelens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
    #[arg(long, global = true, env = "HRCTL_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    Logout,
    Whoami,
    /// Checks whether the current session passes a comma-separated role list
    Access {
        roles: String,
    },
    Employee {
        #[command(subcommand)]
        cmd: employee::Commands,
    },
    Department {
        #[command(subcommand)]
        cmd: department::Commands,
    },
    Designation {
        #[command(subcommand)]
        cmd: designation::Commands,
    },
    Component {
        #[command(subcommand)]
        cmd: component::Commands,
    },
    Payroll {
        #[command(subcommand)]
        cmd: payroll::Commands,
    },
    Policy {
        #[command(subcommand)]
        cmd: policy::Commands,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

pub async fn run_cli() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    init_logging(&cli.log_level);

    if let Some(cmd) = cli.cmd {
        match cmd {
            MainCommands::Config { key, value } => {
                or_exit(set_get_value_from_string(key, value, false));
            }

            MainCommands::Status => {
                let server_url = or_exit(set_get_value(ConfigKey::Server, None, true));

                if server_url.is_none() {
                    eprintln!("Server URL is not set. Use `hrctl config server <url>` to set it.");
                    exit(1);
                }

                let config = require_session().await;
                let profile = or_exit(interruptible(user::get_me(&config)).await);

                println!("Server Online.");

                if let Some(username) = profile.username {
                    println!("Logged in as {}.", username);
                }
            }

            MainCommands::Login { username } => {
                let server_url = or_exit(set_get_value(ConfigKey::Server, None, true));

                if server_url.is_none() {
                    let server_url = or_exit(ask_for_input("Server URL"));
                    or_exit(set_get_value(ConfigKey::Server, Some(server_url), true));
                };

                let username = match username {
                    Some(username) => username,
                    None => or_exit(ask_for_input("Username")),
                };

                let password = or_exit(ask_for_password());
                let config = or_exit(load_config().and_then(get_request_config));

                let session =
                    or_exit(interruptible(auth::login(&config, username, password)).await);
                or_exit(store_session(&session));

                match session.decode_claims().and_then(|claims| claims.role) {
                    Some(role) => println!("Logged in as {}.", role),
                    None => println!("Logged in."),
                }
            }

            MainCommands::Logout => {
                or_exit(clear_session());
                println!("Logged out.");
            }

            MainCommands::Whoami => {
                let config = require_session().await;
                let claims = config.session.as_ref().and_then(|s| s.decode_claims());
                let profile = or_exit(interruptible(user::get_me(&config)).await);

                let unset = || "[unset]".to_string();

                println!("User ID: {}", profile.id.map(|id| id.to_string()).unwrap_or_else(unset));
                println!("Username: {}", profile.username.clone().unwrap_or_else(unset));
                println!("Email: {}", profile.email.clone().unwrap_or_else(unset));
                println!(
                    "Role: {}",
                    profile
                        .role
                        .clone()
                        .or(profile.user_type.clone())
                        .unwrap_or_else(unset)
                );

                if let Some(expires) = claims
                    .and_then(|claims| claims.exp)
                    .and_then(|exp| DateTime::from_timestamp(exp, 0))
                {
                    println!("Token expires: {}", expires);
                }
            }

            MainCommands::Access { roles } => {
                let config = or_exit(load_config().and_then(get_request_config));
                let guard = RoleGuard::new(parse_role_list(&roles));
                let decision =
                    interruptible(guard.evaluate(config.session.as_ref(), &config)).await;

                println!("{}", decision);

                if !decision.is_allowed() {
                    exit(1);
                }
            }

            MainCommands::Employee { cmd } => employee::handle(cmd).await,
            MainCommands::Department { cmd } => department::handle(cmd).await,
            MainCommands::Designation { cmd } => designation::handle(cmd).await,
            MainCommands::Component { cmd } => component::handle(cmd).await,
            MainCommands::Payroll { cmd } => payroll::handle(cmd).await,
            MainCommands::Policy { cmd } => policy::handle(cmd).await,
        }
    } else {
        let _ = Cli::command().print_help();
        exit(1);
    }

    exit(0);
}
