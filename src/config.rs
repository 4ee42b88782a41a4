/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, anyhow};
use hr_core::Session;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::{fmt, fs};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub type Config = HashMap<ConfigKey, Option<String>>;

#[derive(Clone, Copy, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    Server,
    AuthToken,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| key.to_string() == s.to_lowercase())
            .ok_or_else(|| {
                let valid = ConfigKey::iter()
                    .map(|key| key.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");

                format!("Invalid key: {}. Valid keys are: {}", s, valid)
            })
    }
}

fn get_config_file() -> Result<PathBuf> {
    let mut config_dir =
        dirs::config_dir().ok_or_else(|| anyhow!("Could not find configuration directory"))?;
    config_dir.push("hrctl");
    config_dir.push("config.toml");
    Ok(config_dir)
}

pub fn load_config() -> Result<Config> {
    let config_file = get_config_file()?;

    if !config_file.exists() {
        return Ok(ConfigKey::iter().map(|key| (key, None)).collect());
    }

    let contents = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    parse_config(&contents)
        .with_context(|| format!("Failed to parse {}", config_file.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(contents)?;

    for key in ConfigKey::iter() {
        config.entry(key).or_insert(None);
    }

    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let config_file = get_config_file()?;

    if let Some(config_dir) = config_file.parent() {
        fs::create_dir_all(config_dir).context("Failed to create configuration directory")?;
    }

    let set_values = config
        .iter()
        .filter_map(|(key, value)| value.clone().map(|value| (*key, value)))
        .collect::<HashMap<_, _>>();

    let contents = toml::to_string_pretty(&set_values).context("Failed to serialize configuration")?;
    fs::write(&config_file, contents)
        .with_context(|| format!("Failed to write {}", config_file.display()))
}

/// Sets `key` when `value` is given, otherwise returns its current value.
pub fn set_get_value(key: ConfigKey, value: Option<String>, quiet: bool) -> Result<Option<String>> {
    let mut config = load_config()?;

    if let Some(value) = value {
        config.insert(key, Some(value.clone()));
        save_config(&config)?;

        if !quiet {
            println!("{} set to \"{}\"", key, value);
        }

        return Ok(Some(value));
    }

    let value = config.get(&key).cloned().flatten();

    if !quiet {
        match &value {
            Some(_) if key == ConfigKey::AuthToken => println!("[set]"),
            Some(value) => println!("{}", value),
            None => println!("[unset]"),
        }
    }

    Ok(value)
}

pub fn set_get_value_from_string(
    key: String,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>> {
    let key = key.parse::<ConfigKey>().map_err(|e| anyhow!(e))?;
    set_get_value(key, value, quiet)
}

pub fn load_session() -> Result<Option<Session>> {
    Ok(set_get_value(ConfigKey::AuthToken, None, true)?.and_then(Session::new))
}

pub fn store_session(session: &Session) -> Result<()> {
    set_get_value(ConfigKey::AuthToken, Some(session.token().to_string()), true)?;
    Ok(())
}

pub fn clear_session() -> Result<()> {
    let mut config = load_config()?;
    config.insert(ConfigKey::AuthToken, None);
    save_config(&config)
}
