/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::config::*;
use anyhow::{Context, Result, anyhow, bail};
use connector::RequestConfig;
use hr_core::InputError;
use rpassword::read_password;
use std::collections::HashMap;
use std::io::{self, Write};
use std::process::Command;
use std::fs;

pub type InputFields = Vec<(String, Option<String>)>;

pub fn fields<const N: usize>(values: [(&str, Option<String>); N]) -> InputFields {
    values
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Collects form values, opening `$EDITOR` on a `key: value` template unless
/// `skip` is set. Unset fields are left out of the result; a field blanked
/// in the editor comes back as an empty string so it can be cleared.
pub fn handle_input(values: InputFields, skip: bool) -> Result<HashMap<String, String>> {
    if values.is_empty() {
        bail!("No input fields");
    }

    if skip {
        return Ok(values
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect());
    }

    let input_fields: String = values
        .iter()
        .map(|(k, v)| format!("{}: {}\n", k, v.as_deref().unwrap_or_default()))
        .collect();

    let path = std::env::temp_dir().join(format!("HRCTL-FORM-{}", std::process::id()));
    fs::write(&path, input_fields).context("Failed to write input form")?;

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to open editor {}", editor))?;

    let contents = fs::read_to_string(&path).context("Failed to read input form")?;
    fs::remove_file(&path).context("Failed to remove input form")?;

    if !status.success() {
        bail!("Editor {} exited with {}", editor, status);
    }

    let keys = values.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    parse_form(&contents, &keys)
}

fn parse_form(contents: &str, keys: &[&str]) -> Result<HashMap<String, String>> {
    let mut result = HashMap::new();

    for line in contents.lines().filter(|line| !line.trim().is_empty()) {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid input line: {}", line))?;
        let (key, value) = (key.trim(), value.trim());

        if !keys.contains(&key) {
            bail!("Invalid input field: {}", key);
        }

        result.insert(key.to_string(), value.to_string());
    }

    Ok(result)
}

fn non_empty<'a>(input: &'a HashMap<String, String>, key: &str) -> Option<&'a String> {
    input.get(key).filter(|value| !value.trim().is_empty())
}

pub fn required(input: &HashMap<String, String>, key: &str) -> Result<String, InputError> {
    non_empty(input, key)
        .cloned()
        .ok_or_else(|| InputError::missing(key))
}

/// The value of `key` unless it is missing or blank.
pub fn filled(input: &HashMap<String, String>, key: &str) -> Option<String> {
    non_empty(input, key).cloned()
}

/// Parses an optional form value with `parse`. Blank counts as unset.
pub fn optional<T, E>(
    input: &HashMap<String, String>,
    key: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<Option<T>, E> {
    non_empty(input, key).map(|value| parse(value)).transpose()
}

pub fn ask_for_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let inp = read_password().context("Failed to read password")?;

    if inp.is_empty() {
        bail!("Password cannot be empty.");
    }

    Ok(inp)
}

pub fn ask_for_input(prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .with_context(|| format!("Failed to read {}.", prompt))?;
    let inp = inp.trim().to_string();

    if inp.is_empty() {
        bail!("{} cannot be empty.", prompt);
    }

    Ok(inp)
}

pub fn get_request_config(config: Config) -> Result<RequestConfig> {
    let server_url = config
        .get(&ConfigKey::Server)
        .cloned()
        .flatten()
        .ok_or_else(|| anyhow!("Server URL not set. Use `hrctl config server <url>` to set it."))?;

    Ok(RequestConfig::new(server_url, load_session()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_keeps_blanked_fields() {
        let input = parse_form(
            "Name: Finance\nDescription: \n",
            &["Name", "Description", "Department"],
        )
        .unwrap();

        assert_eq!(input.get("Name").map(String::as_str), Some("Finance"));
        assert_eq!(input.get("Description").map(String::as_str), Some(""));
        assert!(!input.contains_key("Department"));
    }

    #[test]
    fn test_parse_form_keeps_colons_in_value() {
        let input = parse_form("File: C:/policies/leave.pdf\n", &["File"]).unwrap();
        assert_eq!(input.get("File").map(String::as_str), Some("C:/policies/leave.pdf"));
    }

    #[test]
    fn test_parse_form_rejects_unknown_field() {
        assert!(parse_form("Salary: 100\n", &["Name"]).is_err());
    }

    #[test]
    fn test_skip_editor_keeps_given_values() {
        let input = handle_input(
            fields([("Name", Some("Finance".to_string())), ("Description", None)]),
            true,
        )
        .unwrap();

        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_required_and_optional() {
        let input = HashMap::from([("Month".to_string(), "3".to_string())]);

        assert_eq!(required(&input, "Month").unwrap(), "3");
        assert_eq!(required(&input, "Year"), Err(InputError::missing("Year")));
        assert_eq!(
            optional(&input, "Month", hr_core::input::parse_month).unwrap(),
            Some(3)
        );
        assert_eq!(optional(&input, "Year", hr_core::input::parse_year).unwrap(), None);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let input = HashMap::from([
            ("Title".to_string(), "  ".to_string()),
            ("Department".to_string(), String::new()),
        ]);

        assert_eq!(required(&input, "Title"), Err(InputError::missing("Title")));
        assert_eq!(filled(&input, "Title"), None);
        assert_eq!(
            optional(&input, "Department", |raw| raw.parse::<i64>()).unwrap(),
            None
        );
    }
}
