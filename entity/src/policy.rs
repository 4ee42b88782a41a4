/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Department;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Policy {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<i64>,
    #[serde(default)]
    pub department_detail: Option<Department>,
    /// URL of the uploaded policy document.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Policy {
    pub fn department_id(&self) -> Option<i64> {
        self.department
            .or_else(|| self.department_detail.as_ref().map(|d| d.id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<i64>,
}

impl PolicyForm {
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        if let Some(title) = &self.title {
            fields.push(("title", title.clone()));
        }

        if let Some(description) = &self.description {
            fields.push(("description", description.clone()));
        }

        if let Some(department) = self.department {
            fields.push(("department", department.to_string()));
        }

        fields
    }
}
