/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};

use super::Department;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Designation {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw foreign key, present on some backend versions.
    #[serde(default)]
    pub department: Option<i64>,
    #[serde(default)]
    pub department_detail: Option<Department>,
}

impl Designation {
    pub fn department_id(&self) -> Option<i64> {
        self.department
            .or_else(|| self.department_detail.as_ref().map(|d| d.id))
    }
}

/// Body for `POST`/`PATCH designations/`. The backend expects the
/// department under `department_id` on write.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DesignationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub department_id: Option<i64>,
}
