/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::{Employee, EmployeeForm, EmploymentType};
use serde::Deserialize;
use std::path::Path;
use tracing::instrument;

#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub search: Option<String>,
    pub department: Option<i64>,
    pub designation: Option<i64>,
    pub active: Option<bool>,
    pub employment_type: Option<EmploymentType>,
}

impl EmployeeFilter {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        query_pairs(&[
            ("search", self.search.clone()),
            ("department", self.department.map(|id| id.to_string())),
            ("designation", self.designation.map(|id| id.to_string())),
            ("active", self.active.map(|active| active.to_string())),
            (
                "employment_type",
                self.employment_type.map(|t| t.to_string()),
            ),
        ])
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct EmployeeCount {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
}

#[instrument(skip(config))]
pub async fn list(config: &RequestConfig, filter: &EmployeeFilter) -> ConnectorResult<Vec<Employee>> {
    let endpoint = "employees/";
    let res = get_client(config, endpoint, RequestType::GET, true)?
        .query(&filter.query())
        .send()
        .await?;

    parse_list(res, endpoint).await
}

pub async fn get(config: &RequestConfig, id: i64) -> ConnectorResult<Employee> {
    let endpoint = format!("employees/{}/", id);
    let res = get_client(config, &endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn count(config: &RequestConfig) -> ConnectorResult<EmployeeCount> {
    let endpoint = "employees/count/";
    let res = get_client(config, endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res, endpoint).await
}

#[instrument(skip(config, form))]
pub async fn post(
    config: &RequestConfig,
    form: &EmployeeForm,
    photo: Option<&Path>,
) -> ConnectorResult<Employee> {
    let endpoint = "employees/";
    let body = multipart_form(form.fields()?, "photo", photo).await?;

    let res = get_client(config, endpoint, RequestType::POST, true)?
        .multipart(body)
        .send()
        .await?;

    parse_response(res, endpoint).await
}

#[instrument(skip(config, form))]
pub async fn put(
    config: &RequestConfig,
    id: i64,
    form: &EmployeeForm,
    photo: Option<&Path>,
) -> ConnectorResult<Employee> {
    let endpoint = format!("employees/{}/", id);
    let body = multipart_form(form.fields()?, "photo", photo).await?;

    let res = get_client(config, &endpoint, RequestType::PUT, true)?
        .multipart(body)
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

/// Partial update without a photo. Only the set fields are sent.
pub async fn patch(config: &RequestConfig, id: i64, form: &EmployeeForm) -> ConnectorResult<Employee> {
    let endpoint = format!("employees/{}/", id);
    let body = multipart_form(form.fields()?, "photo", None).await?;

    let res = get_client(config, &endpoint, RequestType::PATCH, true)?
        .multipart(body)
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn delete(config: &RequestConfig, id: i64) -> ConnectorResult<()> {
    let endpoint = format!("employees/{}/", id);
    let res = get_client(config, &endpoint, RequestType::DELETE, true)?
        .send()
        .await?;

    expect_empty(res, &endpoint).await
}
