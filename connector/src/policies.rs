/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use chrono::NaiveDate;
use entity::{Policy, PolicyForm};
use std::path::Path;
use tracing::instrument;

#[derive(Debug, Clone, Default)]
pub struct PolicyFilter {
    pub search: Option<String>,
    pub department: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl PolicyFilter {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        query_pairs(&[
            ("search", self.search.clone()),
            ("department", self.department.map(|id| id.to_string())),
            ("from", self.from.map(|date| date.format("%Y-%m-%d").to_string())),
            ("to", self.to.map(|date| date.format("%Y-%m-%d").to_string())),
        ])
    }
}

#[instrument(skip(config))]
pub async fn list(config: &RequestConfig, filter: &PolicyFilter) -> ConnectorResult<Vec<Policy>> {
    let endpoint = "policies/";
    let res = get_client(config, endpoint, RequestType::GET, true)?
        .query(&filter.query())
        .send()
        .await?;

    parse_list(res, endpoint).await
}

pub async fn get(config: &RequestConfig, id: i64) -> ConnectorResult<Policy> {
    let endpoint = format!("policies/{}/", id);
    let res = get_client(config, &endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

#[instrument(skip(config, form))]
pub async fn post(config: &RequestConfig, form: &PolicyForm, file: Option<&Path>) -> ConnectorResult<Policy> {
    let endpoint = "policies/";
    let body = multipart_form(form.fields(), "file", file).await?;

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
    form: &PolicyForm,
    file: Option<&Path>,
) -> ConnectorResult<Policy> {
    let endpoint = format!("policies/{}/", id);
    let body = multipart_form(form.fields(), "file", file).await?;

    let res = get_client(config, &endpoint, RequestType::PUT, true)?
        .multipart(body)
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn delete(config: &RequestConfig, id: i64) -> ConnectorResult<()> {
    let endpoint = format!("policies/{}/", id);
    let res = get_client(config, &endpoint, RequestType::DELETE, true)?
        .send()
        .await?;

    expect_empty(res, &endpoint).await
}
