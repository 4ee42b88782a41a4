/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::{PayrollRecord, PayrollRequest};
use tracing::instrument;

#[derive(Debug, Clone, Copy, Default)]
pub struct PayrollFilter {
    pub employee: Option<i64>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl PayrollFilter {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        query_pairs(&[
            ("employee", self.employee.map(|id| id.to_string())),
            ("month", self.month.map(|month| month.to_string())),
            ("year", self.year.map(|year| year.to_string())),
        ])
    }
}

#[instrument(skip(config))]
pub async fn list(config: &RequestConfig, filter: &PayrollFilter) -> ConnectorResult<Vec<PayrollRecord>> {
    let endpoint = "payroll/";
    let res = get_client(config, endpoint, RequestType::GET, true)?
        .query(&filter.query())
        .send()
        .await?;

    parse_list(res, endpoint).await
}

pub async fn get(config: &RequestConfig, id: i64) -> ConnectorResult<PayrollRecord> {
    let endpoint = format!("payroll/{}/", id);
    let res = get_client(config, &endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

/// Returns the existing record for the employee and period, if any.
pub async fn find_existing(
    config: &RequestConfig,
    employee: i64,
    month: u32,
    year: i32,
) -> ConnectorResult<Option<PayrollRecord>> {
    let filter = PayrollFilter {
        employee: Some(employee),
        month: Some(month),
        year: Some(year),
    };

    Ok(list(config, &filter).await?.into_iter().find(|record| {
        record.employee == employee && record.month == month && record.year == year
    }))
}

#[instrument(skip(config, req), fields(employee = req.employee, month = req.month, year = req.year))]
pub async fn post(config: &RequestConfig, req: &PayrollRequest) -> ConnectorResult<PayrollRecord> {
    let endpoint = "payroll/";
    let res = get_client(config, endpoint, RequestType::POST, true)?
        .json(req)
        .send()
        .await?;

    parse_response(res, endpoint).await
}

pub async fn put(config: &RequestConfig, id: i64, req: &PayrollRequest) -> ConnectorResult<PayrollRecord> {
    let endpoint = format!("payroll/{}/", id);
    let res = get_client(config, &endpoint, RequestType::PUT, true)?
        .json(req)
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

/// Asks the server to recompute the stored totals from the current component definitions.
pub async fn recalculate(config: &RequestConfig, id: i64) -> ConnectorResult<PayrollRecord> {
    let endpoint = format!("payroll/{}/recalculate/", id);
    let res = get_client(config, &endpoint, RequestType::POST, true)?
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn delete(config: &RequestConfig, id: i64) -> ConnectorResult<()> {
    let endpoint = format!("payroll/{}/", id);
    let res = get_client(config, &endpoint, RequestType::DELETE, true)?
        .send()
        .await?;

    expect_empty(res, &endpoint).await
}
