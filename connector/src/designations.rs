/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::{Designation, DesignationRequest};

pub async fn list(config: &RequestConfig) -> ConnectorResult<Vec<Designation>> {
    let endpoint = "designations/";
    let res = get_client(config, endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_list(res, endpoint).await
}

pub async fn get(config: &RequestConfig, id: i64) -> ConnectorResult<Designation> {
    let endpoint = format!("designations/{}/", id);
    let res = get_client(config, &endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn post(config: &RequestConfig, req: &DesignationRequest) -> ConnectorResult<Designation> {
    let endpoint = "designations/";
    let res = get_client(config, endpoint, RequestType::POST, true)?
        .json(req)
        .send()
        .await?;

    parse_response(res, endpoint).await
}

pub async fn put(
    config: &RequestConfig,
    id: i64,
    req: &DesignationRequest,
) -> ConnectorResult<Designation> {
    let endpoint = format!("designations/{}/", id);
    let res = get_client(config, &endpoint, RequestType::PUT, true)?
        .json(req)
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn patch(
    config: &RequestConfig,
    id: i64,
    req: &DesignationRequest,
) -> ConnectorResult<Designation> {
    let endpoint = format!("designations/{}/", id);
    let res = get_client(config, &endpoint, RequestType::PATCH, true)?
        .json(req)
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn delete(config: &RequestConfig, id: i64) -> ConnectorResult<()> {
    let endpoint = format!("designations/{}/", id);
    let res = get_client(config, &endpoint, RequestType::DELETE, true)?
        .send()
        .await?;

    expect_empty(res, &endpoint).await
}
