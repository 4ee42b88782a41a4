/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::{ComponentDefinition, SalaryComponent};

pub async fn list(config: &RequestConfig) -> ConnectorResult<Vec<SalaryComponent>> {
    let endpoint = "salary-components/";
    let res = get_client(config, endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_list(res, endpoint).await
}

pub async fn get(config: &RequestConfig, id: i64) -> ConnectorResult<SalaryComponent> {
    let endpoint = format!("salary-components/{}/", id);
    let res = get_client(config, &endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn post(
    config: &RequestConfig,
    definition: &ComponentDefinition,
) -> ConnectorResult<SalaryComponent> {
    let endpoint = "salary-components/";
    let res = get_client(config, endpoint, RequestType::POST, true)?
        .json(definition)
        .send()
        .await?;

    parse_response(res, endpoint).await
}

pub async fn put(
    config: &RequestConfig,
    id: i64,
    definition: &ComponentDefinition,
) -> ConnectorResult<SalaryComponent> {
    let endpoint = format!("salary-components/{}/", id);
    let res = get_client(config, &endpoint, RequestType::PUT, true)?
        .json(definition)
        .send()
        .await?;

    parse_response(res, &endpoint).await
}

pub async fn delete(config: &RequestConfig, id: i64) -> ConnectorResult<()> {
    let endpoint = format!("salary-components/{}/", id);
    let res = get_client(config, &endpoint, RequestType::DELETE, true)?
        .send()
        .await?;

    expect_empty(res, &endpoint).await
}
