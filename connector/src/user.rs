/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use async_trait::async_trait;
use entity::UserProfile;
use hr_core::roles::ProfileSource;

pub async fn get_me(config: &RequestConfig) -> ConnectorResult<UserProfile> {
    let endpoint = "users/me/";
    let res = get_client(config, endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res, endpoint).await
}

#[async_trait]
impl ProfileSource for RequestConfig {
    async fn fetch_profile(&self) -> anyhow::Result<UserProfile> {
        Ok(get_me(self).await?)
    }
}
