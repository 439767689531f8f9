// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use super::init_signing_test;
use anyhow::Result;
use http::{Method, Request, StatusCode};
use log::{debug, warn};
use reqwest::Client;
use std::str::FromStr;

#[tokio::test]
async fn test_post_json() -> Result<()> {
    let Some((signer, url)) = init_signing_test() else {
        warn!("APISIGN_EXECUTE_API_TEST is not set, skipped");
        return Ok(());
    };

    let mut req = Request::new(r#"{"ping":true}"#.to_string());
    *req.method_mut() = Method::POST;
    *req.uri_mut() = http::Uri::from_str(&url)?;

    let (mut parts, body) = req.into_parts();
    signer.sign_request_now(&mut parts)?;
    let req = Request::from_parts(parts, body);

    debug!("signed request: {req:?}");

    let client = Client::new();
    let resp = client.execute(req.try_into()?).await?;
    let status = resp.status();
    debug!("got response: {status}");

    assert_ne!(StatusCode::FORBIDDEN, status);
    Ok(())
}
