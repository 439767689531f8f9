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

use anyhow::Result;
use apisign_aws_execute_api::{Config, Credential, RequestSigner};
use apisign_core::OsEnv;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for debugging
    let _ = env_logger::builder().is_test(true).try_init();

    let config = Config::default().from_env(&OsEnv);
    let signer = match RequestSigner::from_config(&config) {
        Ok(signer) => signer,
        Err(_) => {
            println!("No AWS credentials found, using demo credentials for example");
            RequestSigner::new(Credential::new(
                "AKIDEXAMPLE",
                "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
                "demo-api-key",
            ))
            .with_region(config.region())
        }
    };

    let url = std::env::var("APISIGN_EXECUTE_API_URL")
        .unwrap_or_else(|_| "https://abc123.execute-api.us-east-1.amazonaws.com/prod".into());
    let req = http::Request::post(&url).body(r#"{"hello":"world"}"#.to_string())?;
    let (mut parts, body) = req.into_parts();

    signer.sign_request_now(&mut parts)?;
    println!("Request signed successfully!");
    println!("Headers: {:?}", parts.headers);

    if std::env::var("APISIGN_EXECUTE_API_URL").is_err() {
        println!("Demo mode: Not sending actual request");
        return Ok(());
    }

    let resp = Client::new()
        .execute(http::Request::from_parts(parts, body).try_into()?)
        .await?;
    println!("Response status: {}", resp.status());

    Ok(())
}
