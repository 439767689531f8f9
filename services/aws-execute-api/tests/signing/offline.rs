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

use apisign_aws_execute_api::{Config, Credential, RequestSigner, SigningContext};
use apisign_core::time::parse_iso8601;
use apisign_core::StaticEnv;
use http::{Method, Request};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

const SIGNATURE: &str = "59e58e6d1d0b9d657b3376a7fae27081d49a7e060981761c44a4a9a3b6252854";

fn test_config() -> Config {
    Config::default().from_env(&StaticEnv::from_pairs([
        ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
        (
            "AWS_SECRET_ACCESS_KEY",
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
        ),
        ("AWS_API_KEY", "example-api-key"),
    ]))
}

#[test]
fn test_sign_request_from_env_config() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let signer = RequestSigner::from_config(&test_config())?;
    assert_eq!(signer.region(), "us-east-1");

    let req = Request::builder()
        .method(Method::POST)
        .uri("https://abc123.execute-api.us-east-1.amazonaws.com/prod/orders")
        .body(r#"{"id":1}"#)?;
    let (mut parts, body) = req.into_parts();
    signer.sign_request(&mut parts, parse_iso8601("20150830T123600Z")?)?;
    let req = Request::from_parts(parts, body);

    let headers = req.headers();
    assert_eq!(headers["x-amz-date"], "20150830T123600Z");
    assert_eq!(
        headers["authorization"],
        format!(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/execute-api/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date;x-api-key, Signature={SIGNATURE}"
        )
        .as_str()
    );
    assert_eq!(headers["x-api-key"], "example-api-key");
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers.len(), 4);
    Ok(())
}

#[test]
fn test_signature_ignores_request_shape() -> anyhow::Result<()> {
    let signer = RequestSigner::from_config(&test_config())?;
    let now = parse_iso8601("20150830T123600Z")?;

    let sign = |method: Method, uri: &str| -> anyhow::Result<String> {
        let (mut parts, _) = Request::builder().method(method).uri(uri).body(())?.into_parts();
        signer.sign_request(&mut parts, now)?;
        Ok(parts.headers["authorization"].to_str()?.to_string())
    };

    assert_eq!(
        sign(Method::GET, "https://a.execute-api.us-east-1.amazonaws.com/prod")?,
        sign(
            Method::DELETE,
            "https://b.execute-api.us-east-1.amazonaws.com/dev/items?id=7"
        )?
    );
    Ok(())
}

#[test]
fn test_shared_signer_across_threads() -> anyhow::Result<()> {
    let signer = Arc::new(RequestSigner::new(Credential::new(
        "AKIDEXAMPLE",
        "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
        "example-api-key",
    )));
    let now = parse_iso8601("20150830T123600Z")?;
    let expected = signer.sign(now);

    let handles = (0..4)
        .map(|_| {
            let signer = signer.clone();
            thread::spawn(move || signer.sign(now))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let headers = handle.join().expect("signing thread must not panic");
        assert_eq!(headers, expected);
    }
    Ok(())
}

#[test]
fn test_scope_and_date_share_instant() {
    let now = apisign_core::time::now();
    let ctx = SigningContext::new(now);

    assert!(ctx.request_date_time.starts_with(&ctx.date_stamp));
    assert!(ctx.credential_scope.starts_with(&ctx.date_stamp));
}
