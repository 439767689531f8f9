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

use crate::constants::*;
use crate::{Config, Credential};
use apisign_core::hash::{hex_hmac_sha256, hmac_sha256};
use apisign_core::time::{format_date, format_iso8601, now, DateTime};
use apisign_core::utils::Redact;
use apisign_core::{Error, Result};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::request::Parts;
use http::{HeaderMap, HeaderName, HeaderValue};
use log::debug;
use std::fmt::{Debug, Formatter};

/// RequestSigner that signs API Gateway `execute-api` requests.
///
/// The signature follows the AWS SigV4 key derivation but stops there: the
/// hex encoded signing key itself is the signature. Method, path, query,
/// headers and body of the request are not part of it, and the credential
/// scope in the `Authorization` header carries no region.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer is immutable once built, so a single instance can be shared
/// across threads.
#[derive(Clone, Debug)]
pub struct RequestSigner {
    region: String,
    credential: Credential,
}

impl RequestSigner {
    /// Create a new signer for `us-east-1`.
    pub fn new(credential: Credential) -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            credential,
        }
    }

    /// Create a new signer from config.
    ///
    /// Returns a `ConfigInvalid` error if the access key or the secret key is
    /// missing or empty.
    pub fn from_config(config: &Config) -> Result<Self> {
        let credential = config.credential().ok_or_else(|| {
            Error::config_invalid("access_key_id and secret_access_key must be set and non-empty")
        })?;

        Ok(Self::new(credential).with_region(config.region()))
    }

    /// Specify the region, no format validation is applied.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    /// Replace the credential.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    /// Region this signer signs for.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Credential this signer signs with.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Compute the signed headers for the given instant.
    ///
    /// Calling this twice with the same instant returns identical headers.
    pub fn sign(&self, now: DateTime) -> SignedHeaders {
        let ctx = SigningContext::new(now);
        debug!(
            "calculated scope: {}, request time: {}",
            ctx.credential_scope, ctx.request_date_time
        );

        let signature = generate_signature(
            &self.credential.secret_access_key,
            &ctx.date_stamp,
            &self.region,
        );

        let authorization = format!(
            "{SIGNING_ALGORITHM} Credential={}/{}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            self.credential.access_key_id, ctx.credential_scope,
        );

        SignedHeaders {
            authorization,
            x_amz_date: ctx.request_date_time,
            x_api_key: self.credential.api_key.clone(),
            content_type: CONTENT_TYPE_JSON.to_string(),
        }
    }

    /// Compute the signed headers for the current time.
    pub fn sign_now(&self) -> SignedHeaders {
        self.sign(now())
    }

    /// Sign the request for the given instant and set the headers on it.
    pub fn sign_request(&self, req: &mut Parts, now: DateTime) -> Result<()> {
        self.sign(now).apply(req)
    }

    /// Sign the request for the current time and set the headers on it.
    pub fn sign_request_now(&self, req: &mut Parts) -> Result<()> {
        self.sign_request(req, now())
    }
}

/// Per call signing state, derived from a single instant.
///
/// The date stamp in the credential scope and `X-Amz-Date` always come from
/// the same `time`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningContext {
    /// The instant being signed.
    pub time: DateTime,
    /// `YYYYMMDD`
    pub date_stamp: String,
    /// `YYYYMMDD'T'HHMMSS'Z'`, sent as `X-Amz-Date`.
    pub request_date_time: String,
    /// `YYYYMMDD/execute-api/aws4_request`
    pub credential_scope: String,
}

impl SigningContext {
    /// Build the context for `time`.
    pub fn new(time: DateTime) -> Self {
        let date_stamp = format_date(time);
        let request_date_time = format_iso8601(time);
        // Region only feeds the key derivation, it is not part of the scope.
        let credential_scope = format!("{date_stamp}/{SERVICE_NAME}/{SCOPE_TERMINATOR}");

        Self {
            time,
            date_stamp,
            request_date_time,
            credential_scope,
        }
    }
}

/// Derive `kSigning` through `kDate -> kRegion -> kService -> kSigning`.
pub fn generate_signing_key(secret: &str, date_stamp: &str, region: &str) -> Vec<u8> {
    let sign_service = generate_service_key(secret, date_stamp, region);
    // Sign request
    hmac_sha256(&sign_service, SCOPE_TERMINATOR.as_bytes())
}

/// Hex encoded `kSigning`, which is the signature sent in `Authorization`.
fn generate_signature(secret: &str, date_stamp: &str, region: &str) -> String {
    let sign_service = generate_service_key(secret, date_stamp, region);
    hex_hmac_sha256(&sign_service, SCOPE_TERMINATOR.as_bytes())
}

/// `kService`, shared by the raw and the hex encoded signing key.
fn generate_service_key(secret: &str, date_stamp: &str, region: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("{SIGNING_KEY_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(&sign_date, region.as_bytes());
    // Sign service
    hmac_sha256(&sign_region, SERVICE_NAME.as_bytes())
}

/// Header values produced by [`RequestSigner::sign`].
#[derive(Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// `Authorization`
    pub authorization: String,
    /// `X-Amz-Date`
    pub x_amz_date: String,
    /// `x-api-key`
    pub x_api_key: String,
    /// `Content-Type`
    pub content_type: String,
}

impl Debug for SignedHeaders {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedHeaders")
            .field("authorization", &Redact::from(&self.authorization))
            .field("x_amz_date", &self.x_amz_date)
            .field("x_api_key", &Redact::from(&self.x_api_key))
            .field("content_type", &self.content_type)
            .finish()
    }
}

impl SignedHeaders {
    /// Header name and value pairs, in the order they are applied.
    pub fn pairs(&self) -> [(HeaderName, &str); 4] {
        [
            (HeaderName::from_static(X_AMZ_DATE), self.x_amz_date.as_str()),
            (AUTHORIZATION, self.authorization.as_str()),
            (HeaderName::from_static(X_API_KEY), self.x_api_key.as_str()),
            (CONTENT_TYPE, self.content_type.as_str()),
        ]
    }

    /// Build a header map holding the signed headers.
    ///
    /// `Authorization` and `x-api-key` are marked sensitive.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(4);
        for (name, value) in self.pairs() {
            let mut value = HeaderValue::from_str(value).map_err(|e| {
                Error::request_invalid(format!("invalid value for header {name}")).with_source(e)
            })?;
            if name == AUTHORIZATION || name.as_str() == X_API_KEY {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Set the signed headers on the request, replacing existing values.
    ///
    /// The request is left untouched if any value is not a valid header
    /// value.
    pub fn apply(&self, req: &mut Parts) -> Result<()> {
        let headers = self.to_header_map()?;
        for (name, value) in headers {
            if let Some(name) = name {
                req.headers.insert(name, value);
            }
        }

        Ok(())
    }
}
