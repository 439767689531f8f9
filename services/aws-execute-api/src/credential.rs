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

use apisign_core::utils::Redact;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key, secret key and api key.
///
/// All three values are stored verbatim: no trimming, no format checks. A
/// malformed key still signs, the endpoint rejects it.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Access key id, embedded in the `Authorization` header.
    pub access_key_id: String,
    /// Secret access key, only ever used to derive the signing key.
    pub secret_access_key: String,
    /// API Gateway api key, sent as `x-api-key`.
    pub api_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            api_key: api_key.into(),
        }
    }

    /// Check if the credential can produce a signature the endpoint may accept.
    pub fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("api_key", &Redact::from(&self.api_key))
            .finish()
    }
}
