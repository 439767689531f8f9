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
use crate::Credential;
use apisign_core::utils::Redact;
use apisign_core::Env;
use std::fmt::{Debug, Formatter};

/// Config for signing execute-api requests.
///
/// Values set on the struct win; `from_env` only fills what is still unset.
#[derive(Clone, Default)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - default to: `us-east-1`
    pub region: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_API_KEY`]
    /// - default to empty
    pub api_key: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id.as_ref().map(Redact::from))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        let envs = env.vars();

        if self.region.is_none() {
            self.region = envs.get(AWS_REGION).cloned();
        }
        if self.access_key_id.is_none() {
            self.access_key_id = envs.get(AWS_ACCESS_KEY_ID).cloned();
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = envs.get(AWS_SECRET_ACCESS_KEY).cloned();
        }
        if self.api_key.is_none() {
            self.api_key = envs.get(AWS_API_KEY).cloned();
        }

        self
    }

    /// The region to sign for, `us-east-1` if unset.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Build the credential carried by this config.
    ///
    /// Returns `None` unless both access key and secret key are set and
    /// non-empty.
    pub fn credential(&self) -> Option<Credential> {
        let (Some(ak), Some(sk)) = (&self.access_key_id, &self.secret_access_key) else {
            return None;
        };

        Some(Credential::new(
            ak.as_str(),
            sk.as_str(),
            self.api_key.clone().unwrap_or_default(),
        ))
        .filter(Credential::is_valid)
    }
}
