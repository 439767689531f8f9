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

mod live;
mod offline;

use apisign_aws_execute_api::{Config, RequestSigner};
use apisign_core::OsEnv;
use std::env;

/// Initialize the live test environment.
///
/// Returns `None` unless `APISIGN_EXECUTE_API_TEST` is `on`.
pub fn init_signing_test() -> Option<(RequestSigner, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("APISIGN_EXECUTE_API_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let url = env::var("APISIGN_EXECUTE_API_URL").expect("APISIGN_EXECUTE_API_URL must be set");
    let config = Config::default().from_env(&OsEnv);
    let signer = RequestSigner::from_config(&config)
        .expect("AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set");

    Some((signer, url))
}
