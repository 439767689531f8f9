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

// Headers set on signed requests.
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_API_KEY: &str = "x-api-key";

// Literals of the signing scheme.
pub const SIGNING_ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const SIGNING_KEY_PREFIX: &str = "AWS4";
pub const SERVICE_NAME: &str = "execute-api";
pub const SCOPE_TERMINATOR: &str = "aws4_request";
pub const SIGNED_HEADERS: &str = "content-type;host;x-amz-date;x-api-key";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

// Env values used by `Config::from_env`.
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_API_KEY: &str = "AWS_API_KEY";
