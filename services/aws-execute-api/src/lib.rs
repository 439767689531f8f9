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

//! Signer for AWS API Gateway `execute-api` endpoints.
//!
//! Produces the `Authorization`, `X-Amz-Date`, `x-api-key` and
//! `Content-Type` headers expected by an API key protected, IAM authorized
//! API Gateway stage.
//!
//! ## Example
//!
//! ```
//! use apisign_aws_execute_api::{Credential, RequestSigner};
//! use apisign_core::time::parse_iso8601;
//!
//! let signer = RequestSigner::new(Credential::new(
//!     "AKIDEXAMPLE",
//!     "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
//!     "my-api-key",
//! ))
//! .with_region("us-east-1");
//!
//! let now = parse_iso8601("20150830T123600Z").unwrap();
//! let headers = signer.sign(now);
//!
//! assert_eq!(headers.x_amz_date, "20150830T123600Z");
//! assert!(headers
//!     .authorization
//!     .starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/execute-api/aws4_request"));
//! ```

mod constants;
pub use constants::{AWS_ACCESS_KEY_ID, AWS_API_KEY, AWS_REGION, AWS_SECRET_ACCESS_KEY};
pub use constants::DEFAULT_REGION;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::generate_signing_key;
pub use sign_request::RequestSigner;
pub use sign_request::SignedHeaders;
pub use sign_request::SigningContext;
