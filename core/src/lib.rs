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

//! Core components for signing API Gateway requests.
//!
//! This crate provides the service-independent building blocks shared by the
//! apisign signers: the error type, hashing and time helpers, secret
//! redaction, and an abstraction over environment variables.
//!
//! ## Overview
//!
//! - [`Error`] and [`ErrorKind`]: the error type returned by every signer
//! - [`Env`]: environment variable access, with [`OsEnv`] for the current
//!   process and [`StaticEnv`] for a fixed set of values
//!
//! ## Example
//!
//! ```
//! use apisign_core::hash::hex_hmac_sha256;
//! use apisign_core::time::{format_date, parse_iso8601};
//!
//! let now = parse_iso8601("20150830T123600Z").unwrap();
//! assert_eq!(format_date(now), "20150830");
//!
//! let mac = hex_hmac_sha256(b"key", format_date(now).as_bytes());
//! assert_eq!(mac.len(), 64);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
