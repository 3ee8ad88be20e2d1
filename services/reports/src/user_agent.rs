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

use crate::constants::{SDK_NAME, SDK_VERSION};
use sysinfo::System;

/// Platform describes the runtime reported in the User-Agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// Version of the rust compiler this crate was built with.
    pub rust_version: String,
    /// Operating system, for example `linux`.
    pub os: String,
    /// Release of the operating system, for example the kernel version on linux.
    pub os_release: String,
}

impl Platform {
    /// Platform of the running binary.
    pub fn current() -> Self {
        Self {
            rust_version: option_env!("VERGEN_RUSTC_SEMVER")
                .unwrap_or("unknown")
                .to_string(),
            os: std::env::consts::OS.to_string(),
            os_release: System::kernel_version()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

/// Build the User-Agent sent with every report request.
///
/// The format looks like
/// `mwsreport-rs/0.1.0 (MyApp/1.2; Rust/1.80.0; linux/6.8.0-45-generic)`. Empty
/// application values are treated as absent.
pub fn build_user_agent(
    application_name: Option<&str>,
    application_version: Option<&str>,
    platform: &Platform,
) -> String {
    let name = application_name.filter(|v| !v.is_empty());
    let version = application_version.filter(|v| !v.is_empty());

    let app = match (name, version) {
        (Some(name), Some(version)) => format!("{name}/{version}; "),
        (Some(v), None) | (None, Some(v)) => format!("{v}; "),
        (None, None) => String::new(),
    };

    format!(
        "{SDK_NAME}/{SDK_VERSION} ({app}Rust/{}; {}/{})",
        platform.rust_version, platform.os, platform.os_release
    )
}
