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
use crate::Region;
use log::debug;
use mwsreport_core::utils::Redact;
use mwsreport_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for the report client.
///
/// The five identity fields are required. Any of them left as `None` is
/// looked up in the environment while the client is built.
#[derive(Clone, Debug)]
pub struct Config {
    /// `mws_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AP_MWS_ACCESS_KEY`]
    pub mws_access_key: Option<String>,
    /// `mws_secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AP_MWS_SECRET_KEY`]
    pub mws_secret_key: Option<String>,
    /// `merchant_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AP_MERCHANT_ID`]
    ///
    /// Marketplaces pass the seller's merchant id here.
    pub merchant_id: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AP_REGION`]
    pub region: Option<String>,
    /// `currency_code` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AP_CURRENCY_CODE`]
    pub currency_code: Option<String>,
    /// Use the sandbox endpoint, default to `false`.
    pub sandbox: bool,
    /// Whether throttled requests should be handled, default to `true`.
    ///
    /// The flag is handed to the request as-is.
    pub handle_throttle: bool,
    /// Application name reported in the User-Agent.
    pub application_name: Option<String>,
    /// Application version reported in the User-Agent.
    pub application_version: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mws_access_key: None,
            mws_secret_key: None,
            merchant_id: None,
            region: None,
            currency_code: None,
            sandbox: false,
            handle_throttle: true,
            application_name: None,
            application_version: None,
        }
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Values already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AP_MWS_ACCESS_KEY) {
            self.mws_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AP_MWS_SECRET_KEY) {
            self.mws_secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AP_MERCHANT_ID) {
            self.merchant_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AP_REGION) {
            self.region.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AP_CURRENCY_CODE) {
            self.currency_code.get_or_insert(v);
        }

        self
    }

    /// Resolve this config into a [`ClientConfig`].
    ///
    /// Every required field takes the explicit value first, then its env
    /// value. Empty strings count as missing. The first missing field fails
    /// with [`mwsreport_core::ErrorKind::ConfigInvalid`], an unknown region code
    /// with [`mwsreport_core::ErrorKind::RegionInvalid`].
    pub fn resolve(self, ctx: &Context) -> Result<ClientConfig> {
        let mws_access_key =
            required(ctx, self.mws_access_key, "mws_access_key", AP_MWS_ACCESS_KEY)?;
        let mws_secret_key =
            required(ctx, self.mws_secret_key, "mws_secret_key", AP_MWS_SECRET_KEY)?;
        let merchant_id = required(ctx, self.merchant_id, "merchant_id", AP_MERCHANT_ID)?;
        let region = required(ctx, self.region, "region", AP_REGION)?;
        let currency_code =
            required(ctx, self.currency_code, "currency_code", AP_CURRENCY_CODE)?;

        let region: Region = region.parse()?;
        debug!("resolved region {region} to host {}", region.host());

        Ok(ClientConfig {
            mws_access_key,
            mws_secret_key,
            merchant_id,
            region,
            currency_code,
            sandbox: self.sandbox,
            handle_throttle: self.handle_throttle,
            application_name: self.application_name,
            application_version: self.application_version,
        })
    }
}

fn required(ctx: &Context, value: Option<String>, field: &str, env: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .or_else(|| ctx.env_var(env).filter(|v| !v.is_empty()))
        .ok_or_else(|| {
            Error::config_invalid(format!("invalid {field}"))
                .with_context(format!(
                    "{field} is not set and env {env} is absent or empty in the context env"
                ))
                .with_context(
                    "process env is only read when the context is built with Context::with_env(OsEnv)",
                )
        })
}

/// ClientConfig is the resolved configuration of a report client.
///
/// All identity fields are non-empty.
#[derive(Clone)]
pub struct ClientConfig {
    /// MWS access key.
    pub mws_access_key: String,
    /// MWS secret key.
    pub mws_secret_key: String,
    /// Merchant id, sent as `SellerId` unless a call overrides it.
    pub merchant_id: String,
    /// Region of the merchant account.
    pub region: Region,
    /// Currency code for the region.
    pub currency_code: String,
    /// Whether the sandbox endpoint is used.
    pub sandbox: bool,
    /// Whether throttled requests should be handled.
    pub handle_throttle: bool,
    /// Application name reported in the User-Agent.
    pub application_name: Option<String>,
    /// Application version reported in the User-Agent.
    pub application_version: Option<String>,
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("mws_access_key", &Redact::from(&self.mws_access_key))
            .field("mws_secret_key", &Redact::from(&self.mws_secret_key))
            .field("merchant_id", &self.merchant_id)
            .field("region", &self.region)
            .field("currency_code", &self.currency_code)
            .field("sandbox", &self.sandbox)
            .field("handle_throttle", &self.handle_throttle)
            .field("application_name", &self.application_name)
            .field("application_version", &self.application_version)
            .finish()
    }
}
