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
use crate::params::numbered;
use crate::user_agent::{build_user_agent, Platform};
use crate::{
    AuthOptions, ClientConfig, Config, ParamValue, Parameters, Region, ReportListOptions,
    ReportRequest, ReportResponse, RequestConfig,
};
use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use log::debug;
use mwsreport_core::{Context, Error, Result};

/// ReportClient calls the MWS Reports API.
///
/// ## Example
///
/// ```no_run
/// use mwsreport_core::{Context, OsEnv};
/// use mwsreport_reports::{AuthOptions, Config, ReportClient};
///
/// # async fn example() -> mwsreport_core::Result<()> {
/// // Credentials, merchant id, region and currency come from `AP_*` env.
/// let ctx = Context::new().with_env(OsEnv);
/// let client = ReportClient::new(ctx, Config::default())?;
///
/// let resp = client.get_report("4242", AuthOptions::default()).await?;
/// println!("{}", resp.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReportClient {
    ctx: Context,
    config: ClientConfig,

    endpoint: String,
    user_agent: String,
    headers: HeaderMap,
}

impl ReportClient {
    /// Create a new client, resolving `config` against the context's env.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        Self::with_platform(ctx, config, &Platform::current())
    }

    /// Create a new client reporting `platform` in its User-Agent.
    pub fn with_platform(ctx: Context, config: Config, platform: &Platform) -> Result<Self> {
        let config = config.resolve(&ctx)?;

        let user_agent = build_user_agent(
            config.application_name.as_deref(),
            config.application_version.as_deref(),
            platform,
        );
        debug!("user agent: {user_agent}");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(|e| {
                Error::config_invalid("application name or version is not a valid header value")
                    .with_source(e)
                    .with_context(format!("user_agent: {user_agent}"))
            })?,
        );

        let mut client = Self {
            ctx,
            config,
            endpoint: String::new(),
            user_agent,
            headers,
        };
        client.set_endpoint();
        Ok(client)
    }

    /// Whether the sandbox endpoint is used.
    pub fn sandbox(&self) -> bool {
        self.config.sandbox
    }

    /// Toggle sandbox mode, the endpoint is recomputed.
    pub fn set_sandbox(&mut self, sandbox: bool) {
        self.config.sandbox = sandbox;
        self.set_endpoint();
    }

    fn set_endpoint(&mut self) {
        self.endpoint = self.config.region.endpoint(self.config.sandbox);
        debug!("mws endpoint: {}", self.endpoint);
    }

    /// Endpoint every request is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Region of the merchant account.
    pub fn region(&self) -> Region {
        self.config.region
    }

    /// Resolved client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List reports available to the merchant.
    pub async fn get_report_list(&self, opts: ReportListOptions) -> Result<ReportResponse> {
        let mut params = Parameters::with_action(ACTION_GET_REPORT_LIST);
        params.extend_optionals([
            (AVAILABLE_FROM_DATE, opts.available_from.map(ParamValue::from)),
            (AVAILABLE_TO_DATE, opts.available_to.map(ParamValue::from)),
            (ACKNOWLEDGED, opts.acknowledged.map(ParamValue::from)),
        ]);
        params.extend_optionals(numbered(
            REPORT_TYPE_LIST_PREFIX,
            opts.report_type_list
                .into_iter()
                .map(|v| Some(ParamValue::from(v))),
        ));
        params.extend_optionals(auth_optionals(opts.merchant_id, opts.mws_auth_token));

        self.operation(params).await
    }

    /// Fetch the content of a report.
    pub async fn get_report(
        &self,
        report_id: impl Into<ParamValue>,
        auth: AuthOptions,
    ) -> Result<ReportResponse> {
        let mut params = Parameters::with_action(ACTION_GET_REPORT);
        params.insert(REPORT_ID, report_id);
        params.extend_optionals(auth_optionals(auth.merchant_id, auth.mws_auth_token));

        self.operation(params).await
    }

    /// Update the acknowledged state of one report.
    pub async fn update_report_acknowledgements(
        &self,
        report_id: impl Into<ParamValue>,
        acknowledged: Option<bool>,
        auth: AuthOptions,
    ) -> Result<ReportResponse> {
        let report_id: ParamValue = report_id.into();

        let mut params = Parameters::with_action(ACTION_UPDATE_REPORT_ACKNOWLEDGEMENTS);
        params.extend_optionals(numbered(REPORT_ID_LIST_PREFIX, [Some(report_id)]));
        params.extend_optionals([(ACKNOWLEDGED, acknowledged.map(ParamValue::from))]);
        params.extend_optionals(auth_optionals(auth.merchant_id, auth.mws_auth_token));

        self.operation(params).await
    }

    fn request_config(&self) -> RequestConfig {
        RequestConfig {
            mws_access_key: self.config.mws_access_key.clone(),
            mws_secret_key: self.config.mws_secret_key.clone(),
            api_version: API_VERSION.to_string(),
            merchant_id: self.config.merchant_id.clone(),
            mws_endpoint: self.endpoint.clone(),
            headers: self.headers.clone(),
            handle_throttle: self.config.handle_throttle,
        }
    }

    async fn operation(&self, params: Parameters) -> Result<ReportResponse> {
        let mut request = ReportRequest::new(params, self.request_config());
        request.send_post(&self.ctx).await?;

        request
            .into_response()
            .ok_or_else(|| Error::unexpected("report request finished without a response"))
    }
}

fn auth_optionals(
    merchant_id: Option<String>,
    mws_auth_token: Option<String>,
) -> [(&'static str, Option<ParamValue>); 2] {
    [
        (SELLER_ID, merchant_id.map(ParamValue::from)),
        (MWS_AUTH_TOKEN, mws_auth_token.map(ParamValue::from)),
    ]
}
