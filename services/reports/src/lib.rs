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

//! MWS Reports client.
//!
//! [`ReportClient`] resolves credentials, merchant id, region and currency
//! from explicit [`Config`] values or `AP_*` environment variables, then
//! exposes the three report operations:
//!
//! - [`ReportClient::get_report_list`]
//! - [`ReportClient::get_report`]
//! - [`ReportClient::update_report_acknowledgements`]
//!
//! Every operation builds a [`Parameters`] mapping and hands it to a
//! [`ReportRequest`], which signs it with MWS signature version 2 and posts
//! it through the [`mwsreport_core::Context`]'s http client.

mod config;
pub use config::ClientConfig;
pub use config::Config;

mod region;
pub use region::Region;

mod user_agent;
pub use user_agent::build_user_agent;
pub use user_agent::Platform;

mod params;
pub use params::ParamValue;
pub use params::Parameters;

mod options;
pub use options::AuthOptions;
pub use options::ReportListOptions;

mod sign_request;
pub use sign_request::RequestSigner;

mod request;
pub use request::ReportRequest;
pub use request::RequestConfig;

mod response;
pub use response::ApiError;
pub use response::ReportResponse;

mod client;
pub use client::ReportClient;

mod constants;
pub use constants::{
    AP_CURRENCY_CODE, AP_MERCHANT_ID, AP_MWS_ACCESS_KEY, AP_MWS_SECRET_KEY, AP_REGION,
    API_VERSION,
};

#[cfg(test)]
mod testing;
