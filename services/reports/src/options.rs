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

use mwsreport_core::time::DateTime;

/// Per-call overrides shared by every report operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthOptions {
    /// Merchant id sent as `SellerId`, defaults to the client's merchant id.
    pub merchant_id: Option<String>,
    /// Marketplace web service auth token sent as `MWSAuthToken`.
    pub mws_auth_token: Option<String>,
}

impl AuthOptions {
    /// Act on behalf of another seller.
    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    /// Authorize with a marketplace web service auth token.
    pub fn with_mws_auth_token(mut self, token: impl Into<String>) -> Self {
        self.mws_auth_token = Some(token.into());
        self
    }
}

/// Filters for `GetReportList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportListOptions {
    /// Earliest availability date, sent as `AvailableFromDate`.
    pub available_from: Option<DateTime>,
    /// Latest availability date, sent as `AvailableToDate`.
    pub available_to: Option<DateTime>,
    /// Only list reports with this acknowledged state.
    pub acknowledged: Option<bool>,
    /// Report types, sent as `ReportTypeList.Type.1`, `ReportTypeList.Type.2`, ...
    pub report_type_list: Vec<String>,
    /// Merchant id sent as `SellerId`, defaults to the client's merchant id.
    pub merchant_id: Option<String>,
    /// Marketplace web service auth token sent as `MWSAuthToken`.
    pub mws_auth_token: Option<String>,
}
