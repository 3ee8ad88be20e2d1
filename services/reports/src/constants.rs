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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used to resolve the client configuration.
pub const AP_MWS_ACCESS_KEY: &str = "AP_MWS_ACCESS_KEY";
pub const AP_MWS_SECRET_KEY: &str = "AP_MWS_SECRET_KEY";
pub const AP_MERCHANT_ID: &str = "AP_MERCHANT_ID";
pub const AP_REGION: &str = "AP_REGION";
pub const AP_CURRENCY_CODE: &str = "AP_CURRENCY_CODE";

// Reports API section.
pub const API_NAME: &str = "Reports";
pub const API_NAME_SANDBOX_SUFFIX: &str = "_Sandbox";
pub const API_VERSION: &str = "2009-01-01";

// User agent pieces.
pub const SDK_NAME: &str = "mwsreport-rs";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

// Headers used by MWS.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const X_MWS_REQUEST_ID: &str = "x-mws-request-id";

// Actions.
pub const ACTION_GET_REPORT_LIST: &str = "GetReportList";
pub const ACTION_GET_REPORT: &str = "GetReport";
pub const ACTION_UPDATE_REPORT_ACKNOWLEDGEMENTS: &str = "UpdateReportAcknowledgements";

// Request parameters.
pub const ACTION: &str = "Action";
pub const ACKNOWLEDGED: &str = "Acknowledged";
pub const AVAILABLE_FROM_DATE: &str = "AvailableFromDate";
pub const AVAILABLE_TO_DATE: &str = "AvailableToDate";
pub const MWS_AUTH_TOKEN: &str = "MWSAuthToken";
pub const REPORT_ID: &str = "ReportId";
pub const REPORT_ID_LIST_PREFIX: &str = "ReportIdList.Id";
pub const REPORT_TYPE_LIST_PREFIX: &str = "ReportTypeList.Type";
pub const SELLER_ID: &str = "SellerId";
pub const VERSION: &str = "Version";

// Signature version 2 parameters.
pub const AWS_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const SIGNATURE: &str = "Signature";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const TIMESTAMP: &str = "Timestamp";
pub const HMAC_SHA256: &str = "HmacSHA256";

/// AsciiSet for RFC 3986 encoding of MWS query parameters.
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static MWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
