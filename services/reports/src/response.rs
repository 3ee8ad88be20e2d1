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

use crate::constants::X_MWS_REQUEST_ID;
use http::{HeaderMap, StatusCode};
use quick_xml::de;
use serde::Deserialize;

/// ReportResponse is what MWS answered to a report request.
///
/// Error statuses are returned here as well; use [`ReportResponse::error`]
/// to inspect them.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl ReportResponse {
    /// HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP headers of the response.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Response body.
    ///
    /// `GetReport` returns the report content itself, other actions return XML.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the response and return its body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Check if MWS accepted the request.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if MWS throttled the request.
    pub fn is_throttled(&self) -> bool {
        self.status == StatusCode::SERVICE_UNAVAILABLE
    }

    /// Request id assigned by MWS, read from `x-mws-request-id`.
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(X_MWS_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
    }

    /// Parse the MWS error document of a failed request.
    ///
    /// Returns `None` for successful responses and bodies that are not an
    /// `ErrorResponse`.
    pub fn error(&self) -> Option<ApiError> {
        if self.is_success() {
            return None;
        }

        let resp: ErrorResponse = de::from_str(&self.body).ok()?;
        if resp.error.code.is_empty() {
            return None;
        }

        Some(ApiError {
            kind: resp.error.kind,
            code: resp.error.code,
            message: resp.error.message,
            request_id: Some(resp.request_id).filter(|v| !v.is_empty()),
        })
    }
}

impl From<http::Response<String>> for ReportResponse {
    fn from(resp: http::Response<String>) -> Self {
        let (parts, body) = resp.into_parts();
        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

/// ApiError is the error reported by MWS in an `ErrorResponse` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// `Sender` or `Receiver`.
    pub kind: String,
    /// Error code, for example `InvalidParameterValue` or `RequestThrottled`.
    pub code: String,
    /// Human readable message.
    pub message: String,
    /// Request id echoed in the error document.
    pub request_id: Option<String>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorResponse {
    error: ErrorDetail,
    #[serde(rename = "RequestID")]
    request_id: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorDetail {
    #[serde(rename = "Type")]
    kind: String,
    code: String,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: StatusCode, body: &str) -> ReportResponse {
        http::Response::builder()
            .status(status)
            .header(X_MWS_REQUEST_ID, "c6104cbe-af31-11e0-8154-cbc7ccf896c7")
            .body(body.to_string())
            .expect("response must be valid")
            .into()
    }

    #[test]
    fn test_parse_error_response() {
        let _ = env_logger::builder().is_test(true).try_init();

        let content = r#"<?xml version="1.0"?>
<ErrorResponse xmlns="http://mws.amazonaws.com/doc/2009-01-01/">
  <Error>
    <Type>Sender</Type>
    <Code>InvalidParameterValue</Code>
    <Message>Invalid report id: abc</Message>
    <Detail/>
  </Error>
  <RequestID>f4b7e3c4-0a43-4a2c-9e58-0c5a8d1f2e7b</RequestID>
</ErrorResponse>"#;

        let resp = response(StatusCode::BAD_REQUEST, content);
        assert!(!resp.is_success());
        assert!(!resp.is_throttled());
        assert_eq!(
            resp.error(),
            Some(ApiError {
                kind: "Sender".to_string(),
                code: "InvalidParameterValue".to_string(),
                message: "Invalid report id: abc".to_string(),
                request_id: Some("f4b7e3c4-0a43-4a2c-9e58-0c5a8d1f2e7b".to_string()),
            })
        );
    }

    #[test]
    fn test_throttled_response() {
        let content = r#"<ErrorResponse xmlns="http://mws.amazonaws.com/doc/2009-01-01/">
  <Error>
    <Type>Sender</Type>
    <Code>RequestThrottled</Code>
    <Message>Request is throttled</Message>
  </Error>
  <RequestID>5e4c28a9-21c0-4f25-8f21-8f5b6a0f0d3c</RequestID>
</ErrorResponse>"#;

        let resp = response(StatusCode::SERVICE_UNAVAILABLE, content);
        assert!(resp.is_throttled());
        assert_eq!(resp.error().map(|e| e.code).as_deref(), Some("RequestThrottled"));
    }

    #[test]
    fn test_success_response_has_no_error() {
        let content = r#"<GetReportListResponse xmlns="http://mws.amazonaws.com/doc/2009-01-01/">
  <GetReportListResult><HasNext>false</HasNext></GetReportListResult>
</GetReportListResponse>"#;

        let resp = response(StatusCode::OK, content);
        assert!(resp.is_success());
        assert_eq!(resp.error(), None);
        assert_eq!(
            resp.request_id(),
            Some("c6104cbe-af31-11e0-8154-cbc7ccf896c7")
        );
        assert_eq!(resp.into_body(), content);
    }

    #[test]
    fn test_non_xml_error_body() {
        let resp = response(StatusCode::INTERNAL_SERVER_ERROR, "upstream failure");
        assert_eq!(resp.error(), None);
    }
}
