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

use crate::constants::{API_NAME, API_NAME_SANDBOX_SUFFIX, API_VERSION};
use mwsreport_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Region the merchant account is registered in.
///
/// Each region maps to the MWS host serving it. Several regions share a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// North America, code `na`.
    Na,
    /// United States, code `us`.
    Us,
    /// United Kingdom, code `uk`.
    Uk,
    /// Germany, code `de`.
    De,
    /// Europe, code `eu`.
    Eu,
    /// Japan, code `jp`.
    Jp,
}

impl Region {
    /// All known regions.
    pub const ALL: [Region; 6] = [
        Region::Na,
        Region::Us,
        Region::Uk,
        Region::De,
        Region::Eu,
        Region::Jp,
    ];

    /// The region code accepted by [`Region::from_str`].
    pub fn code(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Us => "us",
            Region::Uk => "uk",
            Region::De => "de",
            Region::Eu => "eu",
            Region::Jp => "jp",
        }
    }

    /// The MWS host for this region.
    pub fn host(&self) -> &'static str {
        match self {
            Region::Na | Region::Us => "mws.amazonservices.com",
            Region::Uk | Region::De | Region::Eu => "mws-eu.amazonservices.com",
            Region::Jp => "mws.amazonservices.jp",
        }
    }

    /// Build the Reports endpoint served for this region.
    ///
    /// The format looks like `https://mws.amazonservices.com/Reports/2009-01-01`,
    /// with `Reports_Sandbox` as section name while sandbox is on.
    pub fn endpoint(&self, sandbox: bool) -> String {
        let suffix = if sandbox { API_NAME_SANDBOX_SUFFIX } else { "" };
        format!("https://{}/{API_NAME}{suffix}/{API_VERSION}", self.host())
    }
}

impl FromStr for Region {
    type Err = Error;

    /// Codes are matched exactly, `NA` is not a valid code.
    fn from_str(s: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| Error::region_invalid(format!("invalid region code ({s})")))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mwsreport_core::ErrorKind;
    use test_case::test_case;

    #[test_case("na", "mws.amazonservices.com"; "north america")]
    #[test_case("us", "mws.amazonservices.com"; "united states")]
    #[test_case("uk", "mws-eu.amazonservices.com"; "united kingdom")]
    #[test_case("de", "mws-eu.amazonservices.com"; "germany")]
    #[test_case("eu", "mws-eu.amazonservices.com"; "europe")]
    #[test_case("jp", "mws.amazonservices.jp"; "japan")]
    fn test_region_host(code: &str, host: &str) {
        let region: Region = code.parse().expect("region must be valid");
        assert_eq!(region.host(), host);
        assert_eq!(region.to_string(), code);
    }

    #[test_case(""; "empty")]
    #[test_case("NA"; "upper case")]
    #[test_case("fr"; "unknown code")]
    #[test_case("us-east-1"; "aws region")]
    #[test_case(" na"; "leading space")]
    fn test_region_invalid(code: &str) {
        let err = code.parse::<Region>().expect_err("region must be invalid");
        assert_eq!(err.kind(), ErrorKind::RegionInvalid);
        assert_eq!(err.to_string(), format!("invalid region code ({code})"));
    }

    #[test]
    fn test_region_endpoint() {
        assert_eq!(
            Region::Na.endpoint(false),
            "https://mws.amazonservices.com/Reports/2009-01-01"
        );
        assert_eq!(
            Region::Na.endpoint(true),
            "https://mws.amazonservices.com/Reports_Sandbox/2009-01-01"
        );
        assert_eq!(
            Region::Jp.endpoint(false),
            "https://mws.amazonservices.jp/Reports/2009-01-01"
        );
    }

    #[test]
    fn test_region_codes_are_unique() {
        for region in Region::ALL {
            assert_eq!(region.code().parse::<Region>().unwrap(), region);
        }
    }
}
