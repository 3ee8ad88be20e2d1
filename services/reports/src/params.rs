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

use mwsreport_core::time::{format_iso8601, DateTime};
use std::fmt;

/// A scalar value carried by a request parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Plain string value.
    Str(String),
    /// Unsigned integer value, for example a report id.
    Int(u64),
    /// Boolean value, rendered as `true` or `false`.
    Bool(bool),
    /// Point in time, rendered as `2024-01-02T03:04:05Z`.
    Time(DateTime),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(v) => f.write_str(v),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Time(v) => f.write_str(&format_iso8601(*v)),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Str(v.clone())
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<DateTime> for ParamValue {
    fn from(v: DateTime) -> Self {
        ParamValue::Time(v)
    }
}

/// Parameters is the insertion-ordered mapping sent as the form body.
///
/// Keys are unique: inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<(String, ParamValue)>);

impl Parameters {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter mapping starting with `Action={action}`.
    pub fn with_action(action: &str) -> Self {
        let mut params = Self::new();
        params.insert(crate::constants::ACTION, action);
        params
    }

    /// Insert a parameter, replacing the value of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    /// Merge optional parameters, skipping every `None`.
    pub fn extend_optionals<K, I>(&mut self, optionals: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<ParamValue>)>,
    {
        for (k, v) in optionals {
            if let Some(v) = v {
                self.insert(k, v);
            }
        }
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check if a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The `Action` of this request, if any.
    pub fn action(&self) -> Option<String> {
        self.get(crate::constants::ACTION).map(|v| v.to_string())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Number list members the way MWS expects: `{prefix}.1`, `{prefix}.2`, ...
pub(crate) fn numbered<T>(prefix: &str, values: impl IntoIterator<Item = T>) -> Vec<(String, T)> {
    values
        .into_iter()
        .enumerate()
        .map(|(idx, v)| (format!("{prefix}.{}", idx + 1), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_param_value_display() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(ParamValue::from("GetReport").to_string(), "GetReport");
        assert_eq!(ParamValue::from(4242u64).to_string(), "4242");
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from(false).to_string(), "false");
        assert_eq!(ParamValue::from(time).to_string(), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_insert_keeps_order_and_replaces() {
        let mut params = Parameters::with_action("GetReport");
        params.insert("ReportId", 1u64);
        params.insert("SellerId", "A1");
        params.insert("ReportId", 2u64);

        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Action", "ReportId", "SellerId"]);
        assert_eq!(params.get("ReportId"), Some(&ParamValue::Int(2)));
        assert_eq!(params.action().as_deref(), Some("GetReport"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_extend_optionals_skips_none() {
        let mut params = Parameters::with_action("GetReportList");
        params.extend_optionals([
            ("Acknowledged", Some(ParamValue::from(false))),
            ("SellerId", None),
            ("MWSAuthToken", Some(ParamValue::from("amzn.mws.token"))),
        ]);

        assert!(params.contains_key("Acknowledged"));
        assert!(!params.contains_key("SellerId"));
        assert!(params.contains_key("MWSAuthToken"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_numbered() {
        assert_eq!(
            numbered("ReportTypeList.Type", ["a", "b"]),
            vec![
                ("ReportTypeList.Type.1".to_string(), "a"),
                ("ReportTypeList.Type.2".to_string(), "b"),
            ]
        );
        assert!(numbered("ReportIdList.Id", Vec::<u64>::new()).is_empty());
    }
}
