// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Deserializer};

/// Uniform envelope returned by every management operation.
///
/// `data` is only meaningful when `success` is true; `error` carries the
/// failure description otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagementResult<T = serde_json::Value> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ManagementResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Failure description, or a generic one when the client gave none.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("unknown management error")
    }
}

/// One entry of a queue listing, as reported by the broker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRecord {
    pub name: String,
    pub routing_type: String,
    pub address: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub message_count: u64,
}

/// One entry of an address listing, as reported by the broker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub name: String,
    pub routing_types: String,
}

/// Counters come back as numbers from some broker versions and as strings
/// from others.
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::String(value) => value.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_record_message_count_forms() {
        let cases = vec![
            (r#"{"name":"q1","routingType":"ANYCAST","address":"a","messageCount":5}"#, 5),
            (r#"{"name":"q1","routingType":"ANYCAST","address":"a","messageCount":"7"}"#, 7),
            (r#"{"name":"q1","routingType":"ANYCAST","address":"a"}"#, 0),
        ];

        for (json, expected) in cases {
            let record: QueueRecord = serde_json::from_str(json).unwrap();
            assert_eq!(record.message_count, expected, "{}", json);
        }
    }

    #[test]
    fn test_queue_record_rejects_garbage_count() {
        let result: Result<QueueRecord, _> = serde_json::from_str(
            r#"{"name":"q1","routingType":"ANYCAST","address":"a","messageCount":"lots"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_address_record() {
        let record: AddressRecord =
            serde_json::from_str(r#"{"name":"q1addr","routingTypes":"ANYCAST","id":12}"#).unwrap();

        assert_eq!(record.name, "q1addr");
        assert_eq!(record.routing_types, "ANYCAST");
    }

    #[test]
    fn test_envelopes() {
        let ok: ManagementResult<u32> = ManagementResult::ok(3);
        assert!(ok.success);
        assert_eq!(ok.data, Some(3));

        let failed: ManagementResult<u32> = ManagementResult::failed("boom");
        assert!(!failed.success);
        assert_eq!(failed.data, None);
        assert_eq!(failed.error_message(), "boom");
    }
}
