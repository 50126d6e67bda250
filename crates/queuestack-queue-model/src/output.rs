//! List operation outputs.

use serde::{Deserialize, Serialize};

use crate::types::Queue;

/// The pagination envelope shared by every list operation of the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumerationResults {
    /// `Prefix` the listing was filtered by.
    pub prefix: Option<String>,
    /// `Marker` the listing started from.
    pub marker: Option<String>,
    /// `MaxResults` requested.
    pub max_results: Option<u32>,
    /// `NextMarker`. A non-empty value means more results are available.
    pub continuation_token: Option<String>,
}

impl EnumerationResults {
    /// Whether the service reported another page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.continuation_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}

/// Output of the "list queues" operation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEnumerationResults {
    /// Shared pagination fields.
    #[serde(flatten)]
    pub envelope: EnumerationResults,
    /// `AccountName` attribute of the root element.
    pub account_name: Option<String>,
    /// Queues, in document order.
    pub queues: Vec<Queue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_report_more_only_for_non_empty_token() {
        let mut envelope = EnumerationResults::default();
        assert!(!envelope.has_more());

        envelope.continuation_token = Some(String::new());
        assert!(!envelope.has_more());

        envelope.continuation_token = Some("/account/queue2".to_owned());
        assert!(envelope.has_more());
    }

    #[test]
    fn test_should_flatten_envelope_in_json() {
        let results = QueueEnumerationResults {
            envelope: EnumerationResults {
                prefix: Some("q".to_owned()),
                ..Default::default()
            },
            account_name: Some("acct".to_owned()),
            queues: Vec::new(),
        };
        let json = serde_json::to_string(&results).expect("test serialization");
        assert!(json.contains("\"prefix\":\"q\""));
        assert!(json.contains("\"accountName\":\"acct\""));
        assert!(!json.contains("envelope"));
    }
}
