//! Queue service record types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A message retrieved from (or peeked on) a queue.
///
/// Fields are populated only when the corresponding XML element was present
/// in the response. Timestamps are kept exactly as the service sent them
/// (RFC 1123 strings such as `Fri, 09 Oct 2009 21:04:30 GMT`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// `MessageId`.
    pub id: Option<String>,
    /// `InsertionTime`.
    pub insertion_time: Option<String>,
    /// `ExpirationTime`.
    pub expiration_time: Option<String>,
    /// `DequeueCount`. Absent on peeked messages.
    pub dequeue_count: Option<u32>,
    /// `MessageText`.
    pub message_text: Option<String>,
    /// `TimeNextVisible`.
    pub time_next_visible: Option<String>,
    /// `PopReceipt`, required to update or delete a dequeued message.
    pub pop_receipt: Option<String>,
}

/// A queue as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    /// `Name`.
    pub name: Option<String>,
    /// User metadata, keyed by lowercased name.
    ///
    /// `None` when the listing did not include metadata, which is not the
    /// same as an empty `<Metadata/>` block.
    pub metadata: Option<HashMap<String, String>>,
}

/// A stored access policy attached to a queue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedIdentifier {
    /// `Id`, at most 64 characters on the service side.
    pub id: String,
    /// `AccessPolicy`.
    pub access_policy: Option<AccessPolicy>,
}

/// The `AccessPolicy` block of a [`SignedIdentifier`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPolicy {
    /// `Start`, ISO 8601.
    pub start: Option<String>,
    /// `Expiry`, ISO 8601.
    pub expiry: Option<String>,
    /// `Permission`, e.g. `raup`.
    pub permission: Option<String>,
}

/// How message text is carried inside `<MessageText>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageEncoding {
    /// Text is sent as-is (XML escaped).
    #[default]
    Text,
    /// Text is base64 encoded before it is placed in the body.
    Base64,
}

impl MessageEncoding {
    /// Returns the string value of this encoding.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Base64 => "base64",
        }
    }
}

impl std::fmt::Display for MessageEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MessageEncoding {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("base64") {
            Self::Base64
        } else {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_message_to_all_unset() {
        let msg = Message::default();
        assert!(msg.id.is_none());
        assert!(msg.dequeue_count.is_none());
        assert!(msg.message_text.is_none());
    }

    #[test]
    fn test_should_parse_message_encoding() {
        assert_eq!(MessageEncoding::from("base64"), MessageEncoding::Base64);
        assert_eq!(MessageEncoding::from("BASE64"), MessageEncoding::Base64);
        assert_eq!(MessageEncoding::from("text"), MessageEncoding::Text);
        assert_eq!(MessageEncoding::from("bogus"), MessageEncoding::Text);
        assert_eq!(MessageEncoding::Base64.to_string(), "base64");
    }

    #[test]
    fn test_should_serialize_message_to_camel_case_json() {
        let msg = Message {
            id: Some("m1".to_owned()),
            time_next_visible: Some("now".to_owned()),
            ..Default::default()
        };
        let json = serde_json::to_string(&msg).expect("test serialization");
        assert!(json.contains("\"id\":\"m1\""));
        assert!(json.contains("timeNextVisible"));
        assert!(json.contains("\"popReceipt\":null"));
    }
}
