//! Codec configuration.
//!
//! Provides [`QueueXmlConfig`]. Values are loaded from environment variables
//! with [`QueueXmlConfig::from_env`] or assembled with the typed builder.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use queuestack_queue_model::MessageEncoding;

/// Queue XML codec configuration.
///
/// # Examples
///
/// ```
/// use queuestack_queue_model::MessageEncoding;
/// use queuestack_queue_xml::QueueXmlConfig;
///
/// let config = QueueXmlConfig::builder()
///     .message_encoding(MessageEncoding::Base64)
///     .build();
/// assert_eq!(config.message_encoding, MessageEncoding::Base64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct QueueXmlConfig {
    /// How `<MessageText>` is encoded on submission and decoded on retrieval.
    #[builder(default)]
    pub message_encoding: MessageEncoding,
}

impl Default for QueueXmlConfig {
    fn default() -> Self {
        Self {
            message_encoding: MessageEncoding::Text,
        }
    }
}

impl QueueXmlConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `QUEUE_MESSAGE_ENCODING` | `text` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("QUEUE_MESSAGE_ENCODING") {
            config.message_encoding = MessageEncoding::from(v.trim());
        }

        config
    }
}
