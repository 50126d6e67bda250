//! Queue payload codec: the decode/encode operations a client calls.
//!
//! The free functions treat message text as plain text. [`QueueXmlCodec`]
//! applies the configured [`MessageEncoding`] on top of them.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use queuestack_queue_model::{
    Message, MessageEncoding, Queue, QueueEnumerationResults, SignedIdentifier,
    StorageServiceError,
};

use crate::config::QueueXmlConfig;
use crate::deserialize::{deserialize_list, from_xml, from_xml_root};
use crate::error::XmlError;
use crate::serialize::{QueueMessageBody, to_xml};

const MESSAGES_LIST_ROOT: &str = "QueueMessagesList";
const SIGNED_IDENTIFIERS_ROOT: &str = "SignedIdentifiers";

/// Decode a `QueueMessagesList` response ("get messages" / "peek messages").
///
/// Returns the messages in document order; an empty list is not an error.
pub fn decode_message_list(xml: &[u8]) -> Result<Vec<Message>, XmlError> {
    let messages = from_xml_root(xml, MESSAGES_LIST_ROOT, |_, reader| {
        deserialize_list::<Message>(reader)
    })?;
    debug!(count = messages.len(), "decoded queue message list");
    Ok(messages)
}

/// Decode a single `QueueMessage` element.
pub fn decode_message(xml: &[u8]) -> Result<Message, XmlError> {
    from_xml(xml)
}

/// Build the request body for "put message".
///
/// Only the message text is written, XML escaped.
pub fn encode_message_body(text: &str) -> Result<Vec<u8>, XmlError> {
    to_xml(QueueMessageBody::ROOT, &QueueMessageBody { message_text: text })
}

/// Decode an `EnumerationResults` response ("list queues").
pub fn decode_queue_enumeration(xml: &[u8]) -> Result<QueueEnumerationResults, XmlError> {
    let results: QueueEnumerationResults = from_xml(xml)?;
    debug!(
        account_name = results.account_name.as_deref().unwrap_or_default(),
        count = results.queues.len(),
        has_more = results.envelope.has_more(),
        "decoded queue enumeration"
    );
    Ok(results)
}

/// Decode a single `Queue` element.
pub fn decode_queue(xml: &[u8]) -> Result<Queue, XmlError> {
    from_xml(xml)
}

/// Decode a `SignedIdentifiers` response ("get queue ACL").
pub fn decode_signed_identifiers(xml: &[u8]) -> Result<Vec<SignedIdentifier>, XmlError> {
    from_xml_root(xml, SIGNED_IDENTIFIERS_ROOT, |_, reader| {
        deserialize_list::<SignedIdentifier>(reader)
    })
}

/// Build the request body for "set queue ACL".
pub fn encode_signed_identifiers(identifiers: &[SignedIdentifier]) -> Result<Vec<u8>, XmlError> {
    to_xml(SIGNED_IDENTIFIERS_ROOT, identifiers)
}

/// Decode an `Error` response body.
pub fn decode_storage_error(xml: &[u8]) -> Result<StorageServiceError, XmlError> {
    from_xml(xml)
}

/// Queue payload codec bound to a [`QueueXmlConfig`].
///
/// Stateless apart from its configuration; cheap to clone and safe to share
/// across threads.
///
/// # Examples
///
/// ```
/// use queuestack_queue_model::MessageEncoding;
/// use queuestack_queue_xml::{QueueXmlCodec, QueueXmlConfig};
///
/// let codec = QueueXmlCodec::new(
///     QueueXmlConfig::builder()
///         .message_encoding(MessageEncoding::Base64)
///         .build(),
/// );
/// let body = codec.encode_message_body("hello").unwrap();
/// assert!(String::from_utf8(body).unwrap().contains("<MessageText>aGVsbG8=</MessageText>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueueXmlCodec {
    config: QueueXmlConfig,
}

impl QueueXmlCodec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub fn new(config: QueueXmlConfig) -> Self {
        Self { config }
    }

    /// The codec's configuration.
    #[must_use]
    pub fn config(&self) -> &QueueXmlConfig {
        &self.config
    }

    /// Decode a `QueueMessagesList` response, decoding each message text.
    pub fn decode_message_list(&self, xml: &[u8]) -> Result<Vec<Message>, XmlError> {
        decode_message_list(xml)?
            .into_iter()
            .map(|msg| self.decode_text(msg))
            .collect()
    }

    /// Decode a single `QueueMessage`, decoding its message text.
    pub fn decode_message(&self, xml: &[u8]) -> Result<Message, XmlError> {
        self.decode_text(decode_message(xml)?)
    }

    /// Build the "put message" body, encoding the text first.
    pub fn encode_message_body(&self, text: &str) -> Result<Vec<u8>, XmlError> {
        match self.config.message_encoding {
            MessageEncoding::Text => encode_message_body(text),
            MessageEncoding::Base64 => encode_message_body(&BASE64.encode(text)),
        }
    }

    /// Decode an `EnumerationResults` response.
    pub fn decode_queue_enumeration(
        &self,
        xml: &[u8],
    ) -> Result<QueueEnumerationResults, XmlError> {
        decode_queue_enumeration(xml)
    }

    /// Decode a single `Queue` element.
    pub fn decode_queue(&self, xml: &[u8]) -> Result<Queue, XmlError> {
        decode_queue(xml)
    }

    /// Decode a `SignedIdentifiers` response.
    pub fn decode_signed_identifiers(&self, xml: &[u8]) -> Result<Vec<SignedIdentifier>, XmlError> {
        decode_signed_identifiers(xml)
    }

    /// Build the "set queue ACL" body.
    pub fn encode_signed_identifiers(
        &self,
        identifiers: &[SignedIdentifier],
    ) -> Result<Vec<u8>, XmlError> {
        encode_signed_identifiers(identifiers)
    }

    /// Decode an `Error` response body.
    pub fn decode_storage_error(&self, xml: &[u8]) -> Result<StorageServiceError, XmlError> {
        decode_storage_error(xml)
    }

    fn decode_text(&self, mut msg: Message) -> Result<Message, XmlError> {
        if self.config.message_encoding == MessageEncoding::Base64 {
            if let Some(text) = msg.message_text.take() {
                msg.message_text = Some(decode_base64_text(&text)?);
            }
        }
        Ok(msg)
    }
}

/// Decode base64 message text. Line breaks inserted by some encoders are ignored.
fn decode_base64_text(text: &str) -> Result<String, XmlError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| XmlError::ParseError(format!("invalid base64 message text: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| XmlError::ParseError(format!("message text is not UTF-8: {e}")))
}
