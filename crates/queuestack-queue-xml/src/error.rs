//! Error types for queue XML encoding and decoding.

use std::io;

/// Errors that can occur during queue XML serialization or deserialization.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The document's root element is not the one the decoder expects.
    #[error("expected <{expected}> node, found <{actual}>")]
    SchemaMismatch {
        /// Element name the decoder requires.
        expected: String,
        /// Element name found in the document.
        actual: String,
    },

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_name_both_nodes_in_schema_mismatch() {
        let err = XmlError::SchemaMismatch {
            expected: "QueueMessage".to_owned(),
            actual: "Queue".to_owned(),
        };
        assert_eq!(err.to_string(), "expected <QueueMessage> node, found <Queue>");
    }

    #[test]
    fn test_should_wrap_io_errors() {
        let err = XmlError::from(io::Error::other("disk full"));
        assert!(matches!(err, XmlError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
