//! Queue XML serialization: building request bodies from model types.
//!
//! The queue service accepts two XML request bodies: a message submission
//! (`<QueueMessage><MessageText>…</MessageText></QueueMessage>`) and a queue
//! access policy list (`<SignedIdentifiers>`). Neither carries a namespace.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use queuestack_queue_model::{AccessPolicy, SignedIdentifier};

use crate::error::XmlError;

/// Trait for serializing queue service types to XML.
///
/// Implementors write their content as child elements inside the current XML
/// context. The root element is written by [`to_xml`].
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait QueueSerialize {
    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a value as a complete XML document with declaration.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: QueueSerialize + ?Sized>(
    root_element: &str,
    value: &T,
) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(256);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element(root_element)
        .write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

/// Write a simple `<tag>text</tag>` element. `text` is XML escaped.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// The body of a "put message" request, written under a `QueueMessage` root.
///
/// Only the message text is ever sent; the service assigns every other field.
#[derive(Debug, Clone, Copy)]
pub struct QueueMessageBody<'a> {
    /// Text placed in `<MessageText>`, already encoded as the queue expects.
    pub message_text: &'a str,
}

impl QueueMessageBody<'_> {
    /// Root element name of the request body.
    pub const ROOT: &'static str = "QueueMessage";
}

impl QueueSerialize for QueueMessageBody<'_> {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "MessageText", self.message_text)
    }
}

impl QueueSerialize for AccessPolicy {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Start", self.start.as_deref())?;
        write_optional_text(writer, "Expiry", self.expiry.as_deref())?;
        write_optional_text(writer, "Permission", self.permission.as_deref())?;
        Ok(())
    }
}

impl QueueSerialize for SignedIdentifier {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Id", &self.id)?;
        if let Some(policy) = &self.access_policy {
            writer
                .create_element("AccessPolicy")
                .write_inner_content(|w| policy.serialize_xml(w))?;
        }
        Ok(())
    }
}

/// A `SignedIdentifiers` list: one `<SignedIdentifier>` per entry.
impl QueueSerialize for [SignedIdentifier] {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        for identifier in self {
            writer
                .create_element("SignedIdentifier")
                .write_inner_content(|w| identifier.serialize_xml(w))?;
        }
        Ok(())
    }
}
