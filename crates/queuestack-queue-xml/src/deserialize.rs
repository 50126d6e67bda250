//! Queue XML deserialization: parsing service responses into model types.
//!
//! This module provides the [`QueueDeserialize`] trait, the generic
//! [`from_xml`] entry point, and the helpers shared by every queue service
//! response: root node checks, text reading, list reading, the metadata block
//! and the enumeration (pagination) envelope.
//!
//! Repeated elements are always collected into a `Vec` in document order, no
//! matter how many of them there are. Unknown elements are skipped so that
//! newer service versions can add fields without breaking older clients.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

use queuestack_queue_model::{
    AccessPolicy, EnumerationResults, Message, Queue, QueueEnumerationResults, SignedIdentifier,
    StorageServiceError,
};

use crate::error::XmlError;

/// Trait for deserializing queue service types from XML.
///
/// The caller has already consumed the opening tag of the element and checked
/// that its name is [`Self::ROOT`]. The implementation reads child elements
/// until the matching end tag.
pub trait QueueDeserialize: Sized {
    /// Name of the element this type is decoded from.
    const ROOT: &'static str;

    /// Deserialize an instance from the given XML reader.
    ///
    /// `start` is the already consumed opening tag, giving access to its
    /// attributes.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed or a value fails to parse.
    fn deserialize_xml(start: &BytesStart<'_>, reader: &mut Reader<&[u8]>)
    -> Result<Self, XmlError>;
}

/// Deserialize a queue service XML document into a typed value.
///
/// The document's root element must be named `T::ROOT`.
///
/// # Errors
///
/// Returns `XmlError::SchemaMismatch` if the root element has another name,
/// or any other `XmlError` if the XML is malformed or decoding fails.
pub fn from_xml<T: QueueDeserialize>(xml: &[u8]) -> Result<T, XmlError> {
    from_xml_root(xml, T::ROOT, T::deserialize_xml)
}

/// Locate the root element, check its name, and hand it to `read`.
pub(crate) fn from_xml_root<T, F>(xml: &[u8], root: &str, read: F) -> Result<T, XmlError>
where
    F: FnOnce(&BytesStart<'_>, &mut Reader<&[u8]>) -> Result<T, XmlError>,
{
    let mut reader = Reader::from_reader(xml);
    // Text is kept verbatim, so no trimming. `<X/>` behaves like `<X></X>`.
    reader.config_mut().expand_empty_elements = true;

    // Skip the XML declaration and find the root element.
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                expect_node(root, &e)?;
                return read(&e, &mut reader);
            }
            Event::Eof => {
                return Err(XmlError::MissingElement(format!("root element <{root}>")));
            }
            // Skip declaration, comments, processing instructions, whitespace.
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

/// Fail with `SchemaMismatch` unless `start` is named `expected`.
fn expect_node(expected: &str, start: &BytesStart<'_>) -> Result<(), XmlError> {
    let actual = tag_name(start)?;
    if actual == expected {
        Ok(())
    } else {
        Err(XmlError::SchemaMismatch {
            expected: expected.to_owned(),
            actual: actual.to_owned(),
        })
    }
}

/// The element name of a start tag as UTF-8.
fn tag_name<'a>(start: &'a BytesStart<'_>) -> Result<&'a str, XmlError> {
    std::str::from_utf8(start.name().into_inner()).map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Read the text content of the current element and consume its end tag.
///
/// Entity and character references are resolved and CDATA is taken as-is.
/// Whitespace is preserved. Any nested element is skipped.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e.resolve_char_ref()? {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| XmlError::ParseError(format!("unknown entity &{name};")))?;
                    text.push_str(resolved);
                }
            }
            Event::CData(e) => {
                let raw =
                    std::str::from_utf8(&e).map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(raw);
            }
            Event::Start(_) => skip_element(reader)?,
            Event::End(_) => {
                return Ok(text);
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip an element this decoder does not know about.
fn skip_unknown(reader: &mut Reader<&[u8]>, parent: &str, tag: &str) -> Result<(), XmlError> {
    trace!(parent, element = tag, "skipping unknown element");
    skip_element(reader)
}

/// Parse a u32 from XML text.
fn parse_u32(s: &str) -> Result<u32, XmlError> {
    s.trim()
        .parse::<u32>()
        .map_err(|e| XmlError::ParseError(format!("invalid u32 '{s}': {e}")))
}

/// Deserialize the children of the current element named `T::ROOT`, in
/// document order. Other children are skipped.
pub(crate) fn deserialize_list<T: QueueDeserialize>(
    reader: &mut Reader<&[u8]>,
) -> Result<Vec<T>, XmlError> {
    let mut items = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = tag_name(&e)?;
                if tag == T::ROOT {
                    items.push(T::deserialize_xml(&e, reader)?);
                } else {
                    skip_unknown(reader, T::ROOT, tag)?;
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in list of {}",
                    T::ROOT
                )));
            }
            _ => {}
        }
    }

    Ok(items)
}

/// Deserialize a `<Metadata>` block.
///
/// Each child element becomes one entry: the element name, lowercased, maps
/// to its text. A repeated name keeps the last value.
fn deserialize_metadata(reader: &mut Reader<&[u8]>) -> Result<HashMap<String, String>, XmlError> {
    let mut metadata = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let key = tag_name(&e)?.to_ascii_lowercase();
                let value = read_text_content(reader)?;
                if let Some(previous) = metadata.get(&key) {
                    trace!(%key, dropped = %previous, "repeated metadata key, keeping last value");
                }
                metadata.insert(key, value);
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in Metadata".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(metadata)
}

/// Decode one of the pagination children shared by every list response.
///
/// Returns `false`, without consuming anything, when `tag` is not an
/// envelope field.
fn read_enumeration_field(
    envelope: &mut EnumerationResults,
    tag: &str,
    reader: &mut Reader<&[u8]>,
) -> Result<bool, XmlError> {
    match tag {
        "Prefix" => envelope.prefix = Some(read_text_content(reader)?),
        "Marker" => envelope.marker = Some(read_text_content(reader)?),
        "MaxResults" => envelope.max_results = Some(parse_u32(&read_text_content(reader)?)?),
        "NextMarker" => envelope.continuation_token = Some(read_text_content(reader)?),
        _ => return Ok(false),
    }
    Ok(true)
}

// ---------------------------------------------------------------------------
// QueueDeserialize implementations
// ---------------------------------------------------------------------------

impl QueueDeserialize for Message {
    const ROOT: &'static str = "QueueMessage";

    fn deserialize_xml(
        _start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
    ) -> Result<Self, XmlError> {
        let mut msg = Message::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let tag = tag_name(&e)?;
                    match tag {
                        "MessageId" => msg.id = Some(read_text_content(reader)?),
                        "InsertionTime" => msg.insertion_time = Some(read_text_content(reader)?),
                        "ExpirationTime" => {
                            msg.expiration_time = Some(read_text_content(reader)?);
                        }
                        "DequeueCount" => {
                            let text = read_text_content(reader)?;
                            msg.dequeue_count = Some(parse_u32(&text)?);
                        }
                        "MessageText" => msg.message_text = Some(read_text_content(reader)?),
                        "TimeNextVisible" => {
                            msg.time_next_visible = Some(read_text_content(reader)?);
                        }
                        "PopReceipt" => msg.pop_receipt = Some(read_text_content(reader)?),
                        _ => skip_unknown(reader, Self::ROOT, tag)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in QueueMessage".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(msg)
    }
}

impl QueueDeserialize for Queue {
    const ROOT: &'static str = "Queue";

    fn deserialize_xml(
        _start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
    ) -> Result<Self, XmlError> {
        let mut name = None;
        let mut metadata = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let tag = tag_name(&e)?;
                    match tag {
                        "Name" => name = Some(read_text_content(reader)?),
                        "Metadata" => metadata = Some(deserialize_metadata(reader)?),
                        _ => skip_unknown(reader, Self::ROOT, tag)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Queue".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(Queue { name, metadata })
    }
}

impl QueueDeserialize for QueueEnumerationResults {
    const ROOT: &'static str = "EnumerationResults";

    fn deserialize_xml(
        start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
    ) -> Result<Self, XmlError> {
        let mut results = QueueEnumerationResults {
            account_name: match start.try_get_attribute("AccountName")? {
                Some(attr) => Some(
                    attr.decode_and_unescape_value(reader.decoder())?
                        .into_owned(),
                ),
                None => None,
            },
            ..Default::default()
        };

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let tag = tag_name(&e)?;
                    if tag == "Queues" {
                        results.queues = deserialize_list(reader)?;
                    } else if !read_enumeration_field(&mut results.envelope, tag, reader)? {
                        skip_unknown(reader, Self::ROOT, tag)?;
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in EnumerationResults".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(results)
    }
}

impl QueueDeserialize for AccessPolicy {
    const ROOT: &'static str = "AccessPolicy";

    fn deserialize_xml(
        _start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
    ) -> Result<Self, XmlError> {
        let mut policy = AccessPolicy::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let tag = tag_name(&e)?;
                    match tag {
                        "Start" => policy.start = Some(read_text_content(reader)?),
                        "Expiry" => policy.expiry = Some(read_text_content(reader)?),
                        "Permission" => policy.permission = Some(read_text_content(reader)?),
                        _ => skip_unknown(reader, Self::ROOT, tag)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in AccessPolicy".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(policy)
    }
}

impl QueueDeserialize for SignedIdentifier {
    const ROOT: &'static str = "SignedIdentifier";

    fn deserialize_xml(
        _start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
    ) -> Result<Self, XmlError> {
        let mut id = None;
        let mut access_policy = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let tag = tag_name(&e)?;
                    match tag {
                        "Id" => id = Some(read_text_content(reader)?),
                        "AccessPolicy" => {
                            access_policy = Some(AccessPolicy::deserialize_xml(&e, reader)?);
                        }
                        _ => skip_unknown(reader, Self::ROOT, tag)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in SignedIdentifier".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(SignedIdentifier {
            id: id.unwrap_or_default(),
            access_policy,
        })
    }
}

impl QueueDeserialize for StorageServiceError {
    const ROOT: &'static str = "Error";

    fn deserialize_xml(
        _start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
    ) -> Result<Self, XmlError> {
        let mut error = StorageServiceError::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let tag = tag_name(&e)?;
                    match tag {
                        "Code" => error.code = Some(read_text_content(reader)?),
                        "Message" => error.message = Some(read_text_content(reader)?),
                        _ => {
                            let key = tag.to_owned();
                            let value = read_text_content(reader)?;
                            error.details.insert(key, value);
                        }
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Error".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_message_with_all_fields() {
        let xml = br#"<?xml version="1.0" encoding="utf-8"?>
        <QueueMessage>
            <MessageId>5974b586-0df3-4e2d-ad0c-18e3892bfca2</MessageId>
            <InsertionTime>Fri, 09 Oct 2009 21:04:30 GMT</InsertionTime>
            <ExpirationTime>Fri, 16 Oct 2009 21:04:30 GMT</ExpirationTime>
            <PopReceipt>YzQ4Yzg1MDItYTc0Ny00OWNjLTkxYTUtZGM0MDFiZDAwYzEw</PopReceipt>
            <TimeNextVisible>Fri, 09 Oct 2009 23:29:20 GMT</TimeNextVisible>
            <DequeueCount>1</DequeueCount>
            <MessageText>PHRlc3Q+dGhpcyBpcyBhIHRlc3QgbWVzc2FnZTwvdGVzdD4=</MessageText>
        </QueueMessage>"#;

        let msg: Message = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(
            msg.id.as_deref(),
            Some("5974b586-0df3-4e2d-ad0c-18e3892bfca2")
        );
        assert_eq!(
            msg.insertion_time.as_deref(),
            Some("Fri, 09 Oct 2009 21:04:30 GMT")
        );
        assert_eq!(
            msg.expiration_time.as_deref(),
            Some("Fri, 16 Oct 2009 21:04:30 GMT")
        );
        assert_eq!(
            msg.pop_receipt.as_deref(),
            Some("YzQ4Yzg1MDItYTc0Ny00OWNjLTkxYTUtZGM0MDFiZDAwYzEw")
        );
        assert_eq!(
            msg.time_next_visible.as_deref(),
            Some("Fri, 09 Oct 2009 23:29:20 GMT")
        );
        assert_eq!(msg.dequeue_count, Some(1));
        assert_eq!(
            msg.message_text.as_deref(),
            Some("PHRlc3Q+dGhpcyBpcyBhIHRlc3QgbWVzc2FnZTwvdGVzdD4=")
        );
    }

    #[test]
    fn test_should_leave_absent_fields_unset() {
        let xml = b"<QueueMessage><MessageId>m1</MessageId></QueueMessage>";

        let msg: Message = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(
            msg,
            Message {
                id: Some("m1".to_owned()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_should_distinguish_empty_from_absent() {
        let xml = b"<QueueMessage><MessageText/><PopReceipt></PopReceipt></QueueMessage>";

        let msg: Message = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(msg.message_text.as_deref(), Some(""));
        assert_eq!(msg.pop_receipt.as_deref(), Some(""));
        assert!(msg.id.is_none());
    }

    #[test]
    fn test_should_unescape_and_preserve_whitespace_in_text() {
        let xml = b"<QueueMessage><MessageText>  a &lt;b&gt; &amp; &#x63;  </MessageText></QueueMessage>";

        let msg: Message = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(msg.message_text.as_deref(), Some("  a <b> & c  "));
    }

    #[test]
    fn test_should_read_cdata_text() {
        let xml = b"<QueueMessage><MessageText><![CDATA[<raw & text>]]></MessageText></QueueMessage>";

        let msg: Message = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(msg.message_text.as_deref(), Some("<raw & text>"));
    }

    #[test]
    fn test_should_ignore_unknown_elements() {
        let xml = b"<QueueMessage>\
            <Future><Nested>x</Nested></Future>\
            <MessageId>m1</MessageId>\
            <Other/>\
        </QueueMessage>";

        let msg: Message = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(msg.id.as_deref(), Some("m1"));
    }

    #[test]
    fn test_should_reject_wrong_root() {
        let xml = b"<Queue><Name>q</Name></Queue>";

        let err = from_xml::<Message>(xml).expect_err("root mismatch should fail");
        match err {
            XmlError::SchemaMismatch { expected, actual } => {
                assert_eq!(expected, "QueueMessage");
                assert_eq!(actual, "Queue");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_should_reject_document_without_root() {
        let xml = br#"<?xml version="1.0"?>"#;

        let err = from_xml::<Queue>(xml).expect_err("missing root should fail");
        assert!(matches!(err, XmlError::MissingElement(_)));
    }

    #[test]
    fn test_should_fail_on_truncated_document() {
        let xml = b"<QueueMessage><MessageId>m1</MessageId>";

        assert!(from_xml::<Message>(xml).is_err());
    }

    #[test]
    fn test_should_fail_on_non_numeric_dequeue_count() {
        let xml = b"<QueueMessage><DequeueCount>many</DequeueCount></QueueMessage>";

        let err = from_xml::<Message>(xml).expect_err("bad integer should fail");
        assert!(matches!(err, XmlError::ParseError(_)));
    }

    #[test]
    fn test_should_deserialize_queue_with_metadata() {
        let xml = b"<Queue>\
            <Name>orders</Name>\
            <Metadata><Owner>team-a</Owner><Color>blue</Color></Metadata>\
        </Queue>";

        let queue: Queue = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(queue.name.as_deref(), Some("orders"));
        let metadata = queue.metadata.expect("metadata should be present");
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("owner").map(String::as_str), Some("team-a"));
        assert_eq!(metadata.get("color").map(String::as_str), Some("blue"));
    }

    #[test]
    fn test_should_keep_last_value_for_repeated_metadata_key() {
        let xml = b"<Queue><Metadata><A>1</A><a>2</a></Metadata></Queue>";

        let queue: Queue = from_xml(xml).expect("deserialization should succeed");
        let expected: HashMap<String, String> = [("a".to_owned(), "2".to_owned())].into();
        assert_eq!(queue.metadata, Some(expected));
    }

    #[test]
    fn test_should_keep_metadata_unset_when_absent() {
        let queue: Queue = from_xml(b"<Queue><Name>q</Name></Queue>")
            .expect("deserialization should succeed");
        assert!(queue.metadata.is_none());

        let queue: Queue = from_xml(b"<Queue><Name>q</Name><Metadata/></Queue>")
            .expect("deserialization should succeed");
        assert_eq!(queue.metadata, Some(HashMap::new()));
    }

    #[test]
    fn test_should_deserialize_queue_enumeration() {
        let xml = br#"<?xml version="1.0" encoding="utf-8"?>
        <EnumerationResults ServiceEndpoint="https://myaccount.queue.core.windows.net/" AccountName="myaccount">
            <Prefix>q</Prefix>
            <Marker>/myaccount/q0</Marker>
            <MaxResults>2</MaxResults>
            <Queues>
                <Queue><Name>q1</Name></Queue>
                <Queue><Name>q2</Name><Metadata><Env>prod</Env></Metadata></Queue>
            </Queues>
            <NextMarker>/myaccount/q3</NextMarker>
        </EnumerationResults>"#;

        let results: QueueEnumerationResults =
            from_xml(xml).expect("deserialization should succeed");
        assert_eq!(results.account_name.as_deref(), Some("myaccount"));
        assert_eq!(results.envelope.prefix.as_deref(), Some("q"));
        assert_eq!(results.envelope.marker.as_deref(), Some("/myaccount/q0"));
        assert_eq!(results.envelope.max_results, Some(2));
        assert_eq!(
            results.envelope.continuation_token.as_deref(),
            Some("/myaccount/q3")
        );
        assert_eq!(results.queues.len(), 2);
        assert_eq!(results.queues[0].name.as_deref(), Some("q1"));
        assert!(results.queues[0].metadata.is_none());
        assert_eq!(results.queues[1].name.as_deref(), Some("q2"));
    }

    #[test]
    fn test_should_return_empty_queues_without_container() {
        let xml = b"<EnumerationResults><NextMarker/></EnumerationResults>";

        let results: QueueEnumerationResults =
            from_xml(xml).expect("deserialization should succeed");
        assert!(results.queues.is_empty());
        assert!(results.account_name.is_none());
        assert_eq!(results.envelope.continuation_token.as_deref(), Some(""));
        assert!(!results.envelope.has_more());
    }

    #[test]
    fn test_should_deserialize_signed_identifiers() {
        let xml = b"<SignedIdentifiers>\
            <SignedIdentifier>\
                <Id>policy-1</Id>\
                <AccessPolicy>\
                    <Start>2009-09-28T08:49:37.0000000Z</Start>\
                    <Expiry>2009-09-29T08:49:37.0000000Z</Expiry>\
                    <Permission>raup</Permission>\
                </AccessPolicy>\
            </SignedIdentifier>\
            <SignedIdentifier><Id>policy-2</Id></SignedIdentifier>\
        </SignedIdentifiers>";

        let ids = from_xml_root(xml, "SignedIdentifiers", |_, reader| {
            deserialize_list::<SignedIdentifier>(reader)
        })
        .expect("deserialization should succeed");
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].id, "policy-1");
        let policy = ids[0].access_policy.as_ref().expect("policy present");
        assert_eq!(policy.permission.as_deref(), Some("raup"));
        assert_eq!(policy.start.as_deref(), Some("2009-09-28T08:49:37.0000000Z"));
        assert_eq!(ids[1].id, "policy-2");
        assert!(ids[1].access_policy.is_none());
    }

    #[test]
    fn test_should_deserialize_storage_error_with_details() {
        let xml = br#"<?xml version="1.0" encoding="utf-8"?>
        <Error>
            <Code>AuthenticationFailed</Code>
            <Message>Server failed to authenticate the request.</Message>
            <AuthenticationErrorDetail>Signature did not match.</AuthenticationErrorDetail>
        </Error>"#;

        let err: StorageServiceError = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(err.code.as_deref(), Some("AuthenticationFailed"));
        assert_eq!(
            err.message.as_deref(),
            Some("Server failed to authenticate the request.")
        );
        assert_eq!(
            err.details
                .get("AuthenticationErrorDetail")
                .map(String::as_str),
            Some("Signature did not match.")
        );
    }
}
