//! Queue storage XML serialization/deserialization.
//!
//! This crate converts between the queue service's XML wire payloads and the
//! records in `queuestack-queue-model`.
//!
//! # Key components
//!
//! - [`QueueDeserialize`] trait and [`from_xml`] for decoding response bodies,
//!   with a root element check on every record
//! - [`QueueSerialize`] trait and [`to_xml`] for encoding request bodies
//! - [`QueueXmlCodec`] and the free `decode_*` / `encode_*` functions: the
//!   operations a client actually calls
//! - [`QueueXmlConfig`] for message text encoding
//!
//! # Queue XML conventions
//!
//! - No namespace on any element
//! - Optional elements may be omitted; absent and empty are distinct
//! - Metadata keys are case-insensitive and decoded lowercased
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

pub mod codec;
pub mod config;
pub mod deserialize;
pub mod error;
pub mod serialize;

pub use codec::{
    QueueXmlCodec, decode_message, decode_message_list, decode_queue, decode_queue_enumeration,
    decode_signed_identifiers, decode_storage_error, encode_message_body,
    encode_signed_identifiers,
};
pub use config::QueueXmlConfig;
pub use deserialize::{QueueDeserialize, from_xml};
pub use error::XmlError;
pub use serialize::{QueueMessageBody, QueueSerialize, to_xml};
