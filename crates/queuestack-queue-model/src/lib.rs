//! Data model for queue storage service payloads.
//!
//! These are plain value records decoded from (or encoded into) the XML
//! bodies exchanged with the queue service. Every optional wire element maps
//! to an `Option` field: `None` means the element was absent, `Some("")`
//! means it was present but empty.

pub mod error;
pub mod output;
pub mod types;

pub use error::StorageServiceError;
pub use output::{EnumerationResults, QueueEnumerationResults};
pub use types::{AccessPolicy, Message, MessageEncoding, Queue, SignedIdentifier};
