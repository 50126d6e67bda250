//! Error bodies returned by the queue service.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An `<Error>` response body.
///
/// The service always sends `Code` and `Message`; some errors add extra
/// elements (e.g. `AuthenticationErrorDetail`), which land in `details`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageServiceError {
    /// `Code`, e.g. `QueueNotFound`.
    pub code: Option<String>,
    /// `Message`, human readable.
    pub message: Option<String>,
    /// Any other child element, keyed by element name.
    pub details: HashMap<String, String>,
}

impl fmt::Display for StorageServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.code.as_deref().unwrap_or("UnknownError");
        match self.message.as_deref() {
            Some(message) => write!(f, "{code}: {message}"),
            None => f.write_str(code),
        }
    }
}
