//! Serializable response document.

use serde::{Deserialize, Serialize};

use crate::error::WhimResult;

/// The lines produced for one utterance, as exchanged over JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Output lines, possibly empty.
    pub results: Vec<String>,
}

impl Response {
    /// Wrap response lines.
    pub fn new(results: Vec<String>) -> Self {
        Self { results }
    }

    /// Serialize to a compact JSON object.
    pub fn to_json(&self) -> WhimResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Vec<String>> for Response {
    fn from(results: Vec<String>) -> Self {
        Self::new(results)
    }
}
