//! Response body types.

use serde::Serialize;

/// Body returned by the text generation route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextGenResponse {
    /// Assembled generated text
    pub text: String,
}
