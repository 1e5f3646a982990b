//! Requested output modalities.

use serde::{Deserialize, Serialize};

/// The requested output type(s) from the model.
///
/// Serializes to the wire strings the Gemini API expects.
///
/// # Examples
///
/// ```
/// use pictor_core::Modality;
///
/// let json = serde_json::to_string(&Modality::Image).unwrap();
/// assert_eq!(json, "\"IMAGE\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Text output
    Text,
    /// Image output
    Image,
}
