//! Decoded stream chunk types.

/// One part of a streamed chunk, already decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkPart {
    /// Text fragment
    Text(String),
    /// Inline binary data (decoded from base64)
    InlineData {
        /// MIME type of the payload
        mime: String,
        /// Raw payload bytes
        data: Vec<u8>,
    },
}

/// One increment of a streamed model response.
///
/// Parts preserve the order they appeared in across the chunk's candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationChunk {
    /// Decoded parts in arrival order
    pub parts: Vec<ChunkPart>,
}

impl GenerationChunk {
    /// Creates a chunk from decoded parts.
    pub fn new(parts: Vec<ChunkPart>) -> Self {
        Self { parts }
    }

    /// Concatenated text of all text parts in this chunk.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            if let ChunkPart::Text(fragment) = part {
                out.push_str(fragment);
            }
        }
        out
    }
}
