//! Incremental NDJSON line framing for the generation stream.
//!
//! The generation service responds with a chunked body of newline-delimited
//! JSON records. Chunk boundaries are arbitrary: a chunk may end mid-line or
//! mid-character, so the framer buffers raw bytes across reads and only
//! releases complete lines. A multi-byte UTF-8 sequence split across chunks
//! stays in the buffer until its line completes, which is what makes the
//! decode step stateful rather than per-chunk.

use super::types::StreamRecord;

/// Errors produced while decoding one framed line into a [`StreamRecord`].
///
/// A malformed line is dropped with a warning and never aborts the stream.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid UTF-8 in record: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid JSON in record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Splits an incoming byte stream into complete lines, carrying any trailing
/// partial line over to the next read.
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: Vec<u8>,
}

impl LineFramer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of bytes and get back every line completed by it.
    ///
    /// Returned lines exclude the `\n` terminator; a trailing `\r` is also
    /// stripped so CRLF framing is tolerated.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Vec<u8>> {
        self.buf.extend_from_slice(bytes);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(line);
        }
        lines
    }

    /// Flush the remainder at end of stream.
    ///
    /// The final line of the body is not guaranteed to be newline-terminated,
    /// so whatever is still buffered is handed to the decoder as one last
    /// line.
    #[must_use]
    pub fn finish(self) -> Option<Vec<u8>> {
        if self.buf.is_empty() { None } else { Some(self.buf) }
    }
}

/// Decode one complete line into a [`StreamRecord`].
///
/// Blank lines are not records and yield `Ok(None)`.
///
/// # Errors
///
/// Returns a [`RecordError`] if the line is not valid UTF-8 or not a valid
/// JSON object; the caller drops the line and continues.
pub fn decode_record(line: &[u8]) -> Result<Option<StreamRecord>, RecordError> {
    let text = std::str::from_utf8(line)?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    let record: StreamRecord = serde_json::from_str(text)?;
    Ok(Some(record))
}

#[cfg(test)]
#[path = "stream_test.rs"]
mod tests;
