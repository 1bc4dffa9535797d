//! Error types for the IRC line grammar.
//!
//! Parsing has exactly one failure mode, [`InvalidMessage`]. The
//! transport-level [`ProtocolError`] wraps it together with the I/O and
//! framing failures a connection can run into.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// A line that does not match the message grammar.
///
/// Raised only on structural mismatch: no command token could be extracted
/// (empty or all-space line, a line that is only tag/sender prefixes), or a
/// bare CR/LF sits somewhere other than the end of the line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid message: {line:?}")]
pub struct InvalidMessage {
    line: String,
    position: usize,
    context: Option<&'static str>,
}

impl InvalidMessage {
    pub(crate) fn new(line: &str, position: usize, context: Option<&'static str>) -> Self {
        InvalidMessage {
            line: line.to_owned(),
            position,
            context,
        }
    }

    /// The offending line, exactly as it was handed to the parser.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Byte offset into [`line`](Self::line) where the grammar stopped matching.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The segment being parsed when matching failed, if known.
    pub fn context(&self) -> Option<&'static str> {
        self.context
    }

    /// Multi-line diagnostic pointing at the failure position.
    pub fn describe(&self) -> String {
        let mut out = format!("parse error at position {}", self.position);
        if let Some(ctx) = self.context {
            out.push_str(" while ");
            out.push_str(ctx);
        }
        match self.line.get(..self.position) {
            Some(before) if self.position < self.line.len() => {
                out.push_str("\n  input: ");
                out.push_str(before);
                out.push_str("<<<HERE>>>");
                out.push_str(&self.line[self.position..]);
            }
            _ => {
                out.push_str("\n  input: ");
                out.push_str(&self.line);
                out.push_str("<<<EOF>>>");
            }
        }
        out
    }
}

/// Top-level protocol errors raised by the line codec and client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Line exceeded the configured maximum length.
    #[error("message too long: {0} bytes")]
    MessageTooLong(usize),

    /// A received line did not match the message grammar.
    #[error(transparent)]
    InvalidMessage(#[from] InvalidMessage),
}
