//! Line framing for IRC byte streams.
//!
//! [`LineCodec`] splits incoming bytes on `\n`, strips the terminator and
//! decodes UTF-8. It does not parse; the [`Client`](crate::Client) does that.
//!
//! Problems confined to one line (too long, not UTF-8) are yielded as
//! [`Frame`] items rather than decoder errors, so the framed stream keeps
//! going after them. The decoder's own error is left for I/O failures.

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::command::Outbound;
use crate::encode::IrcEncode;
use crate::error::ProtocolError;

/// Longest line accepted by default, tags included.
pub const MAX_LINE_LEN: usize = 8191;

/// One decoded line, or the reason that line was dropped.
pub type Frame = Result<String, ProtocolError>;

/// A line-based codec for IRC text.
#[derive(Debug, Clone)]
pub struct LineCodec {
    next_index: usize,
    max_length: usize,
    /// Set after an overlong line was reported before its `\n` arrived.
    /// Bytes are dropped up to and including the next `\n`.
    discarding: bool,
}

impl LineCodec {
    pub fn new() -> LineCodec {
        LineCodec::with_max_length(MAX_LINE_LEN)
    }

    /// Reject lines longer than `max_length` bytes, terminator included.
    pub fn with_max_length(max_length: usize) -> LineCodec {
        LineCodec {
            next_index: 0,
            max_length,
            discarding: false,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn take_line(&mut self, src: &mut BytesMut, len: usize) -> Frame {
        self.next_index = 0;
        let bytes = src.split_to(len);
        let mut line = String::from_utf8(bytes.to_vec())?;
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        LineCodec::new()
    }
}

impl Decoder for LineCodec {
    type Item = Frame;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, ProtocolError> {
        loop {
            let newline = src[self.next_index..].iter().position(|&b| b == b'\n');

            match (self.discarding, newline) {
                (true, Some(offset)) => {
                    src.advance(self.next_index + offset + 1);
                    self.next_index = 0;
                    self.discarding = false;
                }
                (true, None) => {
                    self.next_index = 0;
                    src.clear();
                    return Ok(None);
                }
                (false, Some(offset)) => {
                    let line_len = self.next_index + offset + 1;
                    if line_len > self.max_length {
                        self.next_index = 0;
                        src.advance(line_len);
                        return Ok(Some(Err(ProtocolError::MessageTooLong(line_len))));
                    }
                    return Ok(Some(self.take_line(src, line_len)));
                }
                (false, None) if src.len() > self.max_length => {
                    let len = src.len();
                    self.next_index = 0;
                    self.discarding = true;
                    src.clear();
                    return Ok(Some(Err(ProtocolError::MessageTooLong(len))));
                }
                (false, None) => {
                    self.next_index = src.len();
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, ProtocolError> {
        if let Some(frame) = self.decode(src)? {
            return Ok(Some(frame));
        }
        self.discarding = false;
        if src.is_empty() {
            return Ok(None);
        }
        let len = src.len();
        Ok(Some(self.take_line(src, len)))
    }
}

/// Pre-formatted text is written as-is; it must carry its own terminator.
impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        dst.extend_from_slice(line.as_bytes());
        Ok(())
    }
}

impl<'a> Encoder<Outbound<'a>> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, cmd: Outbound<'a>, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        cmd.encode(&mut dst.writer())?;
        Ok(())
    }
}
