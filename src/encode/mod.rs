//! Encoding of IRC lines.
//!
//! This module provides the [`IrcEncode`] trait for writing messages and
//! outbound commands directly to byte buffers without intermediate `String`
//! allocations. The `Display` impls of [`Message`](crate::Message) and
//! [`Outbound`](crate::Outbound) go through the same writers.
//!
//! # Example
//!
//! ```
//! use ircwire::encode::IrcEncode;
//! use ircwire::Outbound;
//!
//! let cmd = Outbound::SendMessage { target: "#channel", text: "Hello!" };
//! let mut buf = Vec::new();
//! cmd.encode(&mut buf).unwrap();
//!
//! assert_eq!(&buf, b"PRIVMSG #channel :Hello!\r\n");
//! ```

use std::fmt;
use std::io::{self, Write};

mod command;
mod message;

/// Terminator appended to every encoded line.
pub const LINE_ENDING: &str = "\r\n";

/// A trait for encoding IRC protocol elements directly to a byte stream.
///
/// # Implementors
///
/// - [`Message`](crate::Message) - Owned IRC message
/// - [`MessageRef`](crate::MessageRef) - Borrowed IRC message
/// - [`Outbound`](crate::Outbound) - Client command, one or more lines
pub trait IrcEncode {
    /// Encode this value, including line terminators, to the given writer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write fails.
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize>;

    /// Encode this value to a new `Vec<u8>`.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        let _ = self.encode(&mut buf);
        buf
    }
}

#[inline]
pub(crate) fn put<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<usize> {
    w.write_all(bytes)?;
    Ok(bytes.len())
}

/// Check if a string needs colon-prefixing as a trailing IRC argument.
#[inline]
pub(crate) fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Write a command with arguments. The last argument gets a `:` prefix if needed.
pub(crate) fn write_cmd<W: Write, S: AsRef<str>>(
    w: &mut W,
    cmd: &str,
    args: &[S],
) -> io::Result<usize> {
    let mut written = put(w, cmd.as_bytes())?;

    let Some((trailing, middle)) = args.split_last() else {
        return Ok(written);
    };

    for param in middle {
        written += put(w, b" ")?;
        written += put(w, param.as_ref().as_bytes())?;
    }

    written += put(w, b" ")?;
    let trailing = trailing.as_ref();
    if needs_colon_prefix(trailing) {
        written += put(w, b":")?;
    }
    written += put(w, trailing.as_bytes())?;
    Ok(written)
}

/// Write a command with a freeform (always colon-prefixed) trailing argument.
pub(crate) fn write_cmd_freeform<W: Write>(
    w: &mut W,
    cmd: &str,
    args: &[&str],
) -> io::Result<usize> {
    let mut written = put(w, cmd.as_bytes())?;

    let Some((last, middle)) = args.split_last() else {
        return Ok(written);
    };

    for arg in middle {
        written += put(w, b" ")?;
        written += put(w, arg.as_bytes())?;
    }

    written += put(w, b" :")?;
    written += put(w, last.as_bytes())?;
    Ok(written)
}

/// Write `[@tags ][:sender ]command[ params]` with no terminator.
pub(crate) fn write_message<W: Write, S: AsRef<str>>(
    w: &mut W,
    tags: Option<&str>,
    sender: Option<&str>,
    command: &str,
    params: &[S],
) -> io::Result<usize> {
    let mut written = 0;

    if let Some(tags) = tags {
        written += put(w, b"@")?;
        written += put(w, tags.as_bytes())?;
        written += put(w, b" ")?;
    }

    if let Some(sender) = sender {
        written += put(w, b":")?;
        written += put(w, sender.as_bytes())?;
        written += put(w, b" ")?;
    }

    written += write_cmd(w, command, params)?;
    Ok(written)
}

/// Run an encoder into a scratch buffer and hand the text to a formatter.
pub(crate) fn fmt_encoded<F>(f: &mut fmt::Formatter<'_>, encode: F) -> fmt::Result
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<usize>,
{
    let mut buf = Vec::with_capacity(512);
    encode(&mut buf).map_err(|_| fmt::Error)?;
    f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
}
