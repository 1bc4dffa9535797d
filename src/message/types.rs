//! The owned message type.

use std::fmt;
use std::str::FromStr;

use crate::encode::{fmt_encoded, write_message};
use crate::error::InvalidMessage;

use super::nom_parser::ParsedMessage;

/// One IRC line, split into its grammar segments.
///
/// A `Message` is only ever produced by parsing and is read-only afterwards.
/// The original line is kept verbatim in [`raw`](Self::raw).
///
/// # Example
///
/// ```
/// use ircwire::Message;
///
/// let msg = Message::parse(":coolguy foo bar baz :asdf quux").unwrap();
/// assert_eq!(msg.sender(), Some("coolguy"));
/// assert_eq!(msg.command(), "foo");
/// assert_eq!(msg.params(), ["bar", "baz", "asdf quux"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    tags: Option<String>,
    sender: Option<String>,
    command: String,
    params: Vec<String>,
    raw: String,
}

impl Message {
    /// Parse one line. Trailing CR/LF is ignored.
    pub fn parse(line: &str) -> Result<Message, InvalidMessage> {
        let parsed = ParsedMessage::parse(line)?;

        Ok(Message::from_parts(
            parsed.tags.map(str::to_owned),
            parsed.sender.map(str::to_owned),
            parsed.command.to_owned(),
            parsed.params.into_iter().map(str::to_owned).collect(),
            line.to_owned(),
        ))
    }

    pub(crate) fn from_parts(
        tags: Option<String>,
        sender: Option<String>,
        command: String,
        params: Vec<String>,
        raw: String,
    ) -> Message {
        Message {
            tags,
            sender,
            command,
            params,
            raw,
        }
    }

    /// The unparsed tag blob, without the leading `@`.
    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    /// The unparsed origin prefix, without the leading `:`.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Nickname part of the sender: everything before the first `!`.
    ///
    /// Server senders have no `!` and are returned whole.
    pub fn sender_nick(&self) -> Option<&str> {
        self.sender()
            .map(|s| s.split_once('!').map_or(s, |(nick, _)| nick))
    }

    /// The command token, e.g. `PRIVMSG` or `001`.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// All parameters in order, the trailing one included.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Parameter at `index`, if present.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// The final parameter, which is where free text usually lives.
    pub fn last_param(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }

    /// The line this message was parsed from, unmodified.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Message {
    type Err = InvalidMessage;

    fn from_str(s: &str) -> Result<Message, InvalidMessage> {
        Message::parse(s)
    }
}

/// Writes the canonical wire form, without a line terminator.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_encoded(f, |buf| {
            write_message(
                buf,
                self.tags(),
                self.sender(),
                &self.command,
                self.params.as_slice(),
            )
        })
    }
}
