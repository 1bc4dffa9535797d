use std::fmt;

use crate::encode::{fmt_encoded, write_message};
use crate::error::InvalidMessage;

use super::nom_parser::ParsedMessage;
use super::types::Message;

/// A parsed message borrowing from the line it was parsed from.
///
/// Parsing into a `MessageRef` copies no string data; convert with
/// [`to_owned_message`](Self::to_owned_message) when the message has to
/// outlive the input buffer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MessageRef<'a> {
    tags: Option<&'a str>,
    sender: Option<&'a str>,
    command: &'a str,
    params: Vec<&'a str>,
    raw: &'a str,
}

impl<'a> MessageRef<'a> {
    /// Parse one line without copying. Trailing CR/LF is ignored.
    pub fn parse(s: &'a str) -> Result<MessageRef<'a>, InvalidMessage> {
        let parsed = ParsedMessage::parse(s)?;

        Ok(MessageRef {
            tags: parsed.tags,
            sender: parsed.sender,
            command: parsed.command,
            params: parsed.params,
            raw: s,
        })
    }

    /// The unparsed tag blob, without the leading `@`.
    pub fn tags(&self) -> Option<&'a str> {
        self.tags
    }

    /// The unparsed origin prefix, without the leading `:`.
    pub fn sender(&self) -> Option<&'a str> {
        self.sender
    }

    /// The command token.
    pub fn command(&self) -> &'a str {
        self.command
    }

    /// All parameters in order, the trailing one included.
    pub fn params(&self) -> &[&'a str] {
        &self.params
    }

    /// Parameter at `index`, if present.
    pub fn param(&self, index: usize) -> Option<&'a str> {
        self.params.get(index).copied()
    }

    /// The input line, unmodified.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Copy into an owned [`Message`].
    pub fn to_owned_message(&self) -> Message {
        Message::from_parts(
            self.tags.map(str::to_owned),
            self.sender.map(str::to_owned),
            self.command.to_owned(),
            self.params.iter().map(|p| (*p).to_owned()).collect(),
            self.raw.to_owned(),
        )
    }
}

impl fmt::Display for MessageRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_encoded(f, |buf| {
            write_message(buf, self.tags, self.sender, self.command, self.params.as_slice())
        })
    }
}
