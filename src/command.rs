//! Client commands the formatter knows how to write.
//!
//! Arguments are written verbatim. Nothing is escaped or validated, so a
//! caller handing in CR/LF, or spaces inside a single-word token, gets a
//! broken line back.

use std::fmt;

use crate::encode::{fmt_encoded, IrcEncode, LINE_ENDING};

/// An outbound command with its arguments.
///
/// Each variant encodes to one or more terminated lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outbound<'a> {
    /// `NICK <nickname>` followed by `USER <nickname> 0 * :<nickname>`.
    Identity { nickname: &'a str },
    /// `PASS <password>`
    Authenticate { password: &'a str },
    /// `JOIN <channel>`
    Join { channel: &'a str },
    /// `PONG :<token>`, the reply to a server `PING`.
    KeepaliveReply { token: &'a str },
    /// `PRIVMSG <target> :<text>`
    SendMessage { target: &'a str, text: &'a str },
}

impl Outbound<'_> {
    /// Command token of the first line this command produces.
    pub fn command(&self) -> &'static str {
        match self {
            Outbound::Identity { .. } => "NICK",
            Outbound::Authenticate { .. } => "PASS",
            Outbound::Join { .. } => "JOIN",
            Outbound::KeepaliveReply { .. } => "PONG",
            Outbound::SendMessage { .. } => "PRIVMSG",
        }
    }

    /// The encoded lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.to_string()
            .split_terminator(LINE_ENDING)
            .map(str::to_owned)
            .collect()
    }
}

/// Writes every line of the command, each with its terminator.
impl fmt::Display for Outbound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_encoded(f, |buf| self.encode(buf))
    }
}
