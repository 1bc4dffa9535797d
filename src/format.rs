//! One function per supported outbound command.
//!
//! Each returns the complete, terminated text ready for a transport to
//! write. They are thin wrappers over [`Outbound`]; use that type directly
//! to encode into an existing buffer.
//!
//! ```
//! use ircwire::format;
//!
//! assert_eq!(format::join("#rust"), "JOIN #rust\r\n");
//! assert_eq!(format::keepalive_reply("irc.example.net"), "PONG :irc.example.net\r\n");
//! ```

use crate::command::Outbound;

/// `NICK` and `USER` registration lines for `nickname`.
pub fn identity(nickname: &str) -> String {
    Outbound::Identity { nickname }.to_string()
}

/// `PASS` line carrying `password`.
pub fn authenticate(password: &str) -> String {
    Outbound::Authenticate { password }.to_string()
}

/// `JOIN` line for `channel`.
pub fn join(channel: &str) -> String {
    Outbound::Join { channel }.to_string()
}

/// `PONG` echoing the token of a received `PING`.
pub fn keepalive_reply(token: &str) -> String {
    Outbound::KeepaliveReply { token }.to_string()
}

/// `PRIVMSG` line delivering `text` to `target`, always as a trailing parameter.
pub fn send_message(target: &str, text: &str) -> String {
    Outbound::SendMessage { target, text }.to_string()
}
