//! # ircwire
//!
//! A Rust library for the IRC line grammar: a permissive parser that turns
//! one text line into a structured [`Message`], and a formatter that writes
//! the handful of client commands a simple bot needs.
//!
//! ## Features
//!
//! - Parsing of optional tags, optional sender, command, middle parameters
//!   and the colon-introduced trailing parameter
//! - Typed [`InvalidMessage`] error carrying the offending line
//! - Zero-copy parsing with the borrowed [`MessageRef`] type
//! - Outbound formatting for registration, `PASS`, `JOIN`, `PONG` and `PRIVMSG`
//! - Optional Tokio integration: a line codec and an async client
//!
//! ## Grammar
//!
//! ```text
//! [@<tags> ][:<sender> ]<command>[ <param>]*[ :<trailing>]
//! ```
//!
//! Segments are separated by runs of spaces; multiple spaces never produce
//! empty parameters. The trailing parameter is taken verbatim, so it keeps
//! its spaces and colons and may be empty.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing IRC Messages
//!
//! ```rust
//! use ircwire::Message;
//!
//! let raw = "@time=2023-01-01T12:00:00Z :nick!user@host PRIVMSG #channel :Hello there!";
//! let message: Message = raw.parse().expect("Valid IRC message");
//!
//! assert_eq!(message.tags(), Some("time=2023-01-01T12:00:00Z"));
//! assert_eq!(message.sender_nick(), Some("nick"));
//! assert_eq!(message.params(), ["#channel", "Hello there!"]);
//!
//! assert!(ircwire::parse("").is_err());
//! ```
//!
//! ### Formatting Outbound Lines
//!
//! ```rust
//! use ircwire::format;
//!
//! assert_eq!(format::identity("bot"), "NICK bot\r\nUSER bot 0 * :bot\r\n");
//! assert_eq!(format::send_message("#rust", "hi all"), "PRIVMSG #rust :hi all\r\n");
//! ```

pub mod command;
pub mod encode;
pub mod error;
pub mod format;
pub mod message;

#[cfg(feature = "tokio")]
pub mod client;
#[cfg(feature = "tokio")]
pub mod line;

pub use self::command::Outbound;
pub use self::encode::IrcEncode;
pub use self::error::{InvalidMessage, ProtocolError};
pub use self::message::{Message, MessageRef};

#[cfg(feature = "tokio")]
pub use self::client::Client;
#[cfg(feature = "tokio")]
pub use self::line::{Frame, LineCodec, MAX_LINE_LEN};

/// Parse one line into a [`Message`].
///
/// Shorthand for [`Message::parse`].
pub fn parse(line: &str) -> Result<Message, InvalidMessage> {
    Message::parse(line)
}
