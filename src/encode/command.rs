//! Outbound command encoding implementation.

use std::io::{self, Write};

use crate::command::Outbound;

use super::{put, write_cmd, write_cmd_freeform, IrcEncode, LINE_ENDING};

fn end_line<W: Write>(w: &mut W) -> io::Result<usize> {
    put(w, LINE_ENDING.as_bytes())
}

impl IrcEncode for Outbound<'_> {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let written = match *self {
            Outbound::Identity { nickname } => {
                let written = write_cmd(w, "NICK", &[nickname])? + end_line(w)?;
                written + write_cmd_freeform(w, "USER", &[nickname, "0", "*", nickname])?
            }
            Outbound::Authenticate { password } => write_cmd(w, "PASS", &[password])?,
            Outbound::Join { channel } => write_cmd(w, "JOIN", &[channel])?,
            Outbound::KeepaliveReply { token } => write_cmd_freeform(w, "PONG", &[token])?,
            Outbound::SendMessage { target, text } => {
                write_cmd_freeform(w, "PRIVMSG", &[target, text])?
            }
        };
        Ok(written + end_line(w)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_identity() {
        let bytes = Outbound::Identity { nickname: "guest" }.to_bytes();
        assert_eq!(&bytes, b"NICK guest\r\nUSER guest 0 * :guest\r\n");
    }

    #[test]
    fn test_encode_authenticate() {
        let bytes = Outbound::Authenticate { password: "oauth:abc123" }.to_bytes();
        assert_eq!(&bytes, b"PASS oauth:abc123\r\n");
    }

    #[test]
    fn test_encode_join() {
        let bytes = Outbound::Join { channel: "#rust" }.to_bytes();
        assert_eq!(&bytes, b"JOIN #rust\r\n");
    }

    #[test]
    fn test_encode_keepalive_reply() {
        let bytes = Outbound::KeepaliveReply { token: "tmi.twitch.tv" }.to_bytes();
        assert_eq!(&bytes, b"PONG :tmi.twitch.tv\r\n");
    }

    #[test]
    fn test_encode_send_message() {
        let bytes = Outbound::SendMessage {
            target: "#rust",
            text: "hello :) world",
        }
        .to_bytes();
        assert_eq!(&bytes, b"PRIVMSG #rust :hello :) world\r\n");
    }

    #[test]
    fn test_encode_returns_byte_count() {
        let cmd = Outbound::Identity { nickname: "someone" };
        let mut buf = Vec::new();
        let written = cmd.encode(&mut buf).unwrap();
        assert_eq!(written, buf.len());
    }
}
