//! Message encoding implementation.

use std::io::{self, Write};

use crate::message::{Message, MessageRef};

use super::{put, write_message, IrcEncode, LINE_ENDING};

impl IrcEncode for Message {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let written = write_message(
            w,
            self.tags(),
            self.sender(),
            self.command(),
            self.params(),
        )?;
        Ok(written + put(w, LINE_ENDING.as_bytes())?)
    }
}

impl IrcEncode for MessageRef<'_> {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let written = write_message(
            w,
            self.tags(),
            self.sender(),
            self.command(),
            self.params(),
        )?;
        Ok(written + put(w, LINE_ENDING.as_bytes())?)
    }
}
