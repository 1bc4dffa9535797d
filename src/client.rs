//! Async connection glue around the parser and formatter.
//!
//! [`Client`] owns one byte stream, hands each received line to
//! [`Message::parse`] and writes [`Outbound`] commands back. It keeps no
//! protocol state: registration, channel membership and reply policy belong
//! to the caller.

use anyhow::Context as _;
use futures_util::{SinkExt, Stream, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{debug, trace, Level};

use crate::command::Outbound;
use crate::error::ProtocolError;
use crate::line::{Frame, LineCodec};
use crate::message::Message;

fn read_frame(frame: Result<Frame, ProtocolError>) -> Result<Message, ProtocolError> {
    let line = frame?.map_err(|e| {
        debug!("dropped line: {}", e);
        e
    })?;
    trace!("<= {}", line);
    Message::parse(&line).map_err(|e| {
        debug!("unparseable line: {}", e.describe());
        ProtocolError::from(e)
    })
}

/// A line-oriented IRC connection.
pub struct Client<S> {
    framed: Framed<S, LineCodec>,
}

impl Client<TcpStream> {
    /// Open a plain TCP connection, e.g. `Client::connect("irc.libera.chat:6667")`.
    pub async fn connect(addr: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .with_context(|| format!("failed to connect to {}", addr))?;
        debug!("connected to {}", addr);
        Ok(Client::new(stream))
    }
}

impl<S> Client<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Client::with_codec(stream, LineCodec::new())
    }

    pub fn with_codec(stream: S, codec: LineCodec) -> Self {
        Client {
            framed: Framed::new(stream, codec),
        }
    }

    /// Give back the underlying stream. Buffered but unread data is dropped.
    pub fn into_inner(self) -> S {
        self.framed.into_inner()
    }

    /// Wait for the next line and parse it.
    ///
    /// Returns `None` once the peer closes the connection. A line that fails
    /// to parse comes back as [`ProtocolError::InvalidMessage`]; the
    /// connection stays usable and the caller decides whether to go on. The
    /// same holds for lines the codec drops as
    /// [`ProtocolError::MessageTooLong`] or [`ProtocolError::Decode`].
    pub async fn next_message(&mut self) -> Option<Result<Message, ProtocolError>> {
        self.framed.next().await.map(read_frame)
    }

    /// Received messages as a stream, in arrival order.
    pub fn messages(&mut self) -> impl Stream<Item = Result<Message, ProtocolError>> + '_ {
        (&mut self.framed).map(read_frame)
    }

    pub async fn send(&mut self, cmd: Outbound<'_>) -> Result<(), ProtocolError> {
        if tracing::enabled!(Level::DEBUG) {
            for line in cmd.lines() {
                debug!("=> {}", line);
            }
        }
        self.framed.send(cmd).await
    }

    /// Send text that is already formatted and terminated.
    pub async fn send_line(&mut self, line: String) -> Result<(), ProtocolError> {
        debug!("=> {}", line.trim_end_matches(['\r', '\n']));
        self.framed.send(line).await
    }

    pub async fn nick(&mut self, nickname: &str) -> Result<(), ProtocolError> {
        self.send(Outbound::Identity { nickname }).await
    }

    pub async fn pass(&mut self, password: &str) -> Result<(), ProtocolError> {
        self.send(Outbound::Authenticate { password }).await
    }

    pub async fn join(&mut self, channel: &str) -> Result<(), ProtocolError> {
        self.send(Outbound::Join { channel }).await
    }

    pub async fn pong(&mut self, token: &str) -> Result<(), ProtocolError> {
        self.send(Outbound::KeepaliveReply { token }).await
    }

    pub async fn privmsg(&mut self, target: &str, text: &str) -> Result<(), ProtocolError> {
        self.send(Outbound::SendMessage { target, text }).await
    }
}
