//! Test IRC client.
//!
//! A line-oriented client: everything is sent and received as raw wire
//! text so assertions stay byte-exact.

use std::time::Duration;

use ircserv_proto::{Command, Message};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// A test IRC client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        })
    }

    /// Send a raw IRC line; CRLF is appended when missing.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with("\r\n") {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Send raw bytes exactly as given, without a line terminator.
    #[allow(dead_code)]
    pub async fn send_bytes(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(data).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Send a typed IRC command.
    #[allow(dead_code)]
    pub async fn send(&mut self, cmd: Command) -> anyhow::Result<()> {
        let msg = Message::from(cmd);
        self.send_raw(&msg.to_string()).await
    }

    /// Receive one line, without its CRLF.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive one line with a timeout. EOF is an error.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n > 0, "connection closed");
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Receive and parse one message.
    #[allow(dead_code)]
    pub async fn recv_message(&mut self) -> anyhow::Result<Message> {
        let line = self.recv().await?;
        line.parse::<Message>()
            .map_err(|e| anyhow::anyhow!("Parse error: {e}"))
    }

    /// Receive lines until the predicate matches; the matching line is
    /// included.
    pub async fn recv_until<F>(&mut self, mut predicate: F) -> anyhow::Result<Vec<String>>
    where
        F: FnMut(&str) -> bool,
    {
        let mut lines = Vec::new();
        loop {
            let line = self.recv().await?;
            let done = predicate(&line);
            lines.push(line);
            if done {
                return Ok(lines);
            }
        }
    }

    /// Assert that nothing arrives for a short while.
    #[allow(dead_code)]
    pub async fn expect_silence(&mut self) -> anyhow::Result<()> {
        match self.recv_timeout(Duration::from_millis(200)).await {
            Ok(line) => anyhow::bail!("unexpected line: {line}"),
            Err(_) => Ok(()),
        }
    }

    /// Whether the server closed the socket (EOF before any more data).
    #[allow(dead_code)]
    pub async fn is_closed(&mut self) -> bool {
        let mut line = String::new();
        matches!(
            timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await,
            Ok(Ok(0)) | Ok(Err(_))
        )
    }

    /// PASS/NICK/USER and wait for RPL_MYINFO (004).
    pub async fn register(&mut self, password: &str, nick: &str) -> anyhow::Result<Vec<String>> {
        self.send_raw(&format!("PASS {password}")).await?;
        self.send_raw(&format!("NICK {nick}")).await?;
        self.send_raw(&format!("USER {} 0 * :{nick} Test", nick.to_lowercase()))
            .await?;
        self.recv_until(|line| is_numeric(line, "004")).await
    }
}

/// Whether `line` is a numeric reply with the given three-digit code.
pub fn is_numeric(line: &str, code: &str) -> bool {
    line.split(' ').nth(1) == Some(code)
}
