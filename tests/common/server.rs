//! Test server management.
//!
//! Spawns the `ircserv` binary on a free port with its own config file in a
//! temporary directory.

use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tempfile::TempDir;
use tokio::time::sleep;

use super::client::TestClient;

/// Server password used by [`TestServer::spawn`].
pub const PASSWORD: &str = "secret";

/// Default config: a MOTD and one operator block.
const DEFAULT_CONFIG: &str = r#"
[server]
name = "irc.test.local"
host = "127.0.0.1"

[motd]
lines = ["Test Server"]

[[oper]]
name = "testop"
password = "testpass"
"#;

/// A test server instance.
pub struct TestServer {
    child: Child,
    port: u16,
    dir: TempDir,
}

impl TestServer {
    /// Spawn a server with the default config and password.
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with(DEFAULT_CONFIG, PASSWORD).await
    }

    /// Spawn a server with the given `server.conf` contents and password.
    pub async fn spawn_with(config: &str, password: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("server.conf"), config)?;

        let port = free_port()?;
        let child = Command::new(env!("CARGO_BIN_EXE_ircserv"))
            .arg(port.to_string())
            .arg(password)
            .env("IRCSERV_CONFIG", dir.path().join("server.conf"))
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .spawn()?;

        let server = Self { child, port, dir };
        server.wait_until_ready().await?;
        Ok(server)
    }

    /// Wait until the server is accepting connections.
    async fn wait_until_ready(&self) -> anyhow::Result<()> {
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(self.address()).await.is_ok() {
                return Ok(());
            }
            sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("Server failed to start within 5 seconds")
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    /// Path of the config file the server reads on REHASH.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("server.conf")
    }

    /// Open a connection without registering.
    pub async fn connect(&self) -> anyhow::Result<TestClient> {
        TestClient::connect(&self.address()).await
    }

    /// Open a connection and complete registration as `nick`.
    #[allow(dead_code)]
    pub async fn register(&self, nick: &str) -> anyhow::Result<TestClient> {
        let mut client = self.connect().await?;
        client.register(PASSWORD, nick).await?;
        Ok(client)
    }

    /// Wait for the process to exit on its own.
    #[allow(dead_code)]
    pub async fn wait_exit(&mut self, within: Duration) -> anyhow::Result<std::process::ExitStatus> {
        let deadline = tokio::time::Instant::now() + within;
        loop {
            if let Some(status) = self.child.try_wait()? {
                return Ok(status);
            }
            if tokio::time::Instant::now() >= deadline {
                anyhow::bail!("server still running after {within:?}");
            }
            sleep(Duration::from_millis(50)).await;
        }
    }

    /// Deliver a signal to the server process.
    #[allow(dead_code)]
    pub fn signal(&self, name: &str) -> anyhow::Result<()> {
        let status = Command::new("kill")
            .arg(format!("-{name}"))
            .arg(self.child.id().to_string())
            .status()?;
        anyhow::ensure!(status.success(), "kill -{name} failed");
        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
