//! Command-line arguments.

use thiserror::Error;

/// Printed to stderr on any argument error.
pub const USAGE: &str = "usage: ircserv <port> <password>";

const MIN_PORT: u16 = 1024;
const MAX_PASSWORD_LEN: usize = 18;

/// Why the command line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("expected exactly 2 arguments, got {0}")]
    ArgCount(usize),
    #[error("invalid port {0:?}: must be an integer in 1024..=65535")]
    InvalidPort(String),
    #[error("password is longer than 18 characters")]
    PasswordTooLong,
}

/// Parsed `ircserv <port> <password>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub port: u16,
    /// `None` when the password argument is empty (no PASS required).
    pub password: Option<String>,
}

impl Args {
    /// Parse the arguments following the program name.
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let [port, password] = args.as_slice() else {
            return Err(UsageError::ArgCount(args.len()));
        };

        let port = match port.parse::<u16>() {
            Ok(p) if p >= MIN_PORT => p,
            _ => return Err(UsageError::InvalidPort(port.clone())),
        };

        if password.chars().count() > MAX_PASSWORD_LEN {
            return Err(UsageError::PasswordTooLong);
        }

        Ok(Self {
            port,
            password: (!password.is_empty()).then(|| password.clone()),
        })
    }
}
