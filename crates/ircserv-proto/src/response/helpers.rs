//! Code conversion and classification for [`Response`].

use super::Response;
use std::fmt;
use std::str::FromStr;

impl Response {
    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Creates a Response from a numeric code
    pub fn from_code(code: u16) -> Option<Response> {
        Response::ALL.iter().copied().find(|r| r.code() == code)
    }

    /// Check if this is an error response (400-599)
    #[inline]
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Error returned when a string is not a known three-digit numeric.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown response code {0:?}")]
pub struct ParseResponseError(pub String);

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseResponseError(s.to_owned()));
        }
        s.parse::<u16>()
            .ok()
            .and_then(Response::from_code)
            .ok_or_else(|| ParseResponseError(s.to_owned()))
    }
}
