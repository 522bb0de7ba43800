//! Connection handles.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier for one client connection.
///
/// Issued once per accepted socket and never reused during the process
/// lifetime. Sessions and channel memberships refer to connections only
/// through this handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnId(u64);

impl ConnId {
    #[cfg(test)]
    pub const fn new(n: u64) -> Self {
        Self(n)
    }
}

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Generates monotonically increasing [`ConnId`]s.
pub struct ConnIdGenerator {
    counter: AtomicU64,
}

impl ConnIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Generate the next unique id.
    pub fn next(&self) -> ConnId {
        ConnId(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ConnIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let generator = ConnIdGenerator::new();
        let a = generator.next();
        let b = generator.next();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(a.to_string(), "c1");
        assert_eq!(b.to_string(), "c2");
    }
}
