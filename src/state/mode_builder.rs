//! Accumulates applied mode changes into one summary line.
//!
//! ```ignore
//! let mut builder = ModeChangeBuilder::new();
//! builder.push(true, 'k', Some("key".into()));
//! builder.push(true, 'l', Some("3".into()));
//! builder.push(false, 'i', None);
//! assert_eq!(builder.build(), Some(vec!["+kl-i".into(), "key".into(), "3".into()]));
//! ```

/// Builder for the `MODE` parameters that describe applied changes.
///
/// A sign is written only when it differs from the previous one, and
/// arguments follow in the order their letters were applied.
#[derive(Debug, Clone, Default)]
pub struct ModeChangeBuilder {
    modes: String,
    args: Vec<String>,
    sign: Option<bool>,
}

impl ModeChangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one applied change.
    pub fn push(&mut self, adding: bool, letter: char, arg: Option<String>) {
        if self.sign != Some(adding) {
            self.modes.push(if adding { '+' } else { '-' });
            self.sign = Some(adding);
        }
        self.modes.push(letter);
        self.args.extend(arg);
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// The mode string followed by its arguments, or `None` when nothing
    /// was applied.
    pub fn build(self) -> Option<Vec<String>> {
        if self.is_empty() {
            return None;
        }
        let mut params = Vec::with_capacity(1 + self.args.len());
        params.push(self.modes);
        params.extend(self.args);
        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        assert!(ModeChangeBuilder::new().build().is_none());
    }

    #[test]
    fn test_sign_grouping() {
        let mut builder = ModeChangeBuilder::new();
        builder.push(true, 'k', Some("key".into()));
        builder.push(true, 'l', Some("3".into()));
        builder.push(false, 'i', None);
        builder.push(true, 'o', Some("bob".into()));
        assert_eq!(
            builder.build(),
            Some(vec![
                "+kl-i+o".to_string(),
                "key".to_string(),
                "3".to_string(),
                "bob".to_string()
            ])
        );
    }
}
