//! Operator block configuration.

use serde::Deserialize;

/// Operator block configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OperBlock {
    /// Operator name (used in OPER command).
    pub name: String,
    /// Password (plaintext or bcrypt hash).
    pub password: String,
}

impl OperBlock {
    /// The block used when the config file defines none.
    pub fn builtin() -> Self {
        Self {
            name: "admin".to_string(),
            password: "operpass".to_string(),
        }
    }

    /// Verify the provided password against the stored password (plaintext or bcrypt).
    pub fn verify_password(&self, password: &str) -> bool {
        if self.password.starts_with("$2") {
            bcrypt::verify(password, &self.password).unwrap_or(false)
        } else {
            self.password == password
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_password() {
        let block = OperBlock::builtin();
        assert!(block.verify_password("operpass"));
        assert!(!block.verify_password("wrong"));
    }

    #[test]
    fn bcrypt_password() {
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        let block = OperBlock {
            name: "root".into(),
            password: hash,
        };
        assert!(block.verify_password("hunter2"));
        assert!(!block.verify_password("hunter3"));
    }
}
