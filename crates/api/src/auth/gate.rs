//! Single-secret admin credential check.
//!
//! The reference hash is produced out-of-band (see the
//! `hash-admin-password` binary), stored in a local file, and read once at
//! startup. Every check after that is a stateless comparison.

use std::path::{Path, PathBuf};

use argon2::password_hash::PasswordHash;

use crate::auth::password::verify_password;

/// Outcome of an admin credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Denied,
}

/// Startup failures while loading the reference hash.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Cannot read admin hash file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Admin hash is not a valid PHC string: {0}")]
    Malformed(argon2::password_hash::Error),
}

/// Holds the admin password hash and checks submitted secrets against it.
#[derive(Debug, Clone)]
pub struct AdminGate {
    hash: String,
}

impl AdminGate {
    /// Build a gate from a PHC hash string, rejecting anything unparseable.
    pub fn from_hash(hash: impl Into<String>) -> Result<Self, GateError> {
        let hash = hash.into().trim().to_string();
        PasswordHash::new(&hash).map_err(GateError::Malformed)?;
        Ok(Self { hash })
    }

    /// Read the reference hash from `path`. Surrounding whitespace
    /// (a trailing newline, typically) is ignored.
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let contents = std::fs::read_to_string(path).map_err(|source| GateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_hash(contents)
    }

    /// Compare `submitted` with the reference hash.
    ///
    /// Wrong secrets and verification errors both yield
    /// [`Verdict::Denied`]; callers cannot tell them apart.
    pub fn verify(&self, submitted: &str) -> Verdict {
        match verify_password(submitted, &self.hash) {
            Ok(true) => Verdict::Allowed,
            Ok(false) => Verdict::Denied,
            Err(e) => {
                tracing::warn!(error = %e, "Admin password verification failed");
                Verdict::Denied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;
    use crate::auth::password::hash_password;

    #[test]
    fn correct_secret_is_allowed() {
        let gate = AdminGate::from_hash(hash_password("hunter2").unwrap()).unwrap();
        assert_eq!(gate.verify("hunter2"), Verdict::Allowed);
    }

    #[test]
    fn wrong_or_empty_secret_is_denied() {
        let gate = AdminGate::from_hash(hash_password("hunter2").unwrap()).unwrap();
        assert_eq!(gate.verify("hunter3"), Verdict::Denied);
        assert_eq!(gate.verify(""), Verdict::Denied);
    }

    #[test]
    fn malformed_reference_hash_is_rejected() {
        assert_matches!(
            AdminGate::from_hash("plaintext-password"),
            Err(GateError::Malformed(_))
        );
    }

    #[test]
    fn load_ignores_trailing_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", hash_password("s3cret").unwrap()).unwrap();

        let gate = AdminGate::load(file.path()).unwrap();
        assert_eq!(gate.verify("s3cret"), Verdict::Allowed);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(".hashedpass");
        assert_matches!(AdminGate::load(&missing), Err(GateError::Read { .. }));
    }
}
