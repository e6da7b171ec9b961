//! Sign-in session
//!
//! Stand-in authentication: any name and email are accepted and remembered
//! in `session.json` until logout. Store commands are gated on
//! [`Session::is_authenticated`].

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::storage::{read_json_optional, write_json_atomic};

/// Display details of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// What the rest of the application needs from authentication
pub trait Session {
    fn is_authenticated(&self) -> bool;

    fn user(&self) -> Option<&User>;

    fn logout(&mut self) -> TrackerResult<()>;

    /// Fail with [`TrackerError::Unauthenticated`] unless signed in
    fn require_authenticated(&self) -> TrackerResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(TrackerError::Unauthenticated)
        }
    }
}

/// Session persisted as a small JSON file
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
    user: Option<User>,
}

impl FileSession {
    /// Load the session for an installation. An unreadable file counts as
    /// signed out.
    pub fn load(paths: &TrackerPaths) -> Self {
        let path = paths.session_file();
        let user = match read_json_optional::<User, _>(&path) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("ignoring unreadable session file: {}", e);
                None
            }
        };
        Self { path, user }
    }

    /// Sign in. Credentials are not checked.
    pub fn login(&mut self, name: &str, email: &str) -> TrackerResult<&User> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(TrackerError::Validation(
                "Please fill in all fields".into(),
            ));
        }

        let user = User {
            name: name.to_string(),
            email: email.to_string(),
        };
        write_json_atomic(&self.path, &user)?;
        Ok(self.user.insert(user))
    }
}

impl Session for FileSession {
    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn logout(&mut self) -> TrackerResult<()> {
        self.user = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(temp_dir: &TempDir) -> TrackerPaths {
        TrackerPaths::with_base_dir(temp_dir.path().to_path_buf())
    }

    #[test]
    fn test_starts_signed_out() {
        let temp_dir = TempDir::new().unwrap();
        let session = FileSession::load(&paths(&temp_dir));
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.require_authenticated(),
            Err(TrackerError::Unauthenticated)
        ));
    }

    #[test]
    fn test_login_persists_until_logout() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = FileSession::load(&paths(&temp_dir));
        session.login("Ada", "ada@example.com").unwrap();

        let reloaded = FileSession::load(&paths(&temp_dir));
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.user().unwrap().name, "Ada");

        session.logout().unwrap();
        assert!(!FileSession::load(&paths(&temp_dir)).is_authenticated());
        // Logging out twice is fine
        session.logout().unwrap();
    }

    #[test]
    fn test_login_requires_both_fields() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = FileSession::load(&paths(&temp_dir));
        assert!(session.login("Ada", " ").is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_corrupt_session_is_signed_out() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("session.json"), "garbage").unwrap();
        assert!(!FileSession::load(&paths(&temp_dir)).is_authenticated());
    }
}
