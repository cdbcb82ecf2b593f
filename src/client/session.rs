use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::config::find_token_file;

/// Holds the bearer token for the current login.
///
/// An explicit context object owned by the client rather than ambient
/// global state: created at startup (hydrated from the persisted slot if
/// one exists), mutated on login/logout, persisted to its store on every
/// change.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
    store: Option<PathBuf>,
}

impl Session {
    /// In-memory session with no persisted slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session backed by a token file, reading an existing token from it.
    pub fn with_store(path: PathBuf) -> Self {
        let token = std::fs::read_to_string(&path)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|t| !t.is_empty());

        Self {
            token: RwLock::new(token),
            store: Some(path),
        }
    }

    /// Session backed by the application's token slot next to its config.
    pub fn hydrate(use_local: bool) -> Self {
        Self::with_store(find_token_file(use_local))
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }

    pub fn set_token(&self, token: &str) -> io::Result<()> {
        *self.token.write().expect("session lock poisoned") = Some(token.to_string());

        if let Some(path) = &self.store {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, token)?;
        }
        Ok(())
    }

    pub fn clear(&self) -> io::Result<()> {
        *self.token.write().expect("session lock poisoned") = None;

        if let Some(path) = &self.store {
            if path.exists() {
                std::fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn in_memory_session_round_trip() {
        let session = Session::new();
        assert!(!session.is_authenticated());

        session.set_token("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));

        session.clear().unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn stored_session_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");

        let session = Session::with_store(path.clone());
        session.set_token("persisted").unwrap();

        let rehydrated = Session::with_store(path.clone());
        assert_eq!(rehydrated.token().as_deref(), Some("persisted"));

        rehydrated.clear().unwrap();
        assert!(!path.exists());
        assert!(Session::with_store(path).token().is_none());
    }

    #[test]
    fn blank_token_file_hydrates_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();

        assert!(!Session::with_store(path).is_authenticated());
    }
}
