//! The current signed-in identity, mirrored to a durable key/value backend.
//!
//! At most one profile is active per store. Every change is written through
//! to the backend under [`SESSION_KEY`] so the next process can restore it.

use pod_core::entities::AccountProfile;

use crate::error::AuthError;
use crate::kv::KeyValueStore;
use crate::registry::IdentityRegistry;

/// Fixed key of the persisted session record.
pub const SESSION_KEY: &str = "podcast_user";

pub struct SessionStore {
    current: Option<AccountProfile>,
    backend: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// A signed-out store over `backend`. Call [`Self::restore`] to adopt a
    /// previously persisted record.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            current: None,
            backend: Box::new(backend),
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&AccountProfile> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Make `profile` the current identity and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the record cannot be encoded or written. The
    /// in-memory identity is set either way, and a failed write drops any
    /// older record so a restart never adopts a different account.
    pub fn log_in(&mut self, profile: AccountProfile) -> Result<(), AuthError> {
        tracing::info!(account_id = %profile.id, role = %profile.role, "logged in");
        let encoded = serde_json::to_string(&profile);
        self.current = Some(profile);

        let written = encoded
            .map_err(AuthError::from)
            .and_then(|record| self.backend.set(SESSION_KEY, &record));
        if let Err(error) = written {
            if let Err(cleanup) = self.backend.remove(SESSION_KEY) {
                tracing::warn!(error = %cleanup, "failed to drop stale session record");
            }
            return Err(error);
        }
        Ok(())
    }

    /// Clear the current identity and its persisted copy.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the persisted copy cannot be removed.
    /// The in-memory identity is cleared either way.
    pub fn log_out(&mut self) -> Result<(), AuthError> {
        if let Some(profile) = self.current.take() {
            tracing::info!(account_id = %profile.id, "logged out");
        }
        self.backend.remove(SESSION_KEY)
    }

    /// Adopt the persisted record, if any, without checking it against a
    /// registry.
    ///
    /// A record that does not parse is discarded and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backend cannot be read.
    pub fn restore(&mut self) -> Result<Option<&AccountProfile>, AuthError> {
        let Some(raw) = self.backend.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<AccountProfile>(&raw) {
            Ok(profile) => {
                tracing::debug!(account_id = %profile.id, "session restored");
                self.current = Some(profile);
                Ok(self.current.as_ref())
            }
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable session record");
                self.backend.remove(SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    /// Like [`Self::restore`], but drop the record unless `registry` still
    /// holds an account with the same ID and email.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backend cannot be read or cleared.
    pub fn restore_verified(
        &mut self,
        registry: &IdentityRegistry,
    ) -> Result<Option<&AccountProfile>, AuthError> {
        let Some(restored) = self.restore()?.cloned() else {
            return Ok(None);
        };

        let still_known = registry
            .find_by_id(&restored.id)
            .is_some_and(|known| known.email == restored.email);
        if still_known {
            return Ok(self.current.as_ref());
        }

        tracing::warn!(account_id = %restored.id, "restored session has no matching account");
        self.log_out()?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FileKeyValueStore, MemoryKeyValueStore};
    use pod_core::enums::Role;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Memory backend shared between store instances whose writes can be
    /// switched to fail.
    #[derive(Clone, Default)]
    struct FlakyBackend {
        inner: Rc<RefCell<MemoryKeyValueStore>>,
        fail_writes: Rc<Cell<bool>>,
    }

    impl KeyValueStore for FlakyBackend {
        fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
            self.inner.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
            if self.fail_writes.get() {
                return Err(AuthError::Storage("disk full".into()));
            }
            self.inner.borrow_mut().set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), AuthError> {
            self.inner.borrow_mut().remove(key)
        }
    }

    fn profile() -> AccountProfile {
        AccountProfile {
            id: "acc-0000abcd".into(),
            display_name: "Jo".into(),
            email: "jo@example.com".into(),
            role: Role::Listener,
        }
    }

    #[test]
    fn log_in_persists_record() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut session = SessionStore::new(FileKeyValueStore::new(tmp.path()));
        session.log_in(profile()).unwrap();
        assert!(session.is_authenticated());

        let raw = std::fs::read_to_string(tmp.path().join("podcast_user.json")).unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({
                "id": "acc-0000abcd",
                "username": "Jo",
                "email": "jo@example.com",
                "role": "listener",
            })
        );
    }

    #[test]
    fn restore_survives_new_store() {
        let tmp = tempfile::TempDir::new().unwrap();
        SessionStore::new(FileKeyValueStore::new(tmp.path()))
            .log_in(profile())
            .unwrap();

        let mut next = SessionStore::new(FileKeyValueStore::new(tmp.path()));
        assert!(!next.is_authenticated());
        let restored = next.restore().unwrap().cloned();
        assert_eq!(restored, Some(profile()));
        assert_eq!(next.current(), Some(&profile()));
    }

    #[test]
    fn log_out_clears_record() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut session = SessionStore::new(FileKeyValueStore::new(tmp.path()));
        session.log_in(profile()).unwrap();
        session.log_out().unwrap();
        assert!(session.current().is_none());
        assert!(!tmp.path().join("podcast_user.json").exists());

        let mut next = SessionStore::new(FileKeyValueStore::new(tmp.path()));
        assert!(next.restore().unwrap().is_none());
    }

    #[test]
    fn log_out_when_signed_out_is_noop() {
        let mut session = SessionStore::new(MemoryKeyValueStore::new());
        session.log_out().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn restore_trusts_unknown_accounts() {
        let mut kv = MemoryKeyValueStore::new();
        kv.set(SESSION_KEY, &serde_json::to_string(&profile()).unwrap())
            .unwrap();
        let mut session = SessionStore::new(kv);
        assert_eq!(session.restore().unwrap(), Some(&profile()));
    }

    #[test]
    fn restore_discards_garbage() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("podcast_user.json"), "{not json").unwrap();

        let mut session = SessionStore::new(FileKeyValueStore::new(tmp.path()));
        assert!(session.restore().unwrap().is_none());
        assert!(!tmp.path().join("podcast_user.json").exists());
    }

    #[test]
    fn restore_verified_keeps_known_account() {
        let registry = IdentityRegistry::with_demo_accounts();
        let known = registry.find_by_email("admin@demo.com").unwrap();

        let mut kv = MemoryKeyValueStore::new();
        kv.set(SESSION_KEY, &serde_json::to_string(&known).unwrap())
            .unwrap();
        let mut session = SessionStore::new(kv);
        assert_eq!(session.restore_verified(&registry).unwrap(), Some(&known));
    }

    #[test]
    fn restore_verified_drops_unknown_account() {
        let registry = IdentityRegistry::with_demo_accounts();
        let tmp = tempfile::TempDir::new().unwrap();
        SessionStore::new(FileKeyValueStore::new(tmp.path()))
            .log_in(profile())
            .unwrap();

        let mut session = SessionStore::new(FileKeyValueStore::new(tmp.path()));
        assert!(session.restore_verified(&registry).unwrap().is_none());
        assert!(!session.is_authenticated());
        assert!(!tmp.path().join("podcast_user.json").exists());
    }

    #[test]
    fn failed_write_drops_previous_record() {
        let backend = FlakyBackend::default();
        let first = profile();
        let second = AccountProfile {
            id: "acc-0000beef".into(),
            email: "kim@example.com".into(),
            ..profile()
        };

        let mut session = SessionStore::new(backend.clone());
        session.log_in(first).unwrap();

        backend.fail_writes.set(true);
        let err = session.log_in(second.clone()).unwrap_err();
        assert!(matches!(err, AuthError::Storage(_)));
        assert_eq!(session.current(), Some(&second));

        let mut next = SessionStore::new(backend);
        assert!(next.restore().unwrap().is_none());
    }
}
