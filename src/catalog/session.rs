//! Admin session flag
//!
//! A single shared password, compared in plain text. This only gates the
//! admin commands on this machine; it is not an access-control boundary.

use crate::storage::{keys, KeyValueStore, StorageError};

const AUTHENTICATED: &str = "true";

pub struct AdminSession<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    secret: Option<&'a str>,
}

impl<'a, S: KeyValueStore + ?Sized> AdminSession<'a, S> {
    pub fn new(store: &'a S, secret: Option<&'a str>) -> Self {
        Self { store, secret }
    }

    pub fn is_authenticated(&self) -> bool {
        match self.store.get(keys::ADMIN_SESSION) {
            Ok(value) => value.as_deref() == Some(AUTHENTICATED),
            Err(e) => {
                tracing::warn!(error = %e, "could not read admin session");
                false
            }
        }
    }

    /// Start a session if `password` matches the configured secret
    pub fn authenticate(&self, password: &str) -> Result<bool, StorageError> {
        let Some(secret) = self.secret else {
            tracing::warn!("admin login attempted but no admin password is configured");
            return Ok(false);
        };

        if password != secret {
            tracing::warn!("admin login rejected");
            return Ok(false);
        }

        self.store.set(keys::ADMIN_SESSION, AUTHENTICATED)?;
        tracing::info!("admin session started");
        Ok(true)
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(keys::ADMIN_SESSION)?;
        tracing::info!("admin session ended");
        Ok(())
    }
}
