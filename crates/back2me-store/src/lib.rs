pub mod error;
pub mod seed;

mod accounts;
mod messages;
mod posts;
mod query;
mod tables;

use std::sync::RwLock;

use back2me_crypto::CredentialScheme;
use tracing::info;

pub use error::{StoreError, StoreResult};
pub use query::PostFilter;

use crate::tables::Tables;

/// In-memory record store for accounts, posts and messages. Nothing is
/// persisted; the store lives exactly as long as its owner.
pub struct Store {
    tables: RwLock<Tables>,
    scheme: CredentialScheme,
}

impl Store {
    pub fn new(scheme: CredentialScheme) -> Self {
        info!("Record store created (credential scheme: {:?})", scheme);
        Self {
            tables: RwLock::new(Tables::new()),
            scheme,
        }
    }

    pub fn scheme(&self) -> CredentialScheme {
        self.scheme
    }

    pub(crate) fn read<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Tables) -> T,
    {
        let tables = self.tables.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&tables))
    }

    pub(crate) fn write<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Tables) -> T,
    {
        let mut tables = self.tables.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&mut tables))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(CredentialScheme::default())
    }
}
