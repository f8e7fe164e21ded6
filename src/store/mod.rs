use thiserror::Error;

use crate::account::{Account, AccountId};

pub mod in_memory_store;

/// Failures reported by [`AccountStore`] implementations.
///
/// `Conflict` is for stores that version their records and detect a write
/// based on a stale snapshot; [`in_memory_store::InMemoryAccountStore`] never
/// produces it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Account store unavailable: {0}")]
    Unavailable(String),
    #[error("Account {id} was modified concurrently")]
    Conflict { id: AccountId },
}

/// Loads and persists account snapshots.
///
/// Implementations decide how failures are retried or timed out; callers
/// propagate whatever comes back.
pub trait AccountStore {
    fn get_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError>;

    fn update(&mut self, account: &Account) -> Result<(), StoreError>;
}
