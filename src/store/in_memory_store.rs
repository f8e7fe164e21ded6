use std::collections::HashMap;

use crate::account::{Account, AccountId};

use super::{AccountStore, StoreError};

#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryAccountStore {
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.id(), account);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl FromIterator<Account> for InMemoryAccountStore {
    fn from_iter<T: IntoIterator<Item = Account>>(iter: T) -> Self {
        Self {
            accounts: iter.into_iter().map(|acc| (acc.id(), acc)).collect(),
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(&id).cloned())
    }

    fn update(&mut self, account: &Account) -> Result<(), StoreError> {
        // accounts are created elsewhere, an update never inserts
        match self.accounts.get_mut(&account.id()) {
            Some(stored) => {
                *stored = account.clone();
                Ok(())
            }
            None => Err(StoreError::Unavailable(format!(
                "no account {} to update",
                account.id()
            ))),
        }
    }
}
