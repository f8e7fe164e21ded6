use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{account::AccountId, notification::NotificationSender, store::AccountStore};

use super::{Operation, OperationError};

/// Moves money between two distinct accounts.
///
/// Both accounts are loaded as owned snapshots and only written back once
/// every check and notification has succeeded, so a rejected transfer leaves
/// the store untouched. The two writes are not atomic: `from` is written
/// first, and if writing `to` then fails the debit stays persisted without
/// the credit. Atomicity across both writes is up to the store.
///
/// There is no locking across the load and the final writes: two transfers
/// racing on the same account can lose an update unless the store detects it
/// (see [`StoreError::Conflict`]).
///
/// [`StoreError::Conflict`]: crate::store::StoreError::Conflict
#[derive(Debug)]
pub struct TransferMoney<S, N> {
    store: S,
    notifier: N,
}

impl<S, N> TransferMoney<S, N>
where
    S: AccountStore,
    N: NotificationSender,
{
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (S, N) {
        (self.store, self.notifier)
    }

    #[tracing::instrument(skip(self))]
    pub fn execute(
        &mut self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), OperationError> {
        let from = self.store.get_by_id(from_account_id)?;
        let to = self.store.get_by_id(to_account_id)?;
        let (Some(mut from), Some(mut to)) = (from, to) else {
            debug!("account not found");
            return Err(OperationError::AccountNotFound {
                operation: Operation::Transfer,
            });
        };

        if from_account_id == to_account_id {
            debug!("transfer to the same account rejected");
            return Err(OperationError::SameAccount);
        }

        if let Err(err) = from.withdraw(amount) {
            debug!(%err, "debit rejected");
            return Err(err.into());
        }
        // `from` is debited in memory only, dropping it discards the change
        if let Err(err) = to.deposit(amount) {
            debug!(%err, "credit rejected");
            return Err(err.into());
        }

        if from.is_approaching_low_funds() {
            self.notifier.notify_funds_low(&from.owner().email)?;
            info!(balance = %from.balance(), "low funds notification sent");
        }
        if to.is_approaching_pay_in_limit() {
            self.notifier
                .notify_approaching_pay_in_limit(&to.owner().email)?;
            info!(paid_in = %to.paid_in(), "pay in limit notification sent");
        }

        self.store.update(&from)?;
        self.store.update(&to)?;
        info!("transfer completed");
        Ok(())
    }
}
