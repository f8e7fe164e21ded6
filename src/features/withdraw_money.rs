use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{account::AccountId, notification::NotificationSender, store::AccountStore};

use super::{Operation, OperationError};

/// Withdraws money from a single account, alerting the owner when funds run low.
#[derive(Debug)]
pub struct WithdrawMoney<S, N> {
    store: S,
    notifier: N,
}

impl<S, N> WithdrawMoney<S, N>
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

    /// Loads the account, debits it, sends a low funds alert if needed and
    /// persists the result. Any failure aborts before the store is written.
    #[tracing::instrument(skip(self))]
    pub fn execute(
        &mut self,
        from_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), OperationError> {
        let Some(mut from) = self.store.get_by_id(from_account_id)? else {
            debug!("account not found");
            return Err(OperationError::AccountNotFound {
                operation: Operation::Withdraw,
            });
        };

        if let Err(err) = from.withdraw(amount) {
            debug!(%err, "withdrawal rejected");
            return Err(err.into());
        }

        if from.is_approaching_low_funds() {
            self.notifier.notify_funds_low(&from.owner().email)?;
            info!(balance = %from.balance(), "low funds notification sent");
        }

        self.store.update(&from)?;
        info!(balance = %from.balance(), "withdrawal completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::{
        account::{Account, AccountError},
        features::test_utils::account,
        notification::{Notification, RecordingNotificationSender},
        store::in_memory_store::InMemoryAccountStore,
    };

    use super::*;

    fn withdraw_money(
        accounts: Vec<Account>,
    ) -> WithdrawMoney<InMemoryAccountStore, RecordingNotificationSender> {
        WithdrawMoney::new(
            accounts.into_iter().collect(),
            RecordingNotificationSender::default(),
        )
    }

    #[test]
    fn withdraw_from_nonexistent_account() {
        let mut withdraw = withdraw_money(vec![]);
        let err = withdraw.execute(Uuid::new_v4(), dec!(50)).unwrap_err();
        assert!(matches!(
            err,
            OperationError::AccountNotFound {
                operation: Operation::Withdraw
            }
        ));
        assert_eq!(
            err.to_string(),
            "Cannot withdraw money from a nonexistent account"
        );
        assert!(withdraw.notifier().sent().is_empty());
    }

    #[test]
    fn withdraw_with_insufficient_funds() {
        let acc = account(dec!(50));
        let id = acc.id();
        let mut withdraw = withdraw_money(vec![acc]);

        let err = withdraw.execute(id, dec!(500)).unwrap_err();
        assert!(err.is_insufficient_funds());
        assert!(matches!(
            err,
            OperationError::AccountErr(AccountError::InsufficientFunds { .. })
        ));
        let stored = withdraw.store().get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.balance(), dec!(50));
        assert!(withdraw.notifier().sent().is_empty());
    }

    #[test]
    fn withdraw_approaching_low_funds_sends_notification() {
        let acc = account(dec!(750));
        let id = acc.id();
        let email = acc.owner().email.clone();
        let mut withdraw = withdraw_money(vec![acc]);

        withdraw.execute(id, dec!(500)).unwrap();

        assert_eq!(
            withdraw.notifier().sent(),
            &[Notification::FundsLow { address: email }]
        );
        let stored = withdraw.store().get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.balance(), dec!(250));
        assert_eq!(stored.withdrawn(), dec!(-500));
    }

    #[test]
    fn withdraw_without_notification() {
        let acc = account(dec!(2000));
        let id = acc.id();
        let mut withdraw = withdraw_money(vec![acc]);

        withdraw.execute(id, dec!(1500)).unwrap();

        // balance of exactly 500 is not low
        let (store, notifier) = withdraw.into_parts();
        assert!(notifier.sent().is_empty());
        assert_eq!(store.get_by_id(id).unwrap().unwrap().balance(), dec!(500));
    }
}
