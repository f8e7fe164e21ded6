use thiserror::Error;

use crate::{account::AccountError, notification::NotificationError, store::StoreError};

pub mod transfer_money;
pub mod withdraw_money;

pub use transfer_money::TransferMoney;
pub use withdraw_money::WithdrawMoney;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Withdraw,
    Transfer,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{}", missing_account_message(.operation))]
    AccountNotFound { operation: Operation },
    #[error("Cannot transfer to your own account")]
    SameAccount,
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error(transparent)]
    StoreErr(#[from] StoreError),
    #[error(transparent)]
    NotificationErr(#[from] NotificationError),
}

fn missing_account_message(operation: &Operation) -> &'static str {
    match operation {
        Operation::Withdraw => "Cannot withdraw money from a nonexistent account",
        Operation::Transfer => "Cannot transfer to accounts that don't exist",
    }
}

impl OperationError {
    pub fn is_account_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound { .. })
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            Self::AccountErr(AccountError::InsufficientFunds { .. })
        )
    }

    pub fn is_pay_in_limit_reached(&self) -> bool {
        matches!(
            self,
            Self::AccountErr(AccountError::PayInLimitReached { .. })
        )
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::account::{Account, User};

    pub fn account(balance: Decimal) -> Account {
        let owner_id = Uuid::new_v4();
        Account::new(
            Uuid::new_v4(),
            User::new(owner_id, "Kevin", format!("{owner_id}@example.com")),
        )
        .with_balance(balance)
    }
}
