use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub type AccountId = Uuid;
pub type UserId = Uuid;

/// Cumulative amount an account may be paid in over its lifetime (exclusive).
pub const PAY_IN_LIMIT: Decimal = dec!(4000);

/// Threshold for both low funds and approaching pay in limit alerts.
pub const NOTIFICATION_LIMIT: Decimal = dec!(500);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds to make transfer: balance {balance}, requested {amount}")]
    InsufficientFunds { balance: Decimal, amount: Decimal },
    #[error("Account pay in limit reached: paid in {paid_in}, requested {amount}")]
    PayInLimitReached { paid_in: Decimal, amount: Decimal },
    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },
    #[error("Amount {amount} overflows the account {field}")]
    AmountOverflow {
        field: &'static str,
        amount: Decimal,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    owner: User,
    balance: Decimal,
    // negative-accumulating: every withdrawal subtracts its amount
    withdrawn: Decimal,
    paid_in: Decimal,
}

impl Account {
    pub fn new(id: AccountId, owner: User) -> Self {
        Self {
            id,
            owner,
            balance: Decimal::ZERO,
            withdrawn: Decimal::ZERO,
            paid_in: Decimal::ZERO,
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_paid_in(mut self, paid_in: Decimal) -> Self {
        self.paid_in = paid_in;
        self
    }

    pub fn with_withdrawn(mut self, withdrawn: Decimal) -> Self {
        self.withdrawn = withdrawn;
        self
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdrawn(&self) -> Decimal {
        self.withdrawn
    }

    pub fn paid_in(&self) -> Decimal {
        self.paid_in
    }

    /// Debits `amount` from the balance.
    ///
    /// Nothing is modified when the amount is not positive, exceeds the balance
    /// or no longer fits the `withdrawn` counter.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        ensure_positive(amount)?;
        if self.balance < amount {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                amount,
            });
        }
        let balance = self.balance - amount;
        let withdrawn = self
            .withdrawn
            .checked_sub(amount)
            .ok_or(AccountError::AmountOverflow {
                field: "withdrawn",
                amount,
            })?;
        self.balance = balance;
        self.withdrawn = withdrawn;
        Ok(())
    }

    /// Credits `amount`, counting it towards the pay in limit.
    ///
    /// The new `paid_in` is validated before anything is committed, so a rejected
    /// deposit leaves both `paid_in` and `balance` as they were.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        ensure_positive(amount)?;
        // an amount too large to add is past the limit as well
        let Some(paid_in) = self
            .paid_in
            .checked_add(amount)
            .filter(|paid_in| *paid_in < PAY_IN_LIMIT)
        else {
            return Err(AccountError::PayInLimitReached {
                paid_in: self.paid_in,
                amount,
            });
        };
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::AmountOverflow {
                field: "balance",
                amount,
            })?;
        self.paid_in = paid_in;
        self.balance = balance;
        Ok(())
    }

    pub fn is_approaching_low_funds(&self) -> bool {
        self.balance < NOTIFICATION_LIMIT
    }

    pub fn is_approaching_pay_in_limit(&self) -> bool {
        // headroom too large to represent is never close to the limit
        PAY_IN_LIMIT
            .checked_sub(self.paid_in)
            .is_some_and(|headroom| headroom < NOTIFICATION_LIMIT)
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), AccountError> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(AccountError::NonPositiveAmount { amount })
    }
}
