/// Account balance rules: withdrawals, deposits, pay in limit and low funds
/// thresholds.
pub mod account;

/// Account persistence interface, plus "in memory" implementation.
pub mod store;

/// Alerts sent to account owners, plus a logging and a recording sender.
pub mod notification;

/// Money movement operations coordinating [`account`] with a [`store`] and a
/// [`notification`] sender.
///
/// NOTE: each operation loads fresh snapshots and writes them back at the end,
/// without locking. Isolation between concurrent operations on the same
/// account is up to the store implementation.
pub mod features;

pub use account::{Account, AccountError, AccountId, User};
pub use features::{Operation, OperationError, TransferMoney, WithdrawMoney};
