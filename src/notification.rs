use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Failed to notify {address}: {reason}")]
    Delivery { address: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    FundsLow { address: String },
    ApproachingPayInLimit { address: String },
}

/// Delivers account alerts to a user's notification address.
pub trait NotificationSender {
    fn notify_funds_low(&mut self, address: &str) -> Result<(), NotificationError>;

    fn notify_approaching_pay_in_limit(&mut self, address: &str) -> Result<(), NotificationError>;
}

/// Emits every alert as a `tracing` event and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSender;

impl NotificationSender for TracingNotificationSender {
    fn notify_funds_low(&mut self, address: &str) -> Result<(), NotificationError> {
        tracing::warn!(address, "funds low");
        Ok(())
    }

    fn notify_approaching_pay_in_limit(&mut self, address: &str) -> Result<(), NotificationError> {
        tracing::warn!(address, "approaching pay in limit");
        Ok(())
    }
}

/// Keeps sent alerts in memory, in send order.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotificationSender {
    sent: Vec<Notification>,
}

impl RecordingNotificationSender {
    pub fn sent(&self) -> &[Notification] {
        &self.sent
    }
}

impl NotificationSender for RecordingNotificationSender {
    fn notify_funds_low(&mut self, address: &str) -> Result<(), NotificationError> {
        self.sent.push(Notification::FundsLow {
            address: address.to_owned(),
        });
        Ok(())
    }

    fn notify_approaching_pay_in_limit(&mut self, address: &str) -> Result<(), NotificationError> {
        self.sent.push(Notification::ApproachingPayInLimit {
            address: address.to_owned(),
        });
        Ok(())
    }
}
