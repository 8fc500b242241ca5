//! The order-placed notification.
//!
//! Each placed order posts a notification under a fresh
//! [`NotificationTicket`]. A dismissal names the ticket it was scheduled
//! for, so a timer left over from an earlier order cannot clear the
//! notification of a later one.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Price;

/// How long an order notification stays up when nothing else is configured.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Identifies one posted notification within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationTicket(u64);

impl NotificationTicket {
    /// Create a ticket from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// "Order placed" confirmation shown after a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNotification {
    pub ticket: NotificationTicket,
    pub posted_at: DateTime<Utc>,
    /// Units in the order that was placed.
    pub item_count: u64,
    /// Amount due on delivery.
    pub total: Price,
}

impl OrderNotification {
    /// Whether the notification should be gone by `now`.
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>, dismiss_after: Duration) -> bool {
        let lifetime = TimeDelta::from_std(dismiss_after).unwrap_or(TimeDelta::MAX);
        now.signed_duration_since(self.posted_at) >= lifetime
    }

    /// Time left before the notification is due, zero once it is.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>, dismiss_after: Duration) -> Duration {
        let elapsed = now
            .signed_duration_since(self.posted_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        dismiss_after.saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posted_at(now: DateTime<Utc>) -> OrderNotification {
        OrderNotification {
            ticket: NotificationTicket::new(1),
            posted_at: now,
            item_count: 2,
            total: Price::new(498),
        }
    }

    #[test]
    fn test_due_after_delay() {
        let now = Utc::now();
        let notification = posted_at(now);
        assert!(!notification.is_due(now, DEFAULT_DISMISS_AFTER));
        assert!(!notification.is_due(now + TimeDelta::milliseconds(3_999), DEFAULT_DISMISS_AFTER));
        assert!(notification.is_due(now + TimeDelta::seconds(4), DEFAULT_DISMISS_AFTER));
    }

    #[test]
    fn test_remaining() {
        let now = Utc::now();
        let notification = posted_at(now);
        assert_eq!(
            notification.remaining(now + TimeDelta::seconds(1), DEFAULT_DISMISS_AFTER),
            Duration::from_secs(3)
        );
        assert_eq!(
            notification.remaining(now + TimeDelta::seconds(10), DEFAULT_DISMISS_AFTER),
            Duration::ZERO
        );
        // A clock that went backwards never extends the lifetime.
        assert_eq!(
            notification.remaining(now - TimeDelta::seconds(10), DEFAULT_DISMISS_AFTER),
            DEFAULT_DISMISS_AFTER
        );
    }
}
