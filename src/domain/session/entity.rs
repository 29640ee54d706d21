//! Session types

use chrono::{DateTime, Utc};

use crate::domain::account::{AccountId, Role};

/// Identity carried by a live session.
///
/// Sessions expire at a fixed instant set when the session is created;
/// lookups never extend the deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub account_id: AccountId,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
