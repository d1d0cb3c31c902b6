use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A generated disposable address.
///
/// Only the local part is stored; the domain is applied at display and
/// copy time by [`crate::inbox::Inbox`]. Records never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailRecord {
    pub id: String,
    pub email: String,
    /// Epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl EmailRecord {
    /// Builds a record whose id is derived from its creation time.
    pub fn new(email: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: created_at.to_string(),
            email: email.into(),
            created_at,
        }
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.created_at)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

/// Epoch-millisecond clock that never runs backwards within a process.
#[derive(Debug, Default)]
pub struct SessionClock {
    last: i64,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_millis(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis().max(self.last);
        self.last = now;
        now
    }
}
