//! Bounded, time-expiring set of retired refresh-token ids.
//!
//! Entries live as long as the refresh token they belong to; every insert
//! prunes what has already expired, so the set stays bounded by the number
//! of refresh tokens still in flight.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

#[derive(Default)]
pub struct RetiredTokens {
    entries: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl RetiredTokens {
    /// Retire a token id until the moment its token would have expired
    /// anyway.
    pub fn retire(&self, jti: &str, expires_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().expect("retired token set poisoned");
        let now = Utc::now();
        entries.retain(|_, expiry| *expiry > now);
        entries.insert(jti.to_string(), expires_at);
    }

    pub fn contains(&self, jti: &str) -> bool {
        let entries = self.entries.lock().expect("retired token set poisoned");
        entries.get(jti).is_some_and(|expiry| *expiry > Utc::now())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}


#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn retired_ids_are_remembered_until_expiry() {
        let retired = RetiredTokens::default();
        retired.retire("a", Utc::now() + Duration::hours(1));
        assert!(retired.contains("a"));
        assert!(!retired.contains("b"));
    }

    #[test]
    fn expired_entries_are_pruned_and_ignored() {
        let retired = RetiredTokens::default();
        retired.retire("old", Utc::now() - Duration::seconds(1));
        assert!(!retired.contains("old"));

        // The next insert sweeps the expired entry out.
        retired.retire("fresh", Utc::now() + Duration::hours(1));
        assert_eq!(retired.len(), 1);
    }
}
