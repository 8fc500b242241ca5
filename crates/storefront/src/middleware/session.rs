//! Session middleware configuration.
//!
//! Sessions live in a bounded `moka` cache. Each record expires once the
//! visitor has been idle for `session_idle_timeout`, and the cache evicts
//! expired or surplus records, so abandoned carts do not pile up.

use tower_sessions::cookie::time::Duration as CookieDuration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "reyana_session";

/// Build the in-memory session store, capped at `session_capacity` records.
#[must_use]
pub fn create_session_store(config: &StorefrontConfig) -> MokaStore {
    MokaStore::new(Some(config.session_capacity))
}

/// Create the session layer backed by [`create_session_store`].
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    let idle = CookieDuration::try_from(config.session_idle_timeout)
        .unwrap_or(CookieDuration::MAX);

    SessionManagerLayer::new(create_session_store(config))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(idle))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use tower_sessions::SessionStore;
    use tower_sessions::cookie::time::OffsetDateTime;
    use tower_sessions::session::{Id, Record};

    use super::*;

    fn record(expiry_date: OffsetDateTime) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::new(),
            expiry_date,
        }
    }

    #[tokio::test]
    async fn test_expired_sessions_are_dropped() {
        let store = create_session_store(&StorefrontConfig::default());

        let live = record(OffsetDateTime::now_utc() + CookieDuration::hours(1));
        let stale = record(OffsetDateTime::now_utc() - CookieDuration::hours(1));
        store.save(&live).await.unwrap();
        store.save(&stale).await.unwrap();

        assert!(store.load(&live.id).await.unwrap().is_some());
        assert!(store.load(&stale.id).await.unwrap().is_none());
    }
}
