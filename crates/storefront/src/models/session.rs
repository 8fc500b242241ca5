//! Session-related types.
//!
//! A shopper's whole [`StoreState`] lives in their session, so every page
//! load while the session is live sees the cart and filters it left behind.

use reyana_core::StoreState;
use tower_sessions::Session;

/// Session keys for storefront data.
pub mod keys {
    /// Key for the shopper's store state.
    pub const STORE_STATE: &str = "store_state";
}

/// Load the store state from the session, starting fresh when absent.
///
/// # Errors
///
/// Returns an error if the session store fails or the stored value no longer
/// deserializes.
pub async fn load_store(session: &Session) -> Result<StoreState, tower_sessions::session::Error> {
    Ok(session
        .get::<StoreState>(keys::STORE_STATE)
        .await?
        .unwrap_or_default())
}

/// Save the store state to the session.
///
/// # Errors
///
/// Returns an error if the state cannot be serialized or the session store fails.
pub async fn save_store(
    session: &Session,
    state: &StoreState,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::STORE_STATE, state).await
}
