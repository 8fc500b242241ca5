//! Login modal route handlers.
//!
//! The modal is display only: it toggles between login and sign-up forms,
//! and its credentials are never submitted anywhere.

use axum::{extract::State, response::Redirect};
use reyana_core::Action;
use tower_sessions::Session;
use tracing::instrument;

use super::{back_to_page, dispatch};
use crate::error::Result;
use crate::state::AppState;

/// Show the login modal.
#[instrument(skip(state, session))]
pub async fn open(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    dispatch(&state, &session, Action::OpenLogin).await?;
    Ok(back_to_page())
}

/// Switch between the login and sign-up forms.
#[instrument(skip(state, session))]
pub async fn toggle(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    dispatch(&state, &session, Action::ToggleSignup).await?;
    Ok(back_to_page())
}

/// Hide the login modal.
#[instrument(skip(state, session))]
pub async fn close(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    dispatch(&state, &session, Action::CloseLogin).await?;
    Ok(back_to_page())
}
