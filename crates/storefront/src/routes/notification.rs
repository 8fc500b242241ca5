//! Order notification route handlers.

use axum::{Form, extract::State, response::Redirect};
use reyana_core::{Action, NotificationTicket};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{back_to_page, dispatch};
use crate::error::Result;
use crate::state::AppState;

/// Dismiss form data.
#[derive(Debug, Deserialize)]
pub struct DismissForm {
    pub ticket: u64,
}

/// Dismiss the order notification early.
///
/// A ticket from an earlier order is ignored, so a stale page cannot clear
/// a newer notification.
#[instrument(skip(state, session))]
pub async fn dismiss(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DismissForm>,
) -> Result<Redirect> {
    let ticket = NotificationTicket::new(form.ticket);
    dispatch(&state, &session, Action::DismissNotification(ticket)).await?;
    Ok(back_to_page())
}
