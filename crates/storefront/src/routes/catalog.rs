//! Catalog filter route handlers.

use axum::{Form, extract::State, response::Redirect};
use reyana_core::{Action, CategoryFilter};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{back_to_page, dispatch};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Category tab form data.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub category: String,
}

/// Search box form data.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// Select a category tab.
#[instrument(skip(state, session))]
pub async fn set_category(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect> {
    let category = form
        .category
        .parse::<CategoryFilter>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    dispatch(&state, &session, Action::SetCategory(category)).await?;
    Ok(back_to_page())
}

/// Set the search text.
#[instrument(skip(state, session))]
pub async fn set_search(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SearchForm>,
) -> Result<Redirect> {
    dispatch(&state, &session, Action::SetSearchQuery(form.q)).await?;
    Ok(back_to_page())
}

/// Toggle ascending price order.
#[instrument(skip(state, session))]
pub async fn toggle_sort(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let store = dispatch(&state, &session, Action::ToggleSort).await?;
    tracing::debug!(sort_by_price = store.filters.sort_by_price, "sort toggled");
    Ok(back_to_page())
}
