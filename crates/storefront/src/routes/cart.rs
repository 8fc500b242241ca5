//! Cart route handlers.
//!
//! The cart lives in the session alongside the rest of the store state.
//! Product ids arrive from form posts and are checked against the catalog by
//! the store.

use axum::{Form, extract::State, response::Redirect};
use reyana_core::{Action, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{back_to_page, dispatch};
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Change quantity form data.
#[derive(Debug, Deserialize)]
pub struct ChangeQuantityForm {
    pub product_id: i32,
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Add one unit of a product and show the cart panel.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    let store = dispatch(&state, &session, Action::AddToCart(id)).await?;

    let product_id = id.to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product_id.as_str())]),
    );
    tracing::info!(
        product_id = %id,
        cart_count = store.cart.count(),
        "added to cart"
    );

    Ok(back_to_page())
}

/// Adjust a line's quantity; never drops below one.
#[instrument(skip(state, session))]
pub async fn change_quantity(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ChangeQuantityForm>,
) -> Result<Redirect> {
    let action = Action::ChangeQty {
        id: ProductId::new(form.product_id),
        delta: form.delta,
    };
    dispatch(&state, &session, action).await?;
    Ok(back_to_page())
}

/// Remove a line whatever its quantity.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    dispatch(&state, &session, Action::RemoveItem(id)).await?;
    let product_id = id.to_string();
    add_breadcrumb(
        "cart",
        "Removed from cart",
        Some(&[("product_id", product_id.as_str())]),
    );
    Ok(back_to_page())
}

/// Show the cart panel.
#[instrument(skip(state, session))]
pub async fn open(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    dispatch(&state, &session, Action::OpenCart).await?;
    Ok(back_to_page())
}

/// Hide the cart panel.
#[instrument(skip(state, session))]
pub async fn close(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    dispatch(&state, &session, Action::CloseCart).await?;
    Ok(back_to_page())
}
