//! Checkout route handlers.
//!
//! Checkout is cash on delivery only. Placing an order clears the cart and
//! posts a notification; nothing leaves the process.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use reyana_core::{Action, CheckoutForm, StoreError, reduce};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::home::render_page;
use super::{back_to_page, dispatch};
use crate::error::{Result, add_breadcrumb};
use crate::models::{load_store, save_store};
use crate::state::AppState;

/// Delivery details form data.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceOrderForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl From<PlaceOrderForm> for CheckoutForm {
    fn from(form: PlaceOrderForm) -> Self {
        Self {
            name: form.name,
            phone: form.phone,
            address: form.address,
        }
    }
}

/// Show the checkout modal and hide the cart panel.
#[instrument(skip(state, session))]
pub async fn open(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    dispatch(&state, &session, Action::OpenCheckout).await?;
    Ok(back_to_page())
}

/// Place a cash-on-delivery order.
///
/// The typed details are kept in the session either way. When a field is
/// blank the page is rendered again with `422 Unprocessable Entity`, the
/// modal open and an alert naming the missing fields; the cart is untouched.
#[instrument(skip(state, session, form))]
pub async fn place(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PlaceOrderForm>,
) -> Result<Response> {
    let catalog = state.catalog();
    let store = load_store(&session).await?;
    let edited = reduce(catalog, &store, Action::EditCheckout(form.into()))?;

    match reduce(catalog, &edited, Action::SubmitCheckout { now: Utc::now() }) {
        Ok(placed) => {
            save_store(&session, &placed).await?;
            if let Some(notification) = &placed.notification {
                add_breadcrumb("checkout", "Order placed", None);
                tracing::info!(
                    ticket = notification.ticket.as_u64(),
                    items = notification.item_count,
                    total = %notification.total,
                    "order placed (cash on delivery)"
                );
            }
            Ok(back_to_page().into_response())
        }
        Err(StoreError::Checkout(err)) => {
            save_store(&session, &edited).await?;
            tracing::info!(error = %err, "checkout rejected");
            let page = render_page(&state, &edited, Some(err.to_string()));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Hide the checkout modal, keeping whatever was typed.
#[instrument(skip(state, session))]
pub async fn cancel(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    dispatch(&state, &session, Action::CancelCheckout).await?;
    Ok(back_to_page())
}
