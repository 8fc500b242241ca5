//! The storefront state container.
//!
//! [`StoreState`] owns everything a shopper can change: filters, cart,
//! checkout form, panel visibility and the order notification. The catalog
//! is not part of it; it is shared read-only and passed to [`reduce`].
//!
//! Every user interaction is an [`Action`]. [`reduce`] maps the current
//! state and an action to the next state without touching the input, so a
//! rejected action leaves the caller holding the state it started with.
//!
//! ```
//! use reyana_core::{Action, Catalog, ProductId, StoreState, reduce};
//!
//! let catalog = Catalog::seeded();
//! let state = StoreState::default();
//! let state = reduce(&catalog, &state, Action::AddToCart(ProductId::new(1))).unwrap();
//! let state = reduce(&catalog, &state, Action::AddToCart(ProductId::new(1))).unwrap();
//! assert_eq!(state.cart.count(), 2);
//! assert_eq!(state.cart.total().amount(), 498);
//! assert!(state.cart_open);
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::{Catalog, Product, ViewFilters};
use crate::checkout::{CheckoutError, CheckoutForm};
use crate::notification::{NotificationTicket, OrderNotification};
use crate::types::{CategoryFilter, ProductId};

/// Errors that can occur when applying an [`Action`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Checkout form failed validation.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Action referenced a product the catalog does not have.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Checkout was opened or submitted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Which form the login modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoginMode {
    #[default]
    Login,
    Signup,
}

impl LoginMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCategory(CategoryFilter),
    SetSearchQuery(String),
    ToggleSort,
    AddToCart(ProductId),
    ChangeQty { id: ProductId, delta: i32 },
    RemoveItem(ProductId),
    OpenCart,
    CloseCart,
    OpenCheckout,
    /// Replace the checkout form contents with what the shopper typed.
    EditCheckout(CheckoutForm),
    /// Validate the form and place the order. `now` stamps the notification.
    SubmitCheckout { now: DateTime<Utc> },
    CancelCheckout,
    OpenLogin,
    ToggleSignup,
    CloseLogin,
    /// Clear the notification if it is still the one `ticket` names.
    DismissNotification(NotificationTicket),
}

/// Everything a shopper's interactions can change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreState {
    pub filters: ViewFilters,
    pub cart: Cart,
    /// Side cart panel visible.
    pub cart_open: bool,
    /// Checkout modal visible.
    pub checkout_open: bool,
    pub checkout_form: CheckoutForm,
    /// Login modal, when visible.
    pub login: Option<LoginMode>,
    pub notification: Option<OrderNotification>,
    last_ticket: u64,
}

impl StoreState {
    /// Products to display under the current filters.
    #[must_use]
    pub fn view<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.view(&self.filters)
    }

    /// The ticket of the notification, if one is up and due by `now`.
    #[must_use]
    pub fn due_notification(
        &self,
        now: DateTime<Utc>,
        dismiss_after: Duration,
    ) -> Option<NotificationTicket> {
        self.notification
            .as_ref()
            .filter(|notification| notification.is_due(now, dismiss_after))
            .map(|notification| notification.ticket)
    }
}

/// Apply `action` to `state`.
///
/// # Errors
///
/// - [`StoreError::UnknownProduct`] when adding a product the catalog lacks
/// - [`StoreError::EmptyCart`] when opening checkout with an empty cart
/// - [`StoreError::Checkout`] when submitting an incomplete form
///
/// `state` is never modified; on error the caller's state is still current.
pub fn reduce(
    catalog: &Catalog,
    state: &StoreState,
    action: Action,
) -> Result<StoreState, StoreError> {
    let mut next = state.clone();
    match action {
        Action::SetCategory(category) => next.filters.category = category,
        Action::SetSearchQuery(query) => next.filters.search = query,
        Action::ToggleSort => next.filters.sort_by_price = !next.filters.sort_by_price,
        Action::AddToCart(id) => {
            let product = catalog.get(id).ok_or(StoreError::UnknownProduct(id))?;
            next.cart = next.cart.add(product);
            next.cart_open = true;
        }
        Action::ChangeQty { id, delta } => next.cart = next.cart.change_qty(id, delta),
        Action::RemoveItem(id) => next.cart = next.cart.remove(id),
        Action::OpenCart => next.cart_open = true,
        Action::CloseCart => next.cart_open = false,
        Action::OpenCheckout => {
            if next.cart.is_empty() {
                return Err(StoreError::EmptyCart);
            }
            next.checkout_open = true;
            next.cart_open = false;
        }
        Action::EditCheckout(form) => next.checkout_form = form,
        Action::SubmitCheckout { now } => {
            next.checkout_form.validate()?;
            if next.cart.is_empty() {
                return Err(StoreError::EmptyCart);
            }
            next.last_ticket += 1;
            next.notification = Some(OrderNotification {
                ticket: NotificationTicket::new(next.last_ticket),
                posted_at: now,
                item_count: next.cart.count(),
                total: next.cart.total(),
            });
            next.checkout_open = false;
            next.cart = Cart::default();
            next.checkout_form = CheckoutForm::default();
            next.cart_open = false;
        }
        Action::CancelCheckout => next.checkout_open = false,
        Action::OpenLogin => next.login = Some(LoginMode::default()),
        Action::ToggleSignup => next.login = next.login.map(LoginMode::toggled),
        Action::CloseLogin => next.login = None,
        Action::DismissNotification(ticket) => {
            if next.notification.as_ref().map(|n| n.ticket) == Some(ticket) {
                next.notification = None;
            }
        }
    }
    Ok(next)
}
