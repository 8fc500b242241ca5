//! The storefront page.
//!
//! Everything is rendered on one page: header, category tabs, product grid,
//! cart panel, and whichever modal is open. The view structs below flatten
//! store state into display strings so templates stay logic-free.

use std::time::Duration;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use chrono::Utc;
use reyana_core::{
    Action, CartLine, CategoryFilter, LoginMode, PaymentMethod, Product, StoreState, reduce,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::{load_store, save_store};
use crate::state::AppState;

/// Category tab display data.
#[derive(Clone)]
pub struct CategoryTab {
    pub label: &'static str,
    pub active: bool,
}

/// Product card display data.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            category: product.category.label(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Cart line display data.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub qty: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.as_i32(),
            name: line.name.clone(),
            qty: line.qty,
            price: line.price.to_string(),
            line_price: line.line_total().to_string(),
        }
    }
}

/// Cart panel display data.
#[derive(Clone)]
pub struct CartView {
    pub open: bool,
    pub items: Vec<CartItemView>,
    pub count: u64,
    pub total: String,
}

/// Checkout modal display data.
#[derive(Clone)]
pub struct CheckoutView {
    pub open: bool,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment: &'static str,
    pub error: Option<String>,
}

/// Login modal display data.
#[derive(Clone)]
pub struct LoginView {
    pub open: bool,
    pub signup: bool,
}

/// Order notification display data.
#[derive(Clone)]
pub struct NotificationView {
    pub ticket: u64,
    pub total: String,
    pub item_count: u64,
    /// Seconds until the page should reload to drop the notification.
    pub refresh_after_secs: u64,
}

/// Storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub store_name: String,
    pub search: String,
    pub sorted: bool,
    pub categories: Vec<CategoryTab>,
    pub products: Vec<ProductView>,
    pub cart: CartView,
    pub checkout: CheckoutView,
    pub login: LoginView,
    pub notification: Option<NotificationView>,
}

/// Build the page for `store`.
///
/// `checkout_error` forces the checkout modal open with an alert.
#[must_use]
pub fn render_page(
    state: &AppState,
    store: &StoreState,
    checkout_error: Option<String>,
) -> HomeTemplate {
    let now = Utc::now();
    let dismiss_after = state.config().notification_dismiss_after;

    HomeTemplate {
        store_name: state.config().store_name.clone(),
        search: store.filters.search.clone(),
        sorted: store.filters.sort_by_price,
        categories: CategoryFilter::OPTIONS
            .into_iter()
            .map(|filter| CategoryTab {
                label: filter.label(),
                active: filter == store.filters.category,
            })
            .collect(),
        products: store
            .view(state.catalog())
            .into_iter()
            .map(ProductView::from)
            .collect(),
        cart: CartView {
            open: store.cart_open,
            items: store.cart.lines().iter().map(CartItemView::from).collect(),
            count: store.cart.count(),
            total: store.cart.total().to_string(),
        },
        checkout: CheckoutView {
            open: store.checkout_open || checkout_error.is_some(),
            name: store.checkout_form.name.clone(),
            phone: store.checkout_form.phone.clone(),
            address: store.checkout_form.address.clone(),
            payment: PaymentMethod::CashOnDelivery.label(),
            error: checkout_error,
        },
        login: LoginView {
            open: store.login.is_some(),
            signup: store.login == Some(LoginMode::Signup),
        },
        notification: store
            .notification
            .as_ref()
            .map(|notification| NotificationView {
                ticket: notification.ticket.as_u64(),
                total: notification.total.to_string(),
                item_count: notification.item_count,
                refresh_after_secs: whole_seconds(notification.remaining(now, dismiss_after)),
            }),
    }
}

/// Round up to whole seconds, never below one.
fn whole_seconds(duration: Duration) -> u64 {
    let secs = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);
    secs.max(1)
}

/// Display the storefront page.
///
/// An order notification that has outlived its delay is dismissed here,
/// before rendering.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let mut store = load_store(&session).await?;

    let dismiss_after = state.config().notification_dismiss_after;
    if let Some(ticket) = store.due_notification(Utc::now(), dismiss_after) {
        store = reduce(
            state.catalog(),
            &store,
            Action::DismissNotification(ticket),
        )?;
        save_store(&session, &store).await?;
        tracing::debug!(ticket = ticket.as_u64(), "order notification expired");
    }

    Ok(render_page(&state, &store, None))
}
