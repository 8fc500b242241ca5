//! HTTP route handlers for storefront.
//!
//! Every mutating route is a plain HTML form post that dispatches one store
//! action and redirects back to the page.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Storefront page
//! GET  /health                 - Health check
//!
//! # Catalog filters
//! POST /filters/category       - Select category tab
//! POST /filters/search         - Set search text
//! POST /filters/sort           - Toggle sort by price
//!
//! # Cart
//! POST /cart/add               - Add one unit of a product
//! POST /cart/quantity          - Adjust a line's quantity
//! POST /cart/remove            - Remove a line
//! POST /cart/open              - Show the cart panel
//! POST /cart/close             - Hide the cart panel
//!
//! # Checkout (cash on delivery)
//! POST /checkout/open          - Show the checkout modal
//! POST /checkout/place         - Submit delivery details
//! POST /checkout/cancel        - Hide the checkout modal
//!
//! # Login (display only)
//! POST /login/open             - Show the login modal
//! POST /login/toggle           - Switch between login and sign up
//! POST /login/close            - Hide the login modal
//!
//! # Notification
//! POST /notification/dismiss   - Dismiss the order notification
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod home;
pub mod login;
pub mod notification;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use reyana_core::{Action, StoreState, reduce};
use tower_sessions::Session;

use crate::error::Result;
use crate::models::{load_store, save_store};
use crate::state::AppState;

/// Apply `action` to the shopper's session state and persist the result.
///
/// # Errors
///
/// Returns an error if the session store fails or the store rejects the
/// action; the session is left untouched in either case.
pub async fn dispatch(state: &AppState, session: &Session, action: Action) -> Result<StoreState> {
    let current = load_store(session).await?;
    let next = reduce(state.catalog(), &current, action)?;
    save_store(session, &next).await?;
    Ok(next)
}

/// Redirect back to the storefront page after a form post.
#[must_use]
pub fn back_to_page() -> Redirect {
    Redirect::to("/")
}

/// Create the catalog filter routes router.
pub fn filter_routes() -> Router<AppState> {
    Router::new()
        .route("/category", post(catalog::set_category))
        .route("/search", post(catalog::set_search))
        .route("/sort", post(catalog::toggle_sort))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/quantity", post(cart::change_quantity))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(checkout::open))
        .route("/place", post(checkout::place))
        .route("/cancel", post(checkout::cancel))
}

/// Create the login modal routes router.
pub fn login_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(login::open))
        .route("/toggle", post(login::toggle))
        .route("/close", post(login::close))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/filters", filter_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .nest("/login", login_routes())
        .route("/notification/dismiss", post(notification::dismiss))
}
