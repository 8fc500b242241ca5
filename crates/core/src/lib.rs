//! Reyana Core - Catalog, cart and checkout state.
//!
//! This crate holds everything the storefront knows about products and a
//! shopper's session:
//! - [`catalog`] - The static product list and the filtered/sorted view
//! - [`cart`] - Cart lines, quantity arithmetic and totals
//! - [`checkout`] - The delivery form and its validation
//! - [`notification`] - The order-placed notification and its dismissal ticket
//! - [`store`] - The state container and its reducer
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no clocks. Callers pass the current time in where it matters, which keeps
//! every transition reproducible in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod notification;
pub mod store;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogError, Product, ViewFilters};
pub use checkout::{CheckoutError, CheckoutField, CheckoutForm, PaymentMethod};
pub use notification::{DEFAULT_DISMISS_AFTER, NotificationTicket, OrderNotification};
pub use store::{Action, LoginMode, StoreError, StoreState, reduce};
pub use types::*;
