//! Session-backed models for the storefront.

pub mod session;

pub use session::{keys, load_store, save_store};
