//! The static product catalog and its filtered view.
//!
//! The catalog is built once at startup and never mutated. Everything a
//! shopper sees on the product grid is derived from it on read through
//! [`Catalog::view`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{Category, CategoryFilter, Price, ProductId};

/// Errors that can occur when building a [`Catalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(ProductId),
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    /// Remote image URL.
    pub image: String,
}

impl Product {
    fn seed(id: i32, name: &str, category: Category, price: u64, image: &str) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            category,
            price: Price::new(price),
            image: image.to_string(),
        }
    }
}

/// Filters applied to the catalog before display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewFilters {
    pub category: CategoryFilter,
    /// Case-insensitive substring matched against product names.
    pub search: String,
    /// Ascending price order when set, catalog order otherwise.
    pub sort_by_price: bool,
}

impl ViewFilters {
    /// Whether `product` passes both the category and search predicates.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category)
            && product
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }
}

/// The read-only set of purchasable products, in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProductId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The Reyana Treders launch catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product::seed(
                    1,
                    "Herbal Face Cream",
                    Category::Cosmetics,
                    249,
                    "https://images.unsplash.com/photo-1585386959984-a41552231693",
                ),
                Product::seed(
                    2,
                    "Luxury Pen Set",
                    Category::Stationery,
                    499,
                    "https://images.unsplash.com/photo-1524995997946-a1c2e315a42f",
                ),
                Product::seed(
                    3,
                    "Organic Rice (1kg)",
                    Category::Grocery,
                    99,
                    "https://images.unsplash.com/photo-1600087626120-5abf8b7e66d2",
                ),
                Product::seed(
                    4,
                    "Lipstick Combo Pack",
                    Category::Cosmetics,
                    399,
                    "https://images.unsplash.com/photo-1585386959984-a41552231693",
                ),
                Product::seed(
                    5,
                    "A4 Notebook Pack",
                    Category::Stationery,
                    299,
                    "https://images.unsplash.com/photo-1585306679743-6a30d8f6b8b8",
                ),
                Product::seed(
                    6,
                    "Fresh Lentils (500g)",
                    Category::Grocery,
                    79,
                    "https://images.unsplash.com/photo-1590080875831-48c6222b5d2d",
                ),
            ],
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The products to display for `filters`.
    ///
    /// Keeps catalog order unless `sort_by_price` is set, in which case the
    /// matches are stable-sorted by ascending price. An empty result means
    /// nothing matched.
    #[must_use]
    pub fn view(&self, filters: &ViewFilters) -> Vec<&Product> {
        let mut shown: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| filters.matches(product))
            .collect();
        if filters.sort_by_price {
            shown.sort_by_key(|product| product.price);
        }
        shown
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
