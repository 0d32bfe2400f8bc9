//! Catalog browsing: search, category filter and sort order.

use std::{cmp::Ordering, str::FromStr};

use crate::products::{
    errors::ProductError,
    models::{Category, Product},
};

/// Sort order for catalog listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Most recently added first.
    #[default]
    Newest,

    /// Cheapest first.
    PriceLow,

    /// Most expensive first.
    PriceHigh,

    /// Alphabetical by name.
    Name,
}

impl FromStr for ProductSort {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "name" => Ok(Self::Name),
            other => Err(ProductError::UnknownSort(other.to_string())),
        }
    }
}

/// Filter and ordering applied to a catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name or description.
    pub search: Option<String>,

    /// Restrict to one category; `None` means all.
    pub category: Option<Category>,

    pub sort: ProductSort,
}

impl ProductQuery {
    /// Filter and order `products`.
    #[must_use]
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<Product> = products
            .into_iter()
            .filter(|product| self.category.is_none_or(|category| product.category == category))
            .filter(|product| needle.as_deref().is_none_or(|needle| matches_search(product, needle)))
            .collect();

        matched.sort_by(|a, b| self.compare(a, b));

        matched
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self.sort {
            ProductSort::Newest => b.created_at.cmp(&a.created_at),
            ProductSort::PriceLow => a.price.cmp(&b.price),
            ProductSort::PriceHigh => b.price.cmp(&a.price),
            ProductSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}
