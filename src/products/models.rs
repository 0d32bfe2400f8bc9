//! Product Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{products::errors::ProductError, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Shop category a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cut-flower bouquets.
    Bouquets,

    /// Potted plants.
    Plants,

    /// Arrangements for occasions.
    Occasions,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Bouquets, Self::Plants, Self::Occasions];

    /// Storage and display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bouquets => "bouquets",
            Self::Plants => "plants",
            Self::Occasions => "occasions",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProductError::UnknownCategory(s.to_string()))
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
}

impl NewProduct {
    /// Check the fields a catalog must refuse to store.
    ///
    /// # Errors
    ///
    /// - [`ProductError::BlankName`]: the name is empty or whitespace.
    /// - [`ProductError::NegativePrice`]: the price is below zero.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::BlankName);
        }

        if self.price < Decimal::ZERO {
            return Err(ProductError::NegativePrice(self.price));
        }

        Ok(())
    }
}
