//! Product Records

use bloom::products::{Category, Product, ProductError, ProductUuid};
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub(crate) struct ProductRecord {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            image_url: row.try_get("image_url")?,
            category: row.try_get("category")?,
            tags: row.try_get("tags")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = ProductError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(record.uuid),
            name: record.name,
            description: record.description,
            price: record.price,
            image_url: record.image_url,
            category: record.category.parse::<Category>()?,
            tags: record.tags,
            created_at: record.created_at,
        })
    }
}
