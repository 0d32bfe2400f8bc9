//! Cart Records

use bloom::{
    carts::{CartItem, CartItemUuid, ProductSnapshot, StoreError, models::checked_quantity},
    products::ProductUuid,
    users::UserUuid,
};
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow};
use uuid::Uuid;

/// A cart row joined with the product it references.
#[derive(Debug, Clone)]
pub(crate) struct CartItemRecord {
    pub uuid: Uuid,
    pub user_uuid: Uuid,
    pub quantity: i64,
    pub created_at: Timestamp,
    pub product_uuid: Uuid,
    pub product_name: String,
    pub product_price: Decimal,
    pub product_image_url: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            user_uuid: row.try_get("user_uuid")?,
            quantity: row.try_get("quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            product_uuid: row.try_get("product_uuid")?,
            product_name: row.try_get("product_name")?,
            product_price: row.try_get("product_price")?,
            product_image_url: row.try_get("product_image_url")?,
        })
    }
}

impl TryFrom<CartItemRecord> for CartItem {
    type Error = StoreError;

    fn try_from(record: CartItemRecord) -> Result<Self, Self::Error> {
        let product = ProductSnapshot::new(
            ProductUuid::from_uuid(record.product_uuid),
            record.product_name,
            record.product_price,
            record.product_image_url,
        )?;

        Ok(Self {
            uuid: CartItemUuid::from_uuid(record.uuid),
            user_uuid: UserUuid::from_uuid(record.user_uuid),
            product,
            quantity: checked_quantity(record.quantity)?,
            created_at: record.created_at,
        })
    }
}
