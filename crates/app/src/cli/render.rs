//! Terminal rendering for products, carts and orders.

use std::io;

use bloom::{
    carts::{CartItem, Projection},
    checkout::OrderConfirmation,
    products::Product,
};
use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

pub(crate) const EMPTY_CART: &str = "Your cart is empty";

/// Cart rows plus the totals the drawer shows.
#[derive(Debug, Serialize)]
pub(crate) struct CartSummary<'a> {
    pub items: &'a [CartItem],
    pub total_items: u64,
    pub total_price: Decimal,
}

impl<'a> From<&'a Projection> for CartSummary<'a> {
    fn from(projection: &'a Projection) -> Self {
        Self {
            items: projection.items(),
            total_items: projection.total_items(),
            total_price: projection.total_price(),
        }
    }
}

pub(crate) fn money(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}

pub(crate) fn write_products(out: &mut impl io::Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products found");
    }

    let mut builder = Builder::default();

    builder.push_record(["Name", "Category", "Price", "Tags", "UUID"]);

    for product in products {
        builder.push_record([
            product.name.clone(),
            product.category.to_string(),
            money(product.price),
            product.tags.join(", "),
            product.uuid.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());
    table.modify(Rows::first(), Alignment::left());

    writeln!(out, "{table}")
}

pub(crate) fn write_cart(out: &mut impl io::Write, projection: &Projection) -> io::Result<()> {
    if projection.is_empty() {
        return writeln!(out, "{EMPTY_CART}");
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Unit Price", "Qty", "Line Total"]);

    for item in projection {
        builder.push_record([
            item.product.name.clone(),
            money(item.product.price),
            item.quantity.to_string(),
            money(item.line_total()),
        ]);
    }

    builder.push_record([
        "Total".to_string(),
        String::new(),
        projection.total_items().to_string(),
        money(projection.total_price()),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.modify(Rows::first(), Alignment::left());

    writeln!(out, "{table}")
}

pub(crate) fn write_cart_json(out: &mut impl io::Write, projection: &Projection) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &CartSummary::from(projection))?;

    writeln!(out)
}

pub(crate) fn write_confirmation(
    out: &mut impl io::Write,
    confirmation: &OrderConfirmation,
) -> io::Result<()> {
    writeln!(out, "Order placed at {}", confirmation.placed_at)?;
    writeln!(out, "  items:    {}", confirmation.items)?;
    writeln!(out, "  total:    {}", money(confirmation.total))?;
    writeln!(out, "  deliver:  {}", confirmation.delivery.address)?;

    if let Some(date) = confirmation.delivery.preferred_date {
        writeln!(out, "  on:       {date}")?;
    }

    if let Some(instructions) = &confirmation.delivery.instructions {
        writeln!(out, "  notes:    {instructions}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use bloom::{
        carts::{CartItemUuid, ProductSnapshot},
        checkout::DeliveryDetails,
        products::{Category, ProductUuid},
        users::UserUuid,
    };
    use jiff::{Timestamp, civil::date};
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    fn item(name: &str, price: Decimal, quantity: u32) -> CartItem {
        CartItem {
            uuid: CartItemUuid::new(),
            user_uuid: UserUuid::new(),
            product: ProductSnapshot {
                uuid: ProductUuid::new(),
                name: name.to_string(),
                price,
                image_url: None,
            },
            quantity,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn rendered(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> TestResult<String> {
        let mut out = Vec::new();

        write(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn money_uses_dollars_and_cents() {
        assert_eq!(money(dec!(12.5)), "$12.50");
        assert_eq!(money(dec!(1234.00)), "$1,234.00");
    }

    #[test]
    fn empty_cart_says_so() -> TestResult {
        let output = rendered(|out| write_cart(out, &Projection::default()))?;

        assert_eq!(output.trim(), EMPTY_CART);

        Ok(())
    }

    #[test]
    fn cart_table_lists_rows_and_total() -> TestResult {
        let projection = Projection::new(vec![
            item("Red roses", dec!(12.50), 2),
            item("Tulips", dec!(4.25), 3),
        ]);

        let output = rendered(|out| write_cart(out, &projection))?;

        assert!(output.contains("Red roses"), "{output}");
        assert!(output.contains("$25.00"), "{output}");
        assert!(output.contains("$12.75"), "{output}");
        assert!(output.contains("$37.75"), "{output}");

        Ok(())
    }

    #[test]
    fn cart_json_carries_totals() -> TestResult {
        let projection = Projection::new(vec![item("Tulips", dec!(4.25), 3)]);

        let output = rendered(|out| write_cart_json(out, &projection))?;
        let value: serde_json::Value = serde_json::from_str(&output)?;

        assert_eq!(value["total_items"], 3);
        assert_eq!(value["total_price"], "12.75");
        assert_eq!(value["items"][0]["product"]["name"], "Tulips");

        Ok(())
    }

    #[test]
    fn product_table_shows_price_and_category() -> TestResult {
        let products = [Product {
            uuid: ProductUuid::new(),
            name: "Fiddle leaf fig".to_string(),
            description: None,
            price: dec!(39.00),
            image_url: None,
            category: Category::Plants,
            tags: vec!["indoor".to_string()],
            created_at: Timestamp::UNIX_EPOCH,
        }];

        let output = rendered(|out| write_products(out, &products))?;

        assert!(output.contains("Fiddle leaf fig"), "{output}");
        assert!(output.contains("plants"), "{output}");
        assert!(output.contains("$39.00"), "{output}");

        Ok(())
    }

    #[test]
    fn confirmation_includes_optional_delivery_details() -> TestResult {
        let confirmation = OrderConfirmation {
            items: 4,
            total: dec!(50.00),
            delivery: DeliveryDetails {
                address: "1 Garden Row".to_string(),
                preferred_date: Some(date(2026, 2, 14)),
                instructions: Some("Leave with neighbour".to_string()),
            },
            placed_at: Timestamp::UNIX_EPOCH,
        };

        let output = rendered(|out| write_confirmation(out, &confirmation))?;

        assert!(output.contains("$50.00"), "{output}");
        assert!(output.contains("2026-02-14"), "{output}");
        assert!(output.contains("Leave with neighbour"), "{output}");

        Ok(())
    }
}
