use std::{io, sync::Arc};

use bloom::{
    carts::{CartAggregate, CartError, CartStore, Refresh, StoreError},
    checkout::{CheckoutError, DeliveryDetails, checkout},
    products::ProductUuid,
    users::{Session, UserUuid},
};
use bloom_app::context::AppContext;
use clap::{Args, Subcommand};
use jiff::civil::Date;

use crate::cli::{render, write_error};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    /// Signed-in user; without one the cart is empty and read-only
    #[arg(long, env = "BLOOM_USER_UUID", global = true)]
    user: Option<UserUuid>,

    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart with its totals
    Show {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Put a product in the cart, replacing any quantity already there
    Add {
        product: ProductUuid,

        #[arg(long, short, default_value_t = 1)]
        quantity: u32,
    },

    /// Change a product's quantity; zero or less removes it
    Update {
        product: ProductUuid,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Take a product out of the cart
    Remove { product: ProductUuid },

    /// Empty the cart
    Clear,

    /// Place the order and empty the cart
    Checkout(CheckoutArgs),
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Delivery address
    #[arg(long)]
    address: String,

    /// Preferred delivery date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<Date>,

    /// Notes for the courier
    #[arg(long)]
    instructions: Option<String>,
}

pub(crate) async fn run(
    command: CartCommand,
    database_url: &str,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let ctx = AppContext::from_database_url(database_url)
        .await
        .map_err(|error| format!("{error}"))?;

    execute(command, ctx.carts, out).await
}

async fn execute(
    command: CartCommand,
    store: Arc<dyn CartStore>,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let cart = CartAggregate::new(store, Session::from(command.user));

    if cart.fetch().await == Refresh::Failed {
        return Err("failed to load cart".to_string());
    }

    match command.command {
        CartSubcommand::Show { json: true } => {
            render::write_cart_json(out, &cart.projection()).map_err(|error| write_error(&error))
        }
        CartSubcommand::Show { json: false } => show(&cart, out),
        CartSubcommand::Add { product, quantity } => {
            cart.add(product, quantity).await.map_err(cart_error)?;

            show(&cart, out)
        }
        CartSubcommand::Update { product, quantity } => {
            cart.update_quantity(product, quantity)
                .await
                .map_err(cart_error)?;

            show(&cart, out)
        }
        CartSubcommand::Remove { product } => {
            cart.remove(product).await.map_err(cart_error)?;

            show(&cart, out)
        }
        CartSubcommand::Clear => {
            cart.clear().await.map_err(cart_error)?;

            show(&cart, out)
        }
        CartSubcommand::Checkout(args) => {
            let confirmation = checkout(
                &cart,
                DeliveryDetails {
                    address: args.address,
                    preferred_date: args.date,
                    instructions: args.instructions,
                },
            )
            .await
            .map_err(|error| match error {
                CheckoutError::MissingAddress => "a delivery address is required".to_string(),
                CheckoutError::Cart(error) => cart_error(error),
            })?;

            render::write_confirmation(out, &confirmation).map_err(|error| write_error(&error))
        }
    }
}

fn show(cart: &CartAggregate, out: &mut impl io::Write) -> Result<(), String> {
    render::write_cart(out, &cart.projection()).map_err(|error| write_error(&error))
}

fn cart_error(error: CartError) -> String {
    match error {
        CartError::NotAuthenticated => {
            "sign in first: pass --user or set BLOOM_USER_UUID".to_string()
        }
        CartError::InvalidQuantity(quantity) => format!("{quantity} is not a valid quantity"),
        CartError::Store(StoreError::UnknownProduct) => "no such product".to_string(),
        CartError::Store(error) => format!("cart update failed: {error}"),
    }
}
