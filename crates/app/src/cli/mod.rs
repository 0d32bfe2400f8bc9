use std::io;

use clap::{Parser, Subcommand};

use crate::config::{DatabaseConfig, LoggingConfig};

mod cart;
mod db;
mod products;
mod render;

#[derive(Debug, Parser)]
#[command(name = "bloom-app", about = "Bloom storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and add catalog products
    Products(products::ProductsCommand),

    /// Inspect and change the signed-in user's cart
    Cart(cart::CartCommand),

    /// Database administration
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self, out: &mut impl io::Write) -> Result<(), String> {
        let url = self.database.url()?;

        match self.command {
            Commands::Products(command) => products::run(command, url, out).await,
            Commands::Cart(command) => cart::run(command, url, out).await,
            Commands::Db(command) => db::run(command, url, out).await,
        }
    }
}

fn write_error(error: &io::Error) -> String {
    format!("failed to write output: {error}")
}
