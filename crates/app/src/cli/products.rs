use std::io;

use bloom::products::{
    Category, NewProduct, ProductCatalog, ProductError, ProductQuery, ProductSort, ProductUuid,
};
use bloom_app::context::AppContext;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::cli::{render, write_error};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List catalog products
    List(ListProductsArgs),

    /// Add a product to the catalog
    Create(CreateProductArgs),
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Case-insensitive match on name or description
    #[arg(long)]
    search: Option<String>,

    /// Only products in this category (bouquets, plants, occasions)
    #[arg(long)]
    category: Option<Category>,

    /// Sort order (newest, price-low, price-high, name)
    #[arg(long, default_value = "newest")]
    sort: ProductSort,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    #[arg(long)]
    name: String,

    /// Unit price in dollars, e.g. 12.50
    #[arg(long)]
    price: Decimal,

    #[arg(long)]
    category: Category,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    image_url: Option<String>,

    /// Repeat for several tags
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Generated when omitted
    #[arg(long)]
    uuid: Option<ProductUuid>,
}

pub(crate) async fn run(
    command: ProductsCommand,
    database_url: &str,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let ctx = AppContext::from_database_url(database_url)
        .await
        .map_err(|error| format!("{error}"))?;

    match command.command {
        ProductsSubcommand::List(args) => list(ctx.products.as_ref(), args, out).await,
        ProductsSubcommand::Create(args) => create(ctx.products.as_ref(), args, out).await,
    }
}

async fn list(
    catalog: &dyn ProductCatalog,
    args: ListProductsArgs,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let products = catalog
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    let query = ProductQuery {
        search: args.search,
        category: args.category,
        sort: args.sort,
    };

    let products = query.apply(products);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &products)
            .map_err(|error| format!("failed to encode products: {error}"))?;

        return writeln!(out).map_err(|error| write_error(&error));
    }

    render::write_products(out, &products).map_err(|error| write_error(&error))
}

async fn create(
    catalog: &dyn ProductCatalog,
    args: CreateProductArgs,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let product = catalog
        .create_product(NewProduct {
            uuid: args.uuid.unwrap_or_else(ProductUuid::new),
            name: args.name,
            description: args.description,
            price: args.price,
            image_url: args.image_url,
            category: args.category,
            tags: args.tags,
        })
        .await
        .map_err(|error| match error {
            ProductError::AlreadyExists => "a product with that uuid already exists".to_string(),
            error => format!("failed to create product: {error}"),
        })?;

    render::write_products(out, std::slice::from_ref(&product)).map_err(|error| write_error(&error))
}

#[cfg(test)]
mod tests {
    use bloom::products::{MockProductCatalog, Product};
    use jiff::Timestamp;
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    fn product(
        name: &str,
        price: Decimal,
        category: Category,
        age_days: i64,
    ) -> TestResult<Product> {
        Ok(Product {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            description: None,
            price,
            image_url: None,
            category,
            tags: Vec::new(),
            created_at: Timestamp::from_second(1_767_225_600 - age_days * 86_400)?,
        })
    }

    #[tokio::test]
    async fn list_filters_and_sorts_before_rendering() -> TestResult {
        let products = vec![
            product("Monstera", dec!(30), Category::Plants, 1)?,
            product("Snake plant", dec!(18), Category::Plants, 2)?,
            product("Rose bouquet", dec!(45), Category::Bouquets, 3)?,
        ];

        let mut catalog = MockProductCatalog::new();

        catalog
            .expect_list_products()
            .times(1)
            .return_once(move || Ok(products));

        let mut out = Vec::new();

        list(
            &catalog,
            ListProductsArgs {
                search: None,
                category: Some(Category::Plants),
                sort: ProductSort::PriceLow,
                json: true,
            },
            &mut out,
        )
        .await?;

        let listed: Vec<Product> = serde_json::from_slice(&out)?;
        let names: Vec<_> = listed.iter().map(|product| product.name.as_str()).collect();

        assert_eq!(names, ["Snake plant", "Monstera"]);

        Ok(())
    }

    #[tokio::test]
    async fn create_reports_duplicates_plainly() {
        let mut catalog = MockProductCatalog::new();

        catalog
            .expect_create_product()
            .times(1)
            .return_once(|_| Err(ProductError::AlreadyExists));

        let mut out = Vec::new();

        let result = create(
            &catalog,
            CreateProductArgs {
                name: "Rose".to_string(),
                price: dec!(12.50),
                category: Category::Bouquets,
                description: None,
                image_url: None,
                tags: Vec::new(),
                uuid: None,
            },
            &mut out,
        )
        .await;

        assert_eq!(
            result,
            Err("a product with that uuid already exists".to_string())
        );
        assert!(out.is_empty());
    }
}
