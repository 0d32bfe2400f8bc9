use std::io;

use bloom_app::database;
use clap::Args;
use sqlx::{PgConnection, query, query_scalar};

use crate::cli::write_error;

#[derive(Debug, Args)]
pub(crate) struct EnsureAppRoleArgs {
    /// Role the storefront connects as
    #[arg(long, default_value = "bloom_app")]
    role_name: String,

    /// Password for the role
    #[arg(long, env = "APP_DB_PASSWORD", hide_env_values = true)]
    password: String,
}

/// Superusers and `BYPASSRLS` roles skip the cart policies, so the runtime
/// role is forced to neither.
pub(crate) async fn run(
    args: EnsureAppRoleArgs,
    database_url: &str,
    out: &mut impl io::Write,
) -> Result<(), String> {
    if args.role_name.trim().is_empty() {
        return Err("role_name cannot be empty".to_string());
    }

    if args.password.trim().is_empty() {
        return Err("password cannot be empty".to_string());
    }

    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|error| format!("failed to start transaction: {error}"))?;

    let role = quote(&mut tx, "SELECT quote_ident($1)", &args.role_name, "role name").await?;
    let password = quote(&mut tx, "SELECT quote_literal($1)", &args.password, "password").await?;
    let database: String = query_scalar("SELECT quote_ident(current_database())")
        .fetch_one(&mut *tx)
        .await
        .map_err(|error| format!("failed to resolve database name: {error}"))?;

    let exists: bool = query_scalar("SELECT EXISTS (SELECT 1 FROM pg_roles WHERE rolname = $1)")
        .bind(&args.role_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|error| format!("failed to check role existence: {error}"))?;

    let verb = if exists { "ALTER" } else { "CREATE" };

    query(&format!(
        "{verb} ROLE {role} LOGIN PASSWORD {password} \
         NOSUPERUSER NOCREATEDB NOCREATEROLE NOREPLICATION NOBYPASSRLS"
    ))
    .execute(&mut *tx)
    .await
    .map_err(|error| format!("failed to {} role: {error}", verb.to_lowercase()))?;

    for grant in [
        format!("GRANT CONNECT ON DATABASE {database} TO {role}"),
        format!("GRANT USAGE ON SCHEMA public TO {role}"),
        format!("GRANT SELECT, INSERT, UPDATE, DELETE ON products, cart_items TO {role}"),
    ] {
        query(&grant)
            .execute(&mut *tx)
            .await
            .map_err(|error| format!("failed to apply `{grant}`: {error}"))?;
    }

    tx.commit()
        .await
        .map_err(|error| format!("failed to commit changes: {error}"))?;

    writeln!(out, "ensured app role {}", args.role_name).map_err(|error| write_error(&error))
}

async fn quote(
    conn: &mut PgConnection,
    sql: &str,
    value: &str,
    what: &str,
) -> Result<String, String> {
    query_scalar(sql)
        .bind(value)
        .fetch_one(conn)
        .await
        .map_err(|error| format!("failed to quote {what}: {error}"))
}
