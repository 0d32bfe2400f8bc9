use std::io;

use clap::{Args, Subcommand};

mod ensure_app_role;
mod migrate;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate,

    /// Create or update the runtime role the stores connect as
    EnsureAppRole(ensure_app_role::EnsureAppRoleArgs),
}

pub(crate) async fn run(
    command: DbCommand,
    database_url: &str,
    out: &mut impl io::Write,
) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate => migrate::run(database_url, out).await,
        DbSubcommand::EnsureAppRole(args) => ensure_app_role::run(args, database_url, out).await,
    }
}
