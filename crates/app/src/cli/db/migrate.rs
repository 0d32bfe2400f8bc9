use std::io;

use bloom_app::database;

use crate::cli::write_error;

pub(crate) async fn run(database_url: &str, out: &mut impl io::Write) -> Result<(), String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    writeln!(out, "migrations applied").map_err(|error| write_error(&error))
}
