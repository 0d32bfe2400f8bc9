//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub(crate) struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    pub database_url: Option<String>,
}

impl DatabaseConfig {
    /// The configured connection string.
    ///
    /// # Errors
    ///
    /// Returns an error when neither `--database-url` nor `DATABASE_URL` is set.
    pub(crate) fn url(&self) -> Result<&str, String> {
        self.database_url
            .as_deref()
            .ok_or_else(|| "DATABASE_URL is not set; pass --database-url".to_string())
    }
}
