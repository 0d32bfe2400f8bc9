//! CLI configuration module

pub(crate) mod db;
pub(crate) mod observability;

pub(crate) use db::DatabaseConfig;
pub(crate) use observability::{LogFormat, LoggingConfig};
