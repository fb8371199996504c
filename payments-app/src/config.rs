//! Configuration loading from environment.

use std::env;

use omise_gateway::DEFAULT_API_URL;

const DEFAULT_DATABASE_URL: &str = "sqlite://payment.db";

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub omise_public_key: String,
    pub omise_secret_key: String,
    pub omise_api_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let omise_public_key = lookup("OMISE_PUBLIC_KEY")
            .ok_or_else(|| anyhow::anyhow!("OMISE_PUBLIC_KEY environment variable is required"))?;

        let omise_secret_key = lookup("OMISE_SECRET_KEY")
            .ok_or_else(|| anyhow::anyhow!("OMISE_SECRET_KEY environment variable is required"))?;

        let omise_api_url =
            lookup("OMISE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            port,
            database_url,
            omise_public_key,
            omise_secret_key,
            omise_api_url,
        })
    }
}
