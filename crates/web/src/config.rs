use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub admin_email: String,
    pub mailer_url: String,
    pub mailer_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            admin_email: std::env::var("ADMIN_EMAIL")
                .context("Cannot load ADMIN_EMAIL env variable")?,
            mailer_url: std::env::var("MAILER_URL")
                .context("Cannot load MAILER_URL env variable")?,
            mailer_api_key: std::env::var("MAILER_API_KEY").ok(),
        })
    }
}
