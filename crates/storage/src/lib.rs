use sqlx::postgres::{PgPool, PgPoolOptions};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use error::Result;

/// Connection pool wrapper shared by the web crate.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::ProfileCode;
    use crate::services::registration_code::format_registration_code;

    // Exercises the public module tree the way the web crate consumes it.
    #[test]
    fn test_crate_root_exposes_domain_modules() {
        assert_eq!(ProfileCode::parse("ATL"), Some(ProfileCode::Athlete));
        assert_eq!(format_registration_code(0), "001");
    }
}
