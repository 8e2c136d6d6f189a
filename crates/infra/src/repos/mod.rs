mod company;

pub use company::{ICompanyRepo, InMemoryCompanyRepo, PostgresCompanyRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub companies: Arc<dyn ICompanyRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            companies: Arc::new(PostgresCompanyRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            companies: Arc::new(InMemoryCompanyRepo::new()),
        }
    }
}
