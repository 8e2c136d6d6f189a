mod cache;
mod config;
mod repos;
mod services;

pub use cache::{Caches, CompanyPageKey};
pub use config::Config;
pub use repos::{ICompanyRepo, Repos};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct RegistryContext {
    pub repos: Repos,
    pub config: Config,
    pub caches: Caches,
    pub vat_verifier: Arc<dyn IVatVerifier>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl RegistryContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let vat_verifier = Arc::new(ViesVatVerifier::new(
            config.vies_url.clone(),
            Duration::from_secs(config.vies_timeout_secs),
        ));
        Self {
            repos,
            caches: Caches::create(),
            vat_verifier,
            config,
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            caches: Caches::create(),
            vat_verifier: Arc::new(StubVatVerifier),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> RegistryContext {
    RegistryContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
