// src/bootstrap.rs
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::{
    ports::{ClockPort, SlugGeneratorPort},
    services::ApplicationServices,
};
use crate::config::AppConfig;
use crate::domain::{
    post::{PostReadRepository, PostWriteRepository},
    user::UserRepository,
};
use crate::infrastructure::{
    database,
    repositories::{SqlitePostReadRepository, SqlitePostWriteRepository, SqliteUserRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};

/// Opens the configured SQLite database, applies the bundled schema and wires
/// the application services on top of it.
pub async fn build_services(config: &AppConfig) -> Result<ApplicationServices> {
    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url()))?;
    database::run_migrations(&pool)
        .await
        .context("failed to apply database schema")?;
    tracing::info!(database_url = config.database_url(), "post store ready");

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(SqlitePostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(SqlitePostReadRepository::new(pool));

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    Ok(ApplicationServices::new(
        user_repo,
        post_write_repo,
        post_read_repo,
        clock,
        slugger,
        config.service_settings(),
    ))
}
