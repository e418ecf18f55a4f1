use axum::http::{header::CONTENT_TYPE, Method};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    model::catalog::MasterShopSeed,
    server::{
        config::Config, data::master_shop::MasterShopRepository, error::Error,
        service::settings::SettingsService,
    },
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Write default settings for any key not yet present
pub async fn initialize_defaults(db: &DatabaseConnection) -> Result<(), Error> {
    SettingsService::new(db).ensure_defaults().await
}

/// Load the master catalog seed file, if one is configured, inserting only
/// entries whose gazette code is not already present
pub async fn seed_master_catalog(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let Some(path) = &config.master_data_path else {
        return Ok(());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|err| Error::ParseError(format!("Failed to read {path}: {err}")))?;
    let entries: Vec<MasterShopSeed> = serde_json::from_str(&contents)
        .map_err(|err| Error::ParseError(format!("Failed to parse {path}: {err}")))?;

    let inserted = MasterShopRepository::new(db).insert_missing(entries).await?;
    tracing::info!("Seeded master catalog from {path}: {inserted} new entries");

    Ok(())
}

/// CORS layer for the API routes
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}
