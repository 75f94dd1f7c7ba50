//! Storage layer - database entities and repositories.

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

/// Open the database connection described by the configuration and, when
/// enabled, bring the schema up to date.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(config.max_connections);
    let db = Database::connect(options).await?;
    if config.run_migrations {
        migrations::Migrator::up(&db, None).await?;
    }
    Ok(db)
}
