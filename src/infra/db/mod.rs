//! Database connection handling and migration management.

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// One migration's name together with whether it has been applied.
pub struct MigrationRecord {
    pub name: String,
    pub applied: bool,
}

/// Owns the SeaORM connection handle.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection without touching the schema. Used by the
    /// migrate command, which controls migrations explicitly.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Open a connection and bring the schema up to date, for server
    /// startup.
    pub async fn connect_and_migrate(config: &Config) -> Result<Self, DbErr> {
        let db = Self::connect(config).await?;
        Migrator::up(&db.connection, None).await?;
        tracing::info!("database connected, schema up to date");
        Ok(db)
    }

    /// Wrap an already established connection (test use).
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Apply all pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Drop everything and re-run the full migration set.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Every known migration, flagged applied or pending.
    pub async fn migration_status(&self) -> Result<Vec<MigrationRecord>, DbErr> {
        use sea_orm::EntityTrait;
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| MigrationRecord {
                name: m.name().to_string(),
                applied: applied.contains(m.name()),
            })
            .collect())
    }

    /// Round-trip a trivial query to verify the connection is live.
    pub async fn ping(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        self.connection
            .execute(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }
}
