//! Migrate command: schema management against the configured database.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Plain connect: which migrations run is decided by the action.
    let db = Database::connect(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("pending migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("last migration rolled back");
        }
        MigrateAction::Status => {
            for record in db.migration_status().await? {
                let state = if record.applied { "applied" } else { "pending" };
                println!("{}: {}", record.name, state);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("dropping all tables and re-running every migration");
            db.fresh_migrations().await?;
            tracing::info!("fresh migration run complete");
        }
    }

    Ok(())
}
