//! Serve command: bring up the database and run the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let database = Database::connect_and_migrate(&config).await?;

    let state = AppState::from_database(Arc::new(database));
    let app = create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("could not bind {addr}: {e}")))?;

    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("server error: {e}")))?;

    Ok(())
}
