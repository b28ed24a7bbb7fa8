use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use thiserror::Error;

use crate::core::config::DatabaseConfig;

/// Failure of a document store operation, split by cause
#[derive(Debug, Error)]
pub enum StoreError {
    /// The server could not be reached or its connections were dropped
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// The server was reached but the operation failed
    #[error("{0}")]
    Operation(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Operation(err.to_string()),
        }
    }
}

/// Connect to MongoDB and verify liveness with an admin ping.
///
/// Called once at startup; a failure here is fatal for the process.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.url).await?;
    options.server_selection_timeout = Some(config.server_selection_timeout);
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

    let client = Client::with_options(options)?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;

    Ok(client.database(&config.database_name))
}
