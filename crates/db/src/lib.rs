//! MongoDB integration: client factory, seed application and maintenance helpers.

pub mod error;
pub mod maintenance;
pub mod seed;

use std::time::Duration;

use empresa_kernel::settings::DatabaseSettings;
use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

pub use error::DbError;
pub use maintenance::{inspect, purge, CollectionStatus};
pub use seed::{apply_seed, SeedReport};

/// Connect to the configured server, verify it answers a ping, and return
/// a handle to the configured database.
pub async fn connect(settings: &DatabaseSettings) -> Result<Database, DbError> {
    let mut options = ClientOptions::parse(&settings.uri)
        .await
        .map_err(|source| DbError::InvalidUri {
            uri: settings.uri.clone(),
            source,
        })?;

    options.server_selection_timeout =
        Some(Duration::from_millis(settings.server_selection_timeout_ms));
    options.connect_timeout = Some(Duration::from_millis(settings.connect_timeout_ms));
    options.app_name = Some(settings.app_name.clone());

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|source| match source.kind.as_ref() {
            ErrorKind::ServerSelection { .. } => DbError::Unreachable {
                uri: settings.uri.clone(),
                source,
            },
            _ => DbError::Driver(source),
        })?;

    tracing::info!(
        target: "empresa-db",
        database = %settings.name,
        "connected to MongoDB"
    );

    Ok(client.database(&settings.name))
}

/// Create `name` if the database does not have it yet. Returns whether it was created.
pub async fn ensure_collection(db: &Database, name: &str) -> Result<bool, DbError> {
    let existing = db.list_collection_names().await?;
    if existing.iter().any(|collection| collection == name) {
        tracing::debug!(target: "empresa-db", collection = name, "collection already exists");
        return Ok(false);
    }

    db.create_collection(name).await?;
    tracing::info!(target: "empresa-db", collection = name, "collection created");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_uri_is_reported_as_invalid() {
        let settings = DatabaseSettings {
            uri: "postgres://localhost:5432".to_string(),
            ..DatabaseSettings::default()
        };

        let err = connect(&settings).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidUri { .. }));
        assert!(err.to_string().contains("postgres://localhost:5432"));
    }
}
