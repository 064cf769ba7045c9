//! MongoDB-backed storage adapter.
//!
//! Owns the handle to the external document store and exposes the generic
//! collection operations the rest of the workspace is written against:
//! [`Store::insert_one`] and [`Store::list_all`], keyed by collection name.
//!
//! The adapter tolerates missing configuration and an unreachable server.
//! Construction never fails; operations report [`StoreError`] instead, and
//! [`Store::health`] exposes the connection state for diagnostics without
//! throwing. The driver connects lazily and pools internally, so one
//! [`Store`] serves every in-flight request.

use std::time::Duration;

use futures::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Upper bound on server selection for any single operation, so a dead
/// store fails fast instead of hanging the request.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors surfaced by the storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No connection string or database name was configured at startup.
    #[error("document store is not configured")]
    NotConfigured,

    /// The store could not be reached or the operation failed mid-flight.
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Connection state reported by [`Store::health`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreHealth {
    /// Connection string or database name missing from the environment.
    NotConfigured,
    /// Configured, but the server did not answer a ping.
    Unreachable(String),
    /// The server answered a ping.
    Connected,
}

enum Inner {
    /// No configuration was provided.
    NotConfigured,
    /// Configuration was provided but the client could not be built
    /// (e.g. an unparseable connection string).
    Failed(String),
    /// Handle to the configured database.
    Ready(Database),
}

/// Handle to the external document store.
pub struct Store {
    inner: Inner,
}

impl Store {
    /// Build a store from optional configuration.
    ///
    /// Missing configuration or a bad connection string yields a store whose
    /// operations fail with [`StoreError`] and whose [`Store::health`]
    /// explains why; startup itself never fails on storage problems.
    pub async fn connect(url: Option<&str>, database: Option<&str>) -> Store {
        let (Some(url), Some(database)) = (url, database) else {
            tracing::warn!("document store configuration missing; store disabled");
            return Store {
                inner: Inner::NotConfigured,
            };
        };

        let inner = match build_client(url).await {
            Ok(client) => Inner::Ready(client.database(database)),
            Err(err) => {
                tracing::warn!(error = %err, "failed to initialize document store client");
                Inner::Failed(err.to_string())
            }
        };
        Store { inner }
    }

    /// A store with no backing configuration; every operation fails with
    /// [`StoreError::NotConfigured`].
    pub fn not_configured() -> Store {
        Store {
            inner: Inner::NotConfigured,
        }
    }

    /// Persist one record, returning the store-generated document id.
    ///
    /// Not idempotent: inserting equal content twice creates two documents.
    pub async fn insert_one<T>(&self, collection: &str, record: &T) -> Result<Bson, StoreError>
    where
        T: Serialize + Send + Sync,
    {
        let db = self.database()?;
        let result = db.collection::<T>(collection).insert_one(record).await?;
        Ok(result.inserted_id)
    }

    /// Read every record in a collection.
    ///
    /// A never-written collection yields an empty vec, not an error. Order
    /// is incidental (insertion order in practice), and there is no
    /// pagination on this surface.
    pub async fn list_all<T>(&self, collection: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let db = self.database()?;
        let cursor = db.collection::<T>(collection).find(doc! {}).await?;
        let records = cursor.try_collect().await?;
        Ok(records)
    }

    /// Probe the connection. Never returns an error; problems are encoded
    /// in the returned [`StoreHealth`].
    pub async fn health(&self) -> StoreHealth {
        match &self.inner {
            Inner::NotConfigured => StoreHealth::NotConfigured,
            Inner::Failed(reason) => StoreHealth::Unreachable(reason.clone()),
            Inner::Ready(db) => match db.run_command(doc! { "ping": 1 }).await {
                Ok(_) => StoreHealth::Connected,
                Err(err) => StoreHealth::Unreachable(err.to_string()),
            },
        }
    }

    /// Names of up to `limit` collections in the database, for diagnostics.
    pub async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let db = self.database()?;
        let mut names = db.list_collection_names().await?;
        names.truncate(limit);
        Ok(names)
    }

    fn database(&self) -> Result<&Database, StoreError> {
        match &self.inner {
            Inner::NotConfigured => Err(StoreError::NotConfigured),
            Inner::Failed(reason) => Err(StoreError::Unavailable(reason.clone())),
            Inner::Ready(db) => Ok(db),
        }
    }
}

async fn build_client(url: &str) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(url).await?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    Client::with_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn unconfigured_store_reports_not_configured() {
        let store = Store::not_configured();
        assert_eq!(store.health().await, StoreHealth::NotConfigured);
    }

    #[tokio::test]
    async fn missing_configuration_tolerated_at_construction() {
        let store = Store::connect(None, None).await;
        assert_eq!(store.health().await, StoreHealth::NotConfigured);

        let store = Store::connect(Some("mongodb://localhost:27017"), None).await;
        assert_eq!(store.health().await, StoreHealth::NotConfigured);
    }

    #[tokio::test]
    async fn unconfigured_store_rejects_operations() {
        let store = Store::not_configured();

        let record = serde_json::json!({ "name": "IPA" });
        assert_matches!(
            store.insert_one("department", &record).await,
            Err(StoreError::NotConfigured)
        );
        assert_matches!(
            store.list_all::<serde_json::Value>("department").await,
            Err(StoreError::NotConfigured)
        );
        assert_matches!(
            store.collection_names(10).await,
            Err(StoreError::NotConfigured)
        );
    }

    #[tokio::test]
    async fn unparseable_url_reported_as_unreachable() {
        let store = Store::connect(Some("not-a-connection-string"), Some("sekolah")).await;
        assert_matches!(store.health().await, StoreHealth::Unreachable(_));
        assert_matches!(
            store.list_all::<serde_json::Value>("department").await,
            Err(StoreError::Unavailable(_))
        );
    }
}
