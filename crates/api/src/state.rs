use std::sync::Arc;

use guestbook_db::models::submission::Submission;
use guestbook_db::DbClient;
use mongodb::Collection;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the client and collection handles are
/// internally reference-counted; config is behind `Arc`). Constructed once
/// at startup and injected into the router -- there is no module-level
/// datastore singleton, so tests can inject a client pointed anywhere.
#[derive(Clone)]
pub struct AppState {
    /// Shared MongoDB client, opened once at process start.
    pub client: DbClient,
    /// Typed handle to the submissions collection.
    pub submissions: Collection<Submission>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(client: DbClient, config: ServerConfig) -> Self {
        let submissions = client
            .database(&config.mongo_db)
            .collection(&config.mongo_collection);

        Self {
            client,
            submissions,
            config: Arc::new(config),
        }
    }
}
