//! MongoDB glue for the guestbook service: client construction, the
//! liveness probe, and the submission model/repository.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

pub mod models;
pub mod repositories;

pub type DbClient = mongodb::Client;

/// Build a client from a connection string.
///
/// The driver connects lazily, so this only fails on an unparseable
/// connection string; an unreachable server surfaces on the first
/// operation. `server_selection_timeout` bounds how long each operation
/// waits for a usable server before giving up.
pub async fn create_client(
    connection_string: &str,
    server_selection_timeout: Duration,
) -> Result<DbClient, mongodb::error::Error> {
    let mut options = ClientOptions::parse(connection_string).await?;
    options.server_selection_timeout = Some(server_selection_timeout);
    Client::with_options(options)
}

/// Liveness probe: round-trip a `ping` command without mutating data.
pub async fn health_check(client: &DbClient) -> Result<(), mongodb::error::Error> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}
