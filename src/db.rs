use std::time::Duration;

use anyhow::Result;
use mongodb::{Client, Database, options::ClientOptions};

/// Build a client for `uri` and select the target database.
///
/// The driver connects lazily, so an unreachable engine is not detected
/// here; the first schema call reports it.
pub async fn create_db_handle(uri: &str, database_name: &str) -> Result<Database> {
    let mut options = ClientOptions::parse(uri).await?;
    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(10));

    let client = Client::with_options(options)?;
    Ok(client.database(database_name))
}
