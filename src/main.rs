use coderoot_db_init::{config::AppConfig, db::create_db_handle, init::initialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,coderoot_db_init=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let db = create_db_handle(&config.mongo_uri, &config.database_name).await?;
    let report = initialize(&db).await?;

    println!(
        "Schema initialized for {}: {} collections and {} indexes created, {} collections and {} indexes already present",
        config.database_name,
        report.collections_created,
        report.indexes_created,
        report.collections_existing,
        report.indexes_existing,
    );
    Ok(())
}
