use std::collections::HashSet;

use mongodb::Database;
use mongodb::bson::Document;
use tracing::info;

use crate::error::InitResult;
use crate::schema::{CollectionSpec, SCHEMA};

/// What `initialize` actually did versus found already in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub collections_created: usize,
    pub collections_existing: usize,
    pub indexes_created: usize,
    pub indexes_existing: usize,
}

/// Ensure every contracted collection and index exists in `db`.
///
/// Safe to re-run: collections and indexes that are already present are
/// counted, not recreated. Aborts on the first engine failure; the
/// partial state is valid and a later run completes the remainder.
pub async fn initialize(db: &Database) -> InitResult<InitReport> {
    let existing: HashSet<String> = db.list_collection_names().await?.into_iter().collect();

    let mut report = InitReport::default();
    for spec in SCHEMA {
        ensure_collection(db, spec, &existing, &mut report).await?;
    }

    info!(
        database = db.name(),
        collections_created = report.collections_created,
        collections_existing = report.collections_existing,
        indexes_created = report.indexes_created,
        indexes_existing = report.indexes_existing,
        "schema initialization completed"
    );
    Ok(report)
}

async fn ensure_collection(
    db: &Database,
    spec: &CollectionSpec,
    existing: &HashSet<String>,
    report: &mut InitReport,
) -> InitResult<()> {
    if existing.contains(spec.name) {
        info!(collection = spec.name, "collection already present");
        report.collections_existing += 1;
    } else {
        info!(collection = spec.name, "creating collection");
        db.create_collection(spec.name).await?;
        report.collections_created += 1;
    }

    let collection = db.collection::<Document>(spec.name);
    // Presence is judged by the pinned index name.
    let present: HashSet<String> = collection.list_index_names().await?.into_iter().collect();

    for index in spec.indexes {
        if present.contains(&index.index_name()) {
            report.indexes_existing += 1;
            continue;
        }
        collection.create_index(index.model()).await?;
        report.indexes_created += 1;
    }

    Ok(())
}
