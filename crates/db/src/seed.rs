use empresa_kernel::settings::ConflictPolicy;
use empresa_kernel::CollectionSeed;
use mongodb::bson::{doc, Bson, Document};
use mongodb::Database;
use serde::Serialize;

use crate::error::DbError;

/// Outcome of applying one [`CollectionSeed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub collection: String,
    /// The collection did not exist before this run
    pub created: bool,
    pub inserted: u64,
    /// Pre-existing documents deleted by the `replace` policy
    pub removed: u64,
    /// Insertion was skipped because seed keys were already present
    pub skipped: bool,
    pub indexes: Vec<String>,
    /// Document count after seeding
    pub total: u64,
}

/// Ensure the collection, insert the seed documents under `policy`, build the
/// indexes and read back the document count.
pub async fn apply_seed(
    db: &Database,
    seed: &CollectionSeed,
    policy: ConflictPolicy,
) -> Result<SeedReport, DbError> {
    let name = seed.collection.as_str();
    let created = crate::ensure_collection(db, name).await?;
    let collection = db.collection::<Document>(name);

    let mut removed = 0;
    let mut existing = 0;
    if policy != ConflictPolicy::Fail && !seed.documents.is_empty() {
        existing = collection
            .distinct(seed.key, key_filter(seed.key, seed.key_values()))
            .await?
            .len();
    }

    let action = resolve_conflict(policy, existing);
    match action {
        SeedAction::Skip => {
            tracing::warn!(
                target: "empresa-db",
                collection = name,
                existing,
                "seed keys already present; skipping insert"
            );
        }
        SeedAction::ReplaceThenInsert => {
            let result = collection
                .delete_many(key_filter(seed.key, seed.key_values()))
                .await?;
            removed = result.deleted_count;
            tracing::info!(
                target: "empresa-db",
                collection = name,
                removed,
                "removed documents sharing seed keys"
            );
        }
        SeedAction::Insert => {}
    }

    let mut inserted = 0;
    if action != SeedAction::Skip && !seed.documents.is_empty() {
        tracing::info!(
            target: "empresa-db",
            collection = name,
            documents = seed.documents.len(),
            "inserting seed documents"
        );
        let result = collection
            .insert_many(&seed.documents)
            .await
            .map_err(|err| DbError::from_write(name, err))?;
        inserted = result.inserted_ids.len() as u64;
    }

    let mut indexes = Vec::with_capacity(seed.indexes.len());
    for model in &seed.indexes {
        // A unique index over pre-existing duplicates fails here, not on insert.
        let result = collection
            .create_index(model.clone())
            .await
            .map_err(|err| DbError::from_write(name, err))?;
        tracing::info!(
            target: "empresa-db",
            collection = name,
            index = %result.index_name,
            "index ensured"
        );
        indexes.push(result.index_name);
    }

    let total = collection.count_documents(doc! {}).await?;

    Ok(SeedReport {
        collection: seed.collection.clone(),
        created,
        inserted,
        removed,
        skipped: action == SeedAction::Skip,
        indexes,
        total,
    })
}

/// What `apply_seed` does with the documents once existing keys are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedAction {
    Insert,
    Skip,
    ReplaceThenInsert,
}

/// `existing` is the number of seed keys already stored in the collection.
fn resolve_conflict(policy: ConflictPolicy, existing: usize) -> SeedAction {
    match (policy, existing) {
        (ConflictPolicy::Fail, _) | (_, 0) => SeedAction::Insert,
        (ConflictPolicy::Skip, _) => SeedAction::Skip,
        (ConflictPolicy::Replace, _) => SeedAction::ReplaceThenInsert,
    }
}

/// `{ <key>: { $in: [keys] } }`
fn key_filter(key: &str, keys: Vec<Bson>) -> Document {
    let mut filter = Document::new();
    filter.insert(key, doc! { "$in": Bson::Array(keys) });
    filter
}
