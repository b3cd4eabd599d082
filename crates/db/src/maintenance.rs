use mongodb::bson::{doc, Document};
use mongodb::Database;
use serde::Serialize;

use crate::error::DbError;

/// Snapshot of a collection for operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionStatus {
    pub database: String,
    pub collection: String,
    pub exists: bool,
    pub documents: u64,
    pub indexes: Vec<String>,
}

pub async fn inspect(db: &Database, name: &str) -> Result<CollectionStatus, DbError> {
    let exists = db
        .list_collection_names()
        .await?
        .iter()
        .any(|collection| collection == name);

    let (documents, indexes) = if exists {
        let collection = db.collection::<Document>(name);
        (
            collection.count_documents(doc! {}).await?,
            collection.list_index_names().await?,
        )
    } else {
        (0, Vec::new())
    };

    Ok(CollectionStatus {
        database: db.name().to_string(),
        collection: name.to_string(),
        exists,
        documents,
        indexes,
    })
}

/// Delete every document in `name`, keeping the collection and its indexes.
pub async fn purge(db: &Database, name: &str) -> Result<u64, DbError> {
    let result = db
        .collection::<Document>(name)
        .delete_many(doc! {})
        .await?;

    tracing::warn!(
        target: "empresa-db",
        collection = name,
        deleted = result.deleted_count,
        "collection purged"
    );

    Ok(result.deleted_count)
}
