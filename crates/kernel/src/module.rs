use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use mongodb::IndexModel;

use crate::settings::Settings;

/// Context provided to modules during initialization
pub struct InitCtx<'a> {
    pub settings: &'a Settings,
}

/// Fixed documents and indexes a module wants present in one collection
#[derive(Debug, Clone)]
pub struct CollectionSeed {
    pub collection: String,
    /// Field identifying a document when resolving conflicts with existing data
    pub key: &'static str,
    pub documents: Vec<Document>,
    /// Created in order, after the documents are inserted
    pub indexes: Vec<IndexModel>,
}

impl CollectionSeed {
    /// Values of `key` across the seed documents, skipping documents without it.
    pub fn key_values(&self) -> Vec<Bson> {
        self.documents
            .iter()
            .filter_map(|doc| doc.get(self.key).cloned())
            .collect()
    }
}

/// Core module trait that every seeding module implements
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context
    /// Called before any seed is collected
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the collection seeds contributed by this module
    fn seeds(&self, _settings: &Settings) -> anyhow::Result<Vec<CollectionSeed>> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn key_values_skip_documents_without_key() {
        let seed = CollectionSeed {
            collection: "rh".to_string(),
            key: "empno",
            documents: vec![
                doc! { "empno": 7369, "ename": "SMITH" },
                doc! { "ename": "NOBODY" },
                doc! { "empno": 7499, "ename": "ALLEN" },
            ],
            indexes: vec![],
        };

        assert_eq!(seed.key_values(), vec![Bson::Int32(7369), Bson::Int32(7499)]);
    }
}
