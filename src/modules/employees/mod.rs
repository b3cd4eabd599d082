pub mod dataset;
pub mod models;

use anyhow::Context;
use async_trait::async_trait;
use empresa_kernel::settings::Settings;
use empresa_kernel::{CollectionSeed, InitCtx, Module};
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

/// Field that uniquely identifies an employee.
pub const KEY_FIELD: &str = "empno";

/// Seeds the employee collection with the SCOTT dataset
pub struct EmployeesModule;

impl EmployeesModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for EmployeesModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for EmployeesModule {
    fn name(&self) -> &'static str {
        "employees"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            collection = %ctx.settings.database.collection,
            "employees module initialized"
        );
        Ok(())
    }

    fn seeds(&self, settings: &Settings) -> anyhow::Result<Vec<CollectionSeed>> {
        Ok(vec![CollectionSeed {
            collection: settings.database.collection.clone(),
            key: KEY_FIELD,
            documents: documents()?,
            indexes: index_models(),
        }])
    }
}

/// The dataset as BSON documents, in insertion order.
pub fn documents() -> anyhow::Result<Vec<Document>> {
    dataset::employees()
        .iter()
        .map(|employee| {
            mongodb::bson::to_document(employee)
                .with_context(|| format!("failed to encode employee {}", employee.empno))
        })
        .collect()
}

/// Unique `empno`, then lookups by department, name and job.
///
/// Names are left to the server (`empno_1`, ...) so the builds line up with
/// indexes the container init script already created.
pub fn index_models() -> Vec<IndexModel> {
    vec![
        unique_index(doc! { "empno": 1 }),
        IndexModel::builder().keys(doc! { "departamento.deptno": 1 }).build(),
        IndexModel::builder().keys(doc! { "ename": 1 }).build(),
        IndexModel::builder().keys(doc! { "job": 1 }).build(),
    ]
}

fn unique_index(keys: Document) -> IndexModel {
    let options = IndexOptions::builder().unique(true).build();
    IndexModel::builder().keys(keys).options(options).build()
}

/// Create a new instance of the employees module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(EmployeesModule::new())
}
