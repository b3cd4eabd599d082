//! Seeds a throwaway database on a live server.
//!
//! Runs only when `EMPRESA_TEST_MONGO_URI` is set. Each test drops its
//! database before asserting so failures leave nothing behind.

use std::collections::HashSet;

use empresa_db::SeedReport;
use empresa_kernel::settings::{ConflictPolicy, Settings};
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

const URI_ENV: &str = "EMPRESA_TEST_MONGO_URI";

fn live_settings(test: &str) -> Option<Settings> {
    let Ok(uri) = std::env::var(URI_ENV) else {
        eprintln!("skipping live test '{test}': {URI_ENV} is not set");
        return None;
    };
    let mut settings = Settings::default();
    settings.database.uri = uri;
    settings.database.name = format!("empresa_test_{}_{}", test, std::process::id());
    Some(settings)
}

async fn rh(settings: &Settings) -> anyhow::Result<Collection<Document>> {
    let client = Client::with_uri_str(&settings.database.uri).await?;
    Ok(client
        .database(&settings.database.name)
        .collection::<Document>(&settings.database.collection))
}

async fn drop_database(settings: &Settings) {
    let client = Client::with_uri_str(&settings.database.uri).await.unwrap();
    client.database(&settings.database.name).drop().await.unwrap();
}

async fn seed(settings: &Settings, policy: ConflictPolicy) -> anyhow::Result<SeedReport> {
    let mut reports = empresa_seed::run(settings, policy).await?;
    anyhow::ensure!(reports.len() == 1, "expected one report, got {}", reports.len());
    Ok(reports.remove(0))
}

#[tokio::test]
async fn seeds_fourteen_unique_employees() {
    let Some(settings) = live_settings("fresh") else {
        return;
    };

    let outcome = async {
        let report = seed(&settings, ConflictPolicy::Fail).await?;
        let rh = rh(&settings).await?;
        let empnos: HashSet<String> = rh
            .distinct("empno", doc! {})
            .await?
            .into_iter()
            .map(|value| value.to_string())
            .collect();
        let indexes = rh.list_index_names().await?;
        anyhow::Ok((report, empnos, indexes))
    }
    .await;
    drop_database(&settings).await;

    let (report, empnos, indexes) = outcome.unwrap();
    assert!(report.created);
    assert_eq!(report.inserted, 14);
    assert_eq!(report.total, 14);
    assert_eq!(
        report.indexes,
        vec!["empno_1", "departamento.deptno_1", "ename_1", "job_1"]
    );
    assert_eq!(empnos.len(), 14);
    assert!(indexes.contains(&"empno_1".to_string()));
}

#[tokio::test]
async fn rerun_with_default_policy_hits_duplicate_key() {
    let Some(settings) = live_settings("rerun") else {
        return;
    };

    let outcome = async {
        seed(&settings, ConflictPolicy::Fail).await?;
        anyhow::Ok(seed(&settings, ConflictPolicy::Fail).await)
    }
    .await;
    drop_database(&settings).await;

    let err = outcome.unwrap().unwrap_err();
    let db_err = err
        .downcast_ref::<empresa_db::DbError>()
        .expect("error should originate in the db layer");
    assert!(db_err.is_duplicate_key());
}

#[tokio::test]
async fn skip_and_replace_keep_fourteen_documents() {
    let Some(settings) = live_settings("policies") else {
        return;
    };

    let outcome = async {
        seed(&settings, ConflictPolicy::Fail).await?;
        let skipped = seed(&settings, ConflictPolicy::Skip).await?;
        let replaced = seed(&settings, ConflictPolicy::Replace).await?;
        anyhow::Ok((skipped, replaced))
    }
    .await;
    drop_database(&settings).await;

    let (skipped, replaced) = outcome.unwrap();
    assert!(skipped.skipped);
    assert_eq!(skipped.inserted, 0);
    assert_eq!(skipped.total, 14);

    assert_eq!(replaced.removed, 14);
    assert_eq!(replaced.inserted, 14);
    assert_eq!(replaced.total, 14);
}

#[tokio::test]
async fn skip_when_only_some_keys_exist() {
    let Some(settings) = live_settings("partial") else {
        return;
    };

    let outcome = async {
        rh(&settings)
            .await?
            .insert_one(doc! { "empno": 7839, "ename": "KING", "job": "PRESIDENT", "sal": 5000 })
            .await?;
        seed(&settings, ConflictPolicy::Skip).await
    }
    .await;
    drop_database(&settings).await;

    let report = outcome.unwrap();
    assert!(report.skipped);
    assert_eq!(report.inserted, 0);
    assert_eq!(report.total, 1);
    assert_eq!(report.indexes.len(), 4);
}

#[tokio::test]
async fn replace_leaves_foreign_documents_alone() {
    let Some(settings) = live_settings("foreign") else {
        return;
    };

    let outcome = async {
        let rh = rh(&settings).await?;
        rh.insert_many([
            doc! { "empno": 7369, "ename": "OLD SMITH", "job": "CLERK", "sal": 1 },
            doc! { "empno": 9001, "ename": "GARCIA", "job": "ANALYST", "sal": 2100 },
        ])
        .await?;

        let report = seed(&settings, ConflictPolicy::Replace).await?;
        let smith = rh.find_one(doc! { "empno": 7369 }).await?;
        let garcia = rh.count_documents(doc! { "empno": 9001 }).await?;
        anyhow::Ok((report, smith, garcia))
    }
    .await;
    drop_database(&settings).await;

    let (report, smith, garcia) = outcome.unwrap();
    assert_eq!(report.removed, 1);
    assert_eq!(report.inserted, 14);
    assert_eq!(report.total, 15);
    assert_eq!(garcia, 1);
    assert_eq!(smith.unwrap().get_str("ename").unwrap(), "SMITH");
}
