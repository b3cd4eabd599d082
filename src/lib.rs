//! Seeds the `empresa_db` employee collection.
//!
//! [`run`] connects to MongoDB, initializes every registered module and
//! applies the collection seeds they contribute.

pub mod modules;

use anyhow::Context;
use empresa_db::SeedReport;
use empresa_kernel::settings::{ConflictPolicy, Settings};
use empresa_kernel::{InitCtx, ModuleRegistry};

/// Line printed once a seed has been applied.
pub fn confirmation(report: &SeedReport) -> String {
    if report.skipped {
        format!(
            "Datos ya presentes; no se insertó nada. Total de empleados: {}",
            report.total
        )
    } else {
        format!(
            "Datos insertados correctamente. Total de empleados: {}",
            report.total
        )
    }
}

/// Registry populated with every seeding module.
pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Apply every module's seeds against the configured database.
pub async fn run(settings: &Settings, policy: ConflictPolicy) -> anyhow::Result<Vec<SeedReport>> {
    let registry = registry();
    let ctx = InitCtx { settings };
    registry.init_modules(&ctx).await?;

    let seeds = registry.collect_seeds(settings)?;

    let db = empresa_db::connect(&settings.database)
        .await
        .with_context(|| format!("failed to connect to '{}'", settings.database.uri))?;

    let mut reports = Vec::with_capacity(seeds.len());
    for (module, seed) in &seeds {
        tracing::info!(
            module = %module,
            database = %settings.database.name,
            collection = %seed.collection,
            policy = %policy,
            "applying seed"
        );

        let report = empresa_db::apply_seed(&db, seed, policy)
            .await
            .with_context(|| {
                format!(
                    "failed to seed {}.{} for module '{}'",
                    settings.database.name, seed.collection, module
                )
            })?;

        tracing::info!(
            collection = %report.collection,
            inserted = report.inserted,
            total = report.total,
            "seed applied"
        );
        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(skipped: bool) -> SeedReport {
        SeedReport {
            collection: "rh".to_string(),
            created: false,
            inserted: if skipped { 0 } else { 14 },
            removed: 0,
            skipped,
            indexes: vec![],
            total: 14,
        }
    }

    #[test]
    fn confirmation_reports_inserted_seed() {
        assert_eq!(
            confirmation(&report(false)),
            "Datos insertados correctamente. Total de empleados: 14"
        );
    }

    #[test]
    fn confirmation_does_not_claim_insert_when_skipped() {
        let line = confirmation(&report(true));
        assert!(!line.contains("insertados correctamente"), "{line}");
        assert!(line.ends_with("Total de empleados: 14"));
    }

    #[test]
    fn registry_contains_employees_module() {
        let registry = registry();
        assert_eq!(registry.module_count(), 1);
        assert!(registry.get_module("employees").is_some());
    }
}
