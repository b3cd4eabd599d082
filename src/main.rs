use anyhow::Context;
use empresa_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load empresa-seed settings")?;
    empresa_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.name,
        "empresa-seed bootstrap starting"
    );

    let reports = empresa_seed::run(&settings, settings.seed.on_conflict).await?;

    for report in &reports {
        println!(
            "Seeded {}.{} ({} inserted)",
            settings.database.name, report.collection, report.inserted
        );
        println!("{}", empresa_seed::confirmation(report));
    }

    tracing::info!("empresa-seed bootstrap complete");
    Ok(())
}
