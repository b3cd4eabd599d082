use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use empresa_kernel::settings::{ConflictPolicy, Settings};

/// Operator tool for the empresa_db employee collection.
#[derive(Debug, Parser)]
#[command(name = "empresa-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Insert the employee dataset and build its indexes
    Seed {
        /// Behaviour when seed documents already exist (fail, skip, replace)
        #[arg(long)]
        on_conflict: Option<ConflictPolicy>,
    },
    /// Show document count and indexes of the employee collection
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every document in the employee collection
    Purge {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load empresa-seed settings")?;
    empresa_telemetry::init(&settings.telemetry)?;

    tracing::debug!(env = ?settings.environment, command = ?cli.command, "empresa-cli starting");

    match cli.command {
        Command::Seed { on_conflict } => {
            let policy = on_conflict.unwrap_or(settings.seed.on_conflict);
            let reports = empresa_seed::run(&settings, policy).await?;

            for report in reports {
                if report.skipped {
                    println!(
                        "{}.{} already seeded; nothing inserted",
                        settings.database.name, report.collection
                    );
                } else {
                    println!(
                        "Seeded {}.{} ({} inserted, {} replaced)",
                        settings.database.name, report.collection, report.inserted, report.removed
                    );
                }
                println!("{}", empresa_seed::confirmation(&report));
            }
        }
        Command::Status { json } => {
            let db = empresa_db::connect(&settings.database).await?;
            let status = empresa_db::inspect(&db, &settings.database.collection).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else if !status.exists {
                println!("{}.{} does not exist", status.database, status.collection);
            } else {
                println!(
                    "{}.{}: {} documents",
                    status.database, status.collection, status.documents
                );
                for index in &status.indexes {
                    println!("  index {}", index);
                }
            }
        }
        Command::Purge { yes } => {
            if !yes {
                bail!(
                    "refusing to purge {}.{} without --yes",
                    settings.database.name,
                    settings.database.collection
                );
            }

            let db = empresa_db::connect(&settings.database).await?;
            let deleted = empresa_db::purge(&db, &settings.database.collection).await?;
            println!(
                "Deleted {} documents from {}.{}",
                deleted, settings.database.name, settings.database.collection
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn seed_accepts_conflict_policy() {
        let cli = Cli::try_parse_from(["empresa-cli", "seed", "--on-conflict", "replace"]).unwrap();
        match cli.command {
            Command::Seed { on_conflict } => {
                assert_eq!(on_conflict, Some(ConflictPolicy::Replace))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn seed_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["empresa-cli", "seed", "--on-conflict", "merge"]).is_err());
    }
}
