use anyhow::Context;
use std::sync::Arc;

use crate::module::{CollectionSeed, InitCtx, Module};
use crate::settings::Settings;

/// Module registry for managing seeding modules
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module with the registry
    pub fn register(&mut self, module: Arc<dyn Module>) {
        self.modules.push(module);
    }

    /// Get all registered modules in registration order
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    /// Get a module by name
    pub fn get_module(&self, name: &str) -> Option<&Arc<dyn Module>> {
        self.modules.iter().find(|module| module.name() == name)
    }

    /// Get the number of registered modules
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Initialize modules in registration order
    pub async fn init_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for module in &self.modules {
            tracing::info!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Collect all seeds from all modules, tagged with the contributing module
    pub fn collect_seeds(
        &self,
        settings: &Settings,
    ) -> anyhow::Result<Vec<(String, CollectionSeed)>> {
        let mut seeds = Vec::new();

        for module in &self.modules {
            let contributed = module
                .seeds(settings)
                .with_context(|| format!("failed to build seeds for module '{}'", module.name()))?;

            for seed in contributed {
                seeds.push((module.name().to_string(), seed));
            }
        }

        // Sort by module name and collection for deterministic ordering
        seeds.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| a.1.collection.cmp(&b.1.collection))
        });

        Ok(seeds)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
