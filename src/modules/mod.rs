pub mod employees;

use empresa_kernel::ModuleRegistry;

/// Register all seeding modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(employees::create_module());
}
