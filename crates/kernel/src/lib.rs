pub mod module;
pub mod registry;
pub mod settings;

pub use module::{CollectionSeed, InitCtx, Module};
pub use registry::ModuleRegistry;
