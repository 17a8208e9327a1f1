/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_atelier_config, load_atelier_config, resolve_database_url};
pub use types::{AtelierConfig, GenerateSection, LocalesSection, ServerSection, StoreSection};
