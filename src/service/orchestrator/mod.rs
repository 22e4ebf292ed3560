//! Orchestration layer for catalog lookups.
//!
//! Orchestrators combine the PokeAPI client, the retry context and the lookup caches so the
//! analysis never has to think about where a record comes from. Each orchestrator borrows the
//! client and retry context, and receives the [`LookupCaches`] by mutable reference on every
//! call, so a single set of caches is shared by all of them for the whole run.

pub mod cache;
pub mod pokemon;
pub mod species;
pub mod type_chart;

pub use cache::LookupCaches;
pub use pokemon::PokemonOrchestrator;
pub use species::SpeciesOrchestrator;
pub use type_chart::TypeChartOrchestrator;
