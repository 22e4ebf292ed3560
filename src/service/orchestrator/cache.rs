use entity::prelude::{Pokemon, PokemonSpecies};

use crate::{model::type_chart::TypeChart, service::cache::KvCache};

/// All lookup state for a run.
///
/// Owned by the caller and passed (by mutable reference) to every orchestrator, so records fetched
/// while checking one Pokémon are reused for the next. Loaded from the cache files before the run
/// and saved back afterwards.
#[derive(Clone, Debug, Default)]
pub struct LookupCaches {
    /// Detail records keyed by the URL they were fetched from
    pub details: KvCache<String, Pokemon>,
    /// Species records keyed by the id of the Pokémon they were requested for
    pub species: KvCache<u32, PokemonSpecies>,
    pub type_chart: TypeChart,
}

impl LookupCaches {
    pub fn new(
        details: KvCache<String, Pokemon>,
        species: KvCache<u32, PokemonSpecies>,
        type_chart: TypeChart,
    ) -> Self {
        Self {
            details,
            species,
            type_chart,
        }
    }

    /// Empty detail and species caches around an existing type chart
    pub fn with_type_chart(type_chart: TypeChart) -> Self {
        Self {
            type_chart,
            ..Default::default()
        }
    }
}
