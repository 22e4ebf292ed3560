use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

/// Pokémon detail record from `GET /pokemon/{id or name}/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Catalog id. Forms use ids above 10000 which are not National Dex numbers.
    pub id: u32,
    pub name: String,
    pub types: Vec<PokemonType>,
    /// Base stats in the order the catalog declares them.
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub species: Option<NamedResource>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

impl Pokemon {
    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }

    /// Base stat values in declared order.
    pub fn stat_values(&self) -> Vec<u32> {
        self.stats.iter().map(|s| s.base_stat).collect()
    }

    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }

    /// Id of the species this Pokémon belongs to, parsed from the species reference.
    pub fn species_id(&self) -> Option<u32> {
        self.species.as_ref().and_then(NamedResource::id)
    }
}
