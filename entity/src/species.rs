use serde::{Deserialize, Serialize};

/// Species record from `GET /pokemon-species/{id}/`
///
/// `id` is the National Dex number. It is absent on records synthesized for Pokémon whose
/// species could not be resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
}

impl PokemonSpecies {
    /// Placeholder stored when neither the Pokémon's own species nor its base species exist.
    pub fn unresolved() -> Self {
        Self::default()
    }

    pub fn is_legendary_or_mythical(&self) -> bool {
        self.is_legendary || self.is_mythical
    }
}
