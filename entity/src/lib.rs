//! Catalog record types returned by PokeAPI.
//!
//! These models only carry the fields the analysis reads. Unknown fields in API responses are
//! ignored during deserialization, and the same types are serialized into the on-disk lookup
//! caches, so a cache file written by one run can be read back by the next.

pub mod pokemon;
pub mod resource;
pub mod species;
pub mod type_relations;

pub mod prelude {
    pub use crate::pokemon::{Pokemon, PokemonStat, PokemonType};
    pub use crate::resource::{NamedResource, ResourceList};
    pub use crate::species::PokemonSpecies;
    pub use crate::type_relations::{DamageRelations, TypeDetail};
}
