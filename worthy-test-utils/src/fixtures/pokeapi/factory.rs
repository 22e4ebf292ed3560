use entity::prelude::*;

const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Create a mock Pokémon detail record.
///
/// # Arguments
/// - `id` - Catalog id; forms use ids above 10000
/// - `name` - Catalog name, e.g. `charizard-mega-x`
/// - `types` - Type names in slot order
/// - `stats` - Base stats in catalog order (hp, attack, defense, sp. atk, sp. def, speed)
/// - `species_id` - Id of the species the record references
///
/// # Returns
/// - `Pokemon` - A detail record with test data
pub fn mock_pokemon(
    id: u32,
    name: &str,
    types: &[&str],
    stats: [u32; 6],
    species_id: u32,
) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        types: types
            .iter()
            .enumerate()
            .map(|(i, type_name)| PokemonType {
                slot: i as u8 + 1,
                kind: NamedResource::new(
                    *type_name,
                    format!("https://pokeapi.co/api/v2/type/{}/", type_name),
                ),
            })
            .collect(),
        stats: stats
            .iter()
            .zip(STAT_NAMES)
            .map(|(base_stat, stat_name)| PokemonStat {
                base_stat: *base_stat,
                effort: 0,
                stat: NamedResource::new(
                    stat_name,
                    format!("https://pokeapi.co/api/v2/stat/{}/", stat_name),
                ),
            })
            .collect(),
        species: Some(NamedResource::new(
            name.split('-').next().unwrap_or(name),
            format!("https://pokeapi.co/api/v2/pokemon-species/{}/", species_id),
        )),
    }
}

/// Create a mock species record.
pub fn mock_species(id: u32, name: &str, is_legendary: bool, is_mythical: bool) -> PokemonSpecies {
    PokemonSpecies {
        id: Some(id),
        name: name.to_string(),
        is_legendary,
        is_mythical,
    }
}

/// Create a mock type record with the given defensive relations.
pub fn mock_type(name: &str, no_damage_from: &[&str], half_damage_from: &[&str]) -> TypeDetail {
    let refs = |names: &[&str]| {
        names
            .iter()
            .map(|n| NamedResource::new(*n, format!("https://pokeapi.co/api/v2/type/{}/", n)))
            .collect::<Vec<_>>()
    };

    TypeDetail {
        name: name.to_string(),
        damage_relations: DamageRelations {
            no_damage_from: refs(no_damage_from),
            half_damage_from: refs(half_damage_from),
            double_damage_from: Vec::new(),
        },
    }
}

/// Create a mock listing whose entry URLs point at `base_url`.
///
/// # Arguments
/// - `base_url` - URL of the mock catalog
/// - `entries` - `(id, name)` pairs; each entry URL is `{base_url}/pokemon/{id}/`
pub fn mock_listing(base_url: &str, entries: &[(u32, &str)]) -> ResourceList {
    ResourceList {
        count: entries.len() as u32,
        results: entries
            .iter()
            .map(|(id, name)| NamedResource::new(*name, format!("{}/pokemon/{}/", base_url, id)))
            .collect(),
    }
}
