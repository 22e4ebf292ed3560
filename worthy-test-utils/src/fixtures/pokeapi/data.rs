//! Real catalog data for a handful of Pokémon and the full defensive type chart.

use entity::prelude::{Pokemon, TypeDetail};

use crate::fixtures::pokeapi::factory::{mock_pokemon, mock_type};

/// Defensive relations of all 18 battle types as `(name, no_damage_from, half_damage_from)`
pub const TYPE_RELATIONS: &[(&str, &[&str], &[&str])] = &[
    ("normal", &["ghost"], &[]),
    ("fire", &[], &["fire", "grass", "ice", "bug", "steel", "fairy"]),
    ("water", &[], &["fire", "water", "ice", "steel"]),
    ("electric", &[], &["electric", "flying", "steel"]),
    ("grass", &[], &["water", "electric", "grass", "ground"]),
    ("ice", &[], &["ice"]),
    ("fighting", &[], &["bug", "rock", "dark"]),
    ("poison", &[], &["grass", "fighting", "poison", "bug", "fairy"]),
    ("ground", &["electric"], &["poison", "rock"]),
    ("flying", &["ground"], &["grass", "fighting", "bug"]),
    ("psychic", &[], &["fighting", "psychic"]),
    ("bug", &[], &["grass", "fighting", "ground"]),
    ("rock", &[], &["normal", "fire", "poison", "flying"]),
    ("ghost", &["normal", "fighting"], &["poison", "bug"]),
    ("dragon", &[], &["fire", "water", "electric", "grass"]),
    ("dark", &["psychic"], &["ghost", "dark"]),
    (
        "steel",
        &["poison"],
        &[
            "normal", "grass", "ice", "flying", "psychic", "bug", "rock", "dragon", "steel",
            "fairy",
        ],
    ),
    ("fairy", &["dragon"], &["fighting", "bug", "dark"]),
];

/// Type records for every battle type
pub fn type_details() -> Vec<TypeDetail> {
    TYPE_RELATIONS
        .iter()
        .map(|(name, no_damage_from, half_damage_from)| {
            mock_type(name, no_damage_from, half_damage_from)
        })
        .collect()
}

pub fn garchomp() -> Pokemon {
    mock_pokemon(445, "garchomp", &["dragon", "ground"], [108, 130, 95, 80, 85, 102], 445)
}

pub fn metagross() -> Pokemon {
    mock_pokemon(376, "metagross", &["steel", "psychic"], [80, 135, 130, 95, 90, 70], 376)
}

pub fn charizard() -> Pokemon {
    mock_pokemon(6, "charizard", &["fire", "flying"], [78, 84, 78, 109, 85, 100], 6)
}

pub fn charizard_mega_x() -> Pokemon {
    mock_pokemon(
        10034,
        "charizard-mega-x",
        &["fire", "dragon"],
        [78, 130, 111, 130, 85, 100],
        6,
    )
}

pub fn mewtwo() -> Pokemon {
    mock_pokemon(150, "mewtwo", &["psychic"], [106, 110, 90, 154, 90, 130], 150)
}

pub fn mewtwo_mega_y() -> Pokemon {
    mock_pokemon(10044, "mewtwo-mega-y", &["psychic"], [106, 150, 70, 194, 120, 140], 150)
}

pub fn raichu() -> Pokemon {
    mock_pokemon(26, "raichu", &["electric"], [60, 90, 55, 90, 80, 110], 26)
}
