//! Name-based classification of catalog entries.
//!
//! PokeAPI encodes forms in the Pokémon name (`charizard-mega-x`, `raichu-alolan`,
//! `meowstic-female`). These functions interpret those names against the curated lists in
//! [`Curation`] and never touch the network.

use entity::prelude::Pokemon;

use crate::config::Curation;


/// Separator between a base name and its form in catalog names
pub const FORM_SEPARATOR: char = '-';

/// Types and stats of a Pokémon, used to tell real variants from cosmetic ones.
///
/// Types are sorted, stats keep the catalog's declared order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub types: Vec<String>,
    pub stats: Vec<u32>,
}

/// Whether `name` is an alternate form rather than a base species.
///
/// Any hyphenated name is a form, except species whose canonical name has a hyphen in it
/// (`porygon-z`, `ho-oh`, ...).
pub fn is_special_form(name: &str, curation: &Curation) -> bool {
    name.contains(FORM_SEPARATOR) && !curation.is_hyphenated_species(name)
}

/// Whether `name` is a Gigantamax or gender variant. These are always excluded.
pub fn is_gmax_or_gender_variant(name: &str, curation: &Curation) -> bool {
    let name = name.to_lowercase();
    curation
        .gmax_or_gender_markers
        .iter()
        .any(|marker| name.contains(marker.as_str()))
}

/// Whether `name` is an Ultra Beast or Paradox Pokémon.
///
/// The catalog doesn't flag these as legendary, so they are excluded by name before any
/// request is made for them.
pub fn is_denylisted(name: &str, curation: &Curation) -> bool {
    curation.ultra_beasts.iter().any(|n| n == name) || curation.paradox.iter().any(|n| n == name)
}

/// Human-readable name for a catalog name.
///
/// - `porygon-z` -> `Porygon-Z`
/// - `raichu-alolan` -> `Alolan Raichu`
/// - `charizard-mega-x` -> `Mega Charizard X`
/// - `deoxys-attack` -> `Deoxys (Attack)`
pub fn display_name(name: &str, curation: &Curation) -> String {
    let lowered = name.to_lowercase();
    if curation.is_hyphenated_species(&lowered) || !name.contains(FORM_SEPARATOR) {
        return title_case(name);
    }

    let parts: Vec<&str> = name.split(FORM_SEPARATOR).collect();
    let base_name = title_case(parts[0]);
    let form_name = parts[1..].join("-");
    let form_lowered = form_name.to_lowercase();

    if let Some(prefix) = curation.prefix_forms.get(&form_lowered) {
        return format!("{prefix} {base_name}");
    }

    if form_lowered.starts_with(curation.mega_form.as_str()) {
        let prefix = curation
            .prefix_forms
            .get(&curation.mega_form)
            .cloned()
            .unwrap_or_else(|| title_case(&curation.mega_form));

        // Mega X / Mega Y
        if parts.len() > 2 {
            let suffix = parts[parts.len() - 1].to_uppercase();
            return format!("{prefix} {base_name} {suffix}");
        }
        return format!("{prefix} {base_name}");
    }

    format!("{} ({})", base_name, title_case(&form_name))
}

/// Name of the base form used to group variants.
///
/// Usually the first segment of the name; when that segment is itself a form token
/// (`mega-...`, `gmax-...`), the second segment.
pub fn base_form_name(name: &str, curation: &Curation) -> String {
    let mut parts = name.split(FORM_SEPARATOR);
    let first = parts.next().unwrap_or(name);

    match parts.next() {
        Some(second) if curation.is_form_indicator(&first.to_lowercase()) => second.to_string(),
        _ => first.to_string(),
    }
}

pub fn signature(pokemon: &Pokemon) -> Signature {
    let mut types = pokemon.type_names();
    types.sort();

    Signature {
        types,
        stats: pokemon.stat_values(),
    }
}

/// Title-case a name: the first letter after any non-letter is upper-cased, other letters are
/// lower-cased (`porygon-z` -> `Porygon-Z`, `10-power` -> `10-Power`).
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
