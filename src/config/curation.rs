//! Curated name lists used to classify catalog entries.
//!
//! The lists are a snapshot of PokeAPI's naming conventions. They ship as built-in defaults and
//! can be replaced without a rebuild by pointing `--curation` at a JSON file; any field missing
//! from the file keeps its built-in value.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::config::ConfigError;

/// Species whose canonical catalog name contains a hyphen
const HYPHENATED_SPECIES: &[&str] = &[
    "kommo-o",
    "hakamo-o",
    "jangmo-o",
    "type-null",
    "ho-oh",
    "porygon-z",
];

/// Substrings marking Gigantamax and gender-locked forms
const GMAX_OR_GENDER_MARKERS: &[&str] = &["gmax-", "gigantamax-", "-male", "-female"];

const ULTRA_BEASTS: &[&str] = &[
    "nihilego",
    "buzzwole",
    "pheromosa",
    "xurkitree",
    "celesteela",
    "kartana",
    "guzzlord",
    "poipole",
    "naganadel",
    "stakataka",
    "blacephalon",
];

const PARADOX: &[&str] = &[
    "great-tusk",
    "scream-tail",
    "brute-bonnet",
    "flutter-mane",
    "slither-wing",
    "sandy-shocks",
    "iron-treads",
    "iron-bundle",
    "iron-hands",
    "iron-jugulis",
    "iron-moth",
    "iron-thorns",
    "iron-valiant",
    "roaring-moon",
    "iron-leaves",
    "walking-wake",
    "gouging-fire",
    "raging-bolt",
    "iron-boulder",
    "iron-crown",
];

/// Form tokens rendered before the base name, e.g. `raichu-alolan` -> `Alolan Raichu`
const PREFIX_FORMS: &[(&str, &str)] = &[
    ("mega", "Mega"),
    ("alolan", "Alolan"),
    ("galarian", "Galarian"),
    ("hisuian", "Hisuian"),
    ("paldean", "Paldean"),
    ("primal", "Primal"),
];

/// First-segment tokens that mean the second segment is the base name
const FORM_INDICATORS: &[&str] = &[
    "mega",
    "alolan",
    "galarian",
    "hisuian",
    "paldean",
    "primal",
    "eternamax",
    "gmax",
    "gigantamax",
];

const MEGA_FORM: &str = "mega";

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Curated classification data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Curation {
    /// Species names that contain a hyphen but are not alternate forms.
    pub hyphenated_species: Vec<String>,
    /// Name substrings for Gigantamax and gender variants, always excluded.
    pub gmax_or_gender_markers: Vec<String>,
    /// Ultra Beasts, excluded like legendaries but not flagged as such by the catalog.
    pub ultra_beasts: Vec<String>,
    /// Paradox Pokémon, excluded like legendaries but not flagged as such by the catalog.
    pub paradox: Vec<String>,
    /// Form token -> display prefix.
    pub prefix_forms: BTreeMap<String, String>,
    /// Tokens which, as the first name segment, make the second segment the base name.
    pub form_indicators: Vec<String>,
    /// Form token for Mega Evolutions, which may carry a trailing X/Y disambiguator.
    pub mega_form: String,
}

impl Default for Curation {
    fn default() -> Self {
        Self {
            hyphenated_species: owned(HYPHENATED_SPECIES),
            gmax_or_gender_markers: owned(GMAX_OR_GENDER_MARKERS),
            ultra_beasts: owned(ULTRA_BEASTS),
            paradox: owned(PARADOX),
            prefix_forms: PREFIX_FORMS
                .iter()
                .map(|(token, prefix)| (token.to_string(), prefix.to_string()))
                .collect(),
            form_indicators: owned(FORM_INDICATORS),
            mega_form: MEGA_FORM.to_string(),
        }
    }
}

impl Curation {
    /// Load curation data from a JSON file, filling absent fields with the built-in lists.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::InvalidCuration {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidCuration {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn is_hyphenated_species(&self, name: &str) -> bool {
        self.hyphenated_species.iter().any(|s| s == name)
    }

    pub fn is_form_indicator(&self, token: &str) -> bool {
        self.form_indicators.iter().any(|t| t == token)
    }
}
