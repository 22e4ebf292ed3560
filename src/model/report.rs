use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// One ranked Pokémon in the final report.
///
/// Field order is the CSV column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// Display name, e.g. `Mega Charizard X`
    pub name: String,
    /// National Dex number
    pub id: u32,
    /// Title-cased types joined with `, `
    pub types: String,
    pub base_stats_total: u32,
    /// Number of attacking types resisted or ignored
    pub defensive_advantages: usize,
}

/// Why a Pokémon was left out of the results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Exclusion {
    /// Ultra Beast or Paradox Pokémon
    Denylisted,
    /// Detail record could not be fetched
    Unavailable,
    LegendaryOrMythical,
    BelowMinimumTotal,
    /// Alternate form with the same types and stats as its base form
    CosmeticVariant,
    /// Same base form and signature as an already accepted entry
    Duplicate,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Denylisted => "ultra beast or paradox",
            Self::Unavailable => "details unavailable",
            Self::LegendaryOrMythical => "legendary or mythical",
            Self::BelowMinimumTotal => "below minimum base stat total",
            Self::CosmeticVariant => "same stats and types as base form",
            Self::Duplicate => "duplicate signature",
        };
        f.write_str(label)
    }
}

/// Outcome of a full analysis pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Accepted rows, ranked.
    pub rows: Vec<ResultRow>,
    /// Entries whose processing failed with an error.
    pub error_count: usize,
    pub exclusions: BTreeMap<Exclusion, usize>,
}

impl RunSummary {
    pub fn excluded(&self, reason: Exclusion) -> usize {
        self.exclusions.get(&reason).copied().unwrap_or(0)
    }
}
