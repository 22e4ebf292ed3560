//! Defensive type effectiveness.
//!
//! A Pokémon's defensive advantage score is the number of distinct attacking types it is immune
//! to or resists, across all of its own types. Two half-damage resistances to the same attacker
//! compound into quarter damage, which still counts once.

use std::collections::BTreeSet;

use crate::{error::analysis::AnalysisError, model::type_chart::TypeChart};

/// Attacking types a Pokémon shrugs off, split by how strongly.
///
/// The three sets are disjoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResistanceProfile {
    pub immune: BTreeSet<String>,
    pub quarter_damage: BTreeSet<String>,
    pub half_damage: BTreeSet<String>,
}

impl ResistanceProfile {
    /// Count of distinct attacking types resisted or ignored
    pub fn score(&self) -> usize {
        self.immune.len() + self.quarter_damage.len() + self.half_damage.len()
    }
}

/// Build the resistance profile for a Pokémon with the given types.
///
/// Types are processed in order. Immunities are recorded unconditionally and take the attacker
/// out of the resistance sets. Each half-damage relation is then applied with this priority:
/// 1. already immune: ignored
/// 2. already quarter damage: ignored
/// 3. already half damage: promoted to quarter damage
/// 4. otherwise: half damage
///
/// # Returns
/// - `Ok(ResistanceProfile)` - All types were found in the chart
/// - `Err(AnalysisError::UnknownType)` - A type is missing from the chart
pub fn resistance_profile(
    types: &[String],
    type_chart: &TypeChart,
) -> Result<ResistanceProfile, AnalysisError> {
    let mut profile = ResistanceProfile::default();

    for type_name in types {
        let relations = type_chart
            .get(type_name)
            .ok_or_else(|| AnalysisError::UnknownType {
                type_name: type_name.clone(),
            })?;

        for immunity in &relations.no_damage_from {
            profile.half_damage.remove(&immunity.name);
            profile.quarter_damage.remove(&immunity.name);
            profile.immune.insert(immunity.name.clone());
        }

        for resistance in &relations.half_damage_from {
            let attacker = &resistance.name;

            if profile.immune.contains(attacker) || profile.quarter_damage.contains(attacker) {
                continue;
            }

            if profile.half_damage.remove(attacker) {
                profile.quarter_damage.insert(attacker.clone());
            } else {
                profile.half_damage.insert(attacker.clone());
            }
        }
    }

    Ok(profile)
}

/// Defensive advantage score for a Pokémon with the given types
pub fn defensive_score(types: &[String], type_chart: &TypeChart) -> Result<usize, AnalysisError> {
    resistance_profile(types, type_chart).map(|profile| profile.score())
}
