use serde::{Deserialize, Serialize};

use crate::resource::NamedResource;

/// Type detail from `GET /type/{name}/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDetail {
    pub name: String,
    pub damage_relations: DamageRelations,
}

/// Damage relations of a type when it is the defending type.
///
/// Only the `*_from` sets are kept; the offensive `*_to` sets are not used by the analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
}
