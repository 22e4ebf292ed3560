use std::collections::HashMap;

use entity::prelude::DamageRelations;
use serde::{Deserialize, Serialize};

/// Defensive damage relations for every battle type, keyed by type name.
///
/// Built once per run from the type endpoints (or loaded from the type chart cache) and
/// read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeChart(HashMap<String, DamageRelations>);

impl TypeChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_name: impl Into<String>, relations: DamageRelations) {
        self.0.insert(type_name.into(), relations);
    }

    pub fn get(&self, type_name: &str) -> Option<&DamageRelations> {
        self.0.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, DamageRelations)> for TypeChart {
    fn from_iter<I: IntoIterator<Item = (String, DamageRelations)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
