use serde::{Deserialize, Serialize};

/// Reference to another API resource, e.g. `{"name": "steel", "url": ".../type/9/"}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id at the end of the resource URL.
    ///
    /// PokeAPI URLs end with the resource id followed by a trailing slash
    /// (`https://pokeapi.co/api/v2/pokemon-species/6/`).
    ///
    /// # Returns
    /// - `Some(id)` - The last non-empty path segment parses as a number
    /// - `None` - The URL does not end in a numeric segment
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// Paged list response, e.g. `GET /pokemon?limit=4000`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedResource>,
}
