//! HTTP client for the PokeAPI catalog.
//!
//! Each method performs exactly one request and maps the response onto a record or an
//! [`ApiError`]. Retrying, rate-limit waits and caching are layered on top by the
//! orchestrators, so this client never sleeps.

use std::time::Duration;

use entity::prelude::*;
use reqwest::{header::RETRY_AFTER, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{api::ApiError, Error};

const USER_AGENT: &str = concat!("worthy/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Build a client for the catalog at `base_url` (e.g. `https://pokeapi.co/api/v2`)
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Detail URL for a Pokémon looked up by name, also used as its detail cache key
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}/", self.base_url, name)
    }

    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}/", self.base_url, id)
    }

    pub fn type_url(&self, name: &str) -> String {
        format!("{}/type/{}/", self.base_url, name)
    }

    /// `GET /pokemon?limit={limit}`, every Pokémon and form in a single page
    pub async fn get_pokemon_list(&self, limit: u32) -> Result<ResourceList, Error> {
        let url = format!("{}/pokemon?limit={}", self.base_url, limit);
        self.get_json(&url).await
    }

    /// `GET` a Pokémon detail record by its full URL
    pub async fn get_pokemon(&self, url: &str) -> Result<Pokemon, Error> {
        self.get_json(url).await
    }

    /// `GET /pokemon-species/{id}/`
    pub async fn get_species(&self, id: u32) -> Result<PokemonSpecies, Error> {
        self.get_json(&self.species_url(id)).await
    }

    /// `GET /type`
    pub async fn get_type_list(&self) -> Result<ResourceList, Error> {
        let url = format!("{}/type", self.base_url);
        self.get_json(&url).await
    }

    /// `GET /type/{name}/`
    pub async fn get_type(&self, name: &str) -> Result<TypeDetail, Error> {
        self.get_json(&self.type_url(name)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map(Duration::from_secs);

            return Err(ApiError::RateLimited {
                url: url.to_string(),
                retry_after,
            }
            .into());
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.to_string()).into());
        }

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|source| {
            ApiError::Malformed {
                url: url.to_string(),
                source,
            }
            .into()
        })
    }
}
