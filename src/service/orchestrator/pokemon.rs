use entity::prelude::{NamedResource, Pokemon};

use crate::{
    error::Error,
    pokeapi::PokeApiClient,
    service::{orchestrator::LookupCaches, retry::RetryContext},
};

/// Orchestrator for the Pokémon listing and detail records
pub struct PokemonOrchestrator<'a> {
    client: &'a PokeApiClient,
    retry: &'a RetryContext,
}

impl<'a> PokemonOrchestrator<'a> {
    pub fn new(client: &'a PokeApiClient, retry: &'a RetryContext) -> Self {
        Self { client, retry }
    }

    /// Fetch every Pokémon and form in one listing request
    pub async fn fetch_listing(&self, limit: u32) -> Result<Vec<NamedResource>, Error> {
        let listing = self
            .retry
            .execute_with_retry("pokemon listing", || self.client.get_pokemon_list(limit))
            .await?;

        tracing::info!(
            "Catalog listed {} of {} Pokémon",
            listing.results.len(),
            listing.count
        );

        Ok(listing.results)
    }

    /// Fetch a detail record by URL, served from the detail cache when possible
    pub async fn fetch_pokemon(
        &self,
        url: &str,
        caches: &mut LookupCaches,
    ) -> Result<Pokemon, Error> {
        let description = format!("pokemon details {}", url);

        caches
            .details
            .get_or_fetch(url.to_string(), || {
                self.retry
                    .execute_with_retry(&description, || self.client.get_pokemon(url))
            })
            .await
    }

    /// Fetch a detail record by Pokémon name through `/pokemon/{name}/`
    pub async fn fetch_pokemon_by_name(
        &self,
        name: &str,
        caches: &mut LookupCaches,
    ) -> Result<Pokemon, Error> {
        let url = self.client.pokemon_url(name);
        self.fetch_pokemon(&url, caches).await
    }
}
