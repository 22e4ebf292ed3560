use entity::prelude::{Pokemon, PokemonSpecies};

use crate::{
    config::Curation,
    error::Error,
    pokeapi::PokeApiClient,
    service::{
        classify,
        orchestrator::{LookupCaches, PokemonOrchestrator},
        retry::RetryContext,
    },
};

/// Orchestrator for species records: legendary status and National Dex numbers
pub struct SpeciesOrchestrator<'a> {
    client: &'a PokeApiClient,
    retry: &'a RetryContext,
}

impl<'a> SpeciesOrchestrator<'a> {
    pub fn new(client: &'a PokeApiClient, retry: &'a RetryContext) -> Self {
        Self { client, retry }
    }

    /// Species record for a Pokémon, cached under the Pokémon's id.
    ///
    /// Forms have ids with no species of their own (`/pokemon-species/10034/` is a 404). In that
    /// case the species referenced by the detail record is requested instead; this redirect does
    /// not use up a retry attempt. When the redirect is also missing, or there is nowhere to
    /// redirect to, a non-legendary record without an id is cached in its place.
    ///
    /// # Returns
    /// - `Ok(PokemonSpecies)` - Species record, possibly the unresolved default
    /// - `Err(Error::RetryExhausted)` - The species endpoint kept failing
    pub async fn fetch_species(
        &self,
        pokemon: &Pokemon,
        caches: &mut LookupCaches,
    ) -> Result<PokemonSpecies, Error> {
        caches
            .species
            .get_or_fetch(pokemon.id, || self.resolve_species(pokemon))
            .await
    }

    async fn resolve_species(&self, pokemon: &Pokemon) -> Result<PokemonSpecies, Error> {
        match self.request_species(pokemon.id).await {
            Err(e) if e.is_not_found() => {}
            result => return result,
        }

        let Some(base_id) = pokemon.species_id().filter(|id| *id != pokemon.id) else {
            tracing::debug!(
                "No species for {} ({}), using default species record",
                pokemon.name,
                pokemon.id
            );
            return Ok(PokemonSpecies::unresolved());
        };

        tracing::debug!(
            "No species for {} ({}), trying base species {}",
            pokemon.name,
            pokemon.id,
            base_id
        );

        match self.request_species(base_id).await {
            Err(e) if e.is_not_found() => Ok(PokemonSpecies::unresolved()),
            result => result,
        }
    }

    async fn request_species(&self, id: u32) -> Result<PokemonSpecies, Error> {
        let description = format!("species {}", id);

        self.retry
            .execute_with_retry(&description, || self.client.get_species(id))
            .await
    }

    /// Whether a Pokémon, or the base form of a special form, is legendary or mythical.
    ///
    /// Anything that prevents a decision, other than the base form not existing, counts as
    /// legendary so that uncertain entries stay out of the results.
    pub async fn is_legendary_or_mythical(
        &self,
        pokemon: &Pokemon,
        curation: &Curation,
        caches: &mut LookupCaches,
    ) -> bool {
        match self.check_legendary_or_mythical(pokemon, curation, caches).await {
            Ok(is_legendary) => is_legendary,
            Err(e) => {
                tracing::warn!(
                    "Could not determine legendary status of {}, excluding it: {}",
                    pokemon.name,
                    e
                );
                true
            }
        }
    }

    async fn check_legendary_or_mythical(
        &self,
        pokemon: &Pokemon,
        curation: &Curation,
        caches: &mut LookupCaches,
    ) -> Result<bool, Error> {
        let species = self.fetch_species(pokemon, caches).await?;
        if species.is_legendary_or_mythical() {
            return Ok(true);
        }

        if !classify::is_special_form(&pokemon.name, curation) {
            return Ok(false);
        }

        let base_name = classify::base_form_name(&pokemon.name, curation);
        let pokemon_orch = PokemonOrchestrator::new(self.client, self.retry);

        let base = match pokemon_orch.fetch_pokemon_by_name(&base_name, caches).await {
            Ok(base) => base,
            Err(e) if e.is_not_found() => return Ok(false),
            Err(e) => return Err(e),
        };

        let base_species = self.fetch_species(&base, caches).await?;

        Ok(base_species.is_legendary_or_mythical())
    }

    /// National Dex number of a Pokémon, falling back to its catalog id.
    pub async fn national_dex_number(&self, pokemon: &Pokemon, caches: &mut LookupCaches) -> u32 {
        match self.fetch_species(pokemon, caches).await {
            Ok(species) => species.id.unwrap_or(pokemon.id),
            Err(e) => {
                tracing::debug!(
                    "Using catalog id {} as dex number for {}: {}",
                    pokemon.id,
                    pokemon.name,
                    e
                );
                pokemon.id
            }
        }
    }
}
