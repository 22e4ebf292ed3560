//! Setup and teardown around the analysis pass: client construction and the persisted caches.

use entity::prelude::{Pokemon, PokemonSpecies};

use crate::{
    config::Config,
    error::Error,
    model::type_chart::TypeChart,
    pokeapi::PokeApiClient,
    service::{
        cache::{CacheStore, JsonFileStore, KvCache},
        orchestrator::{LookupCaches, TypeChartOrchestrator},
        retry::RetryContext,
    },
};

/// Build the PokeAPI client for the configured base URL
pub fn build_client(config: &Config) -> Result<PokeApiClient, Error> {
    PokeApiClient::new(&config.api_url)
}

/// Load the detail and species caches, and the type chart if one was saved.
///
/// Nothing is read when a cache refresh was requested. A cache file that exists but can't be
/// parsed is an error.
pub fn load_caches(config: &Config) -> Result<(LookupCaches, Option<TypeChart>), Error> {
    if config.refresh_cache {
        tracing::info!("Cache refresh requested. All data will be fetched from API.");
        return Ok((LookupCaches::default(), None));
    }

    let details: KvCache<String, Pokemon> = JsonFileStore::new(&config.cache_files.details)
        .load()?
        .unwrap_or_default();
    let species: KvCache<u32, PokemonSpecies> = JsonFileStore::new(&config.cache_files.species)
        .load()?
        .unwrap_or_default();
    let type_chart: Option<TypeChart> =
        JsonFileStore::new(&config.cache_files.type_chart).load()?;

    tracing::info!(
        "Loaded {} Pokémon details and {} species from cache",
        details.len(),
        species.len()
    );

    Ok((
        LookupCaches::new(details, species, TypeChart::new()),
        type_chart,
    ))
}

/// Use the saved type chart, or build one from the catalog and save it straight away.
pub async fn ensure_type_chart(
    config: &Config,
    client: &PokeApiClient,
    retry: &RetryContext,
    saved: Option<TypeChart>,
) -> Result<TypeChart, Error> {
    if let Some(type_chart) = saved {
        tracing::info!("Loaded existing type chart with {} types", type_chart.len());
        return Ok(type_chart);
    }

    tracing::info!("Type chart not found, building it");

    let type_chart = TypeChartOrchestrator::new(client, retry)
        .build_type_chart(&config.pacing)
        .await?;

    JsonFileStore::new(&config.cache_files.type_chart).save(&type_chart)?;
    tracing::info!("Type chart saved to {}", config.cache_files.type_chart.display());

    Ok(type_chart)
}

/// Save the detail and species caches for the next run
pub fn save_caches(config: &Config, caches: &LookupCaches) -> Result<(), Error> {
    JsonFileStore::new(&config.cache_files.details).save(&caches.details)?;
    JsonFileStore::new(&config.cache_files.species).save(&caches.species)?;

    tracing::info!(
        "Saved {} Pokémon details and {} species info to cache",
        caches.details.len(),
        caches.species.len()
    );

    Ok(())
}
