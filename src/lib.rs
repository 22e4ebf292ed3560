pub mod config;
pub mod error;
pub mod model;
pub mod pokeapi;
pub mod report;
pub mod service;
pub mod startup;

use crate::{
    config::Config,
    error::Error,
    model::report::RunSummary,
    service::{
        analysis::{prefilter, AnalysisService},
        orchestrator::PokemonOrchestrator,
        retry::RetryContext,
    },
};

/// Run a full analysis: load caches, fetch the listing, analyse it, and save the caches.
///
/// Errors returned here happen before or after the analysis pass (unreadable cache files,
/// unobtainable type chart or listing, unwritable cache files). Failures for individual
/// Pokémon are counted in the returned summary instead.
pub async fn run(config: &Config) -> Result<RunSummary, Error> {
    let client = startup::build_client(config)?;
    let retry = RetryContext::new(config.retry.clone());

    let (mut caches, saved_type_chart) = startup::load_caches(config)?;
    caches.type_chart =
        startup::ensure_type_chart(config, &client, &retry, saved_type_chart).await?;

    tracing::info!("Fetching Pokémon data");
    let listing = PokemonOrchestrator::new(&client, &retry)
        .fetch_listing(config.listing_limit)
        .await?;
    let listing = prefilter(listing, config.analysis.include_forms, &config.curation);

    let summary = AnalysisService::new(
        &client,
        &retry,
        &config.analysis,
        &config.curation,
        &config.pacing,
    )
    .run(&listing, &mut caches)
    .await;

    startup::save_caches(config, &caches)?;

    Ok(summary)
}
