//! The analysis pass over the catalog listing.
//!
//! Every listed Pokémon ends up included with a [`ResultRow`], excluded with an [`Exclusion`], or
//! counted as an error. Errors for one entry never stop the pass.

use std::collections::{BTreeMap, HashSet};

use entity::prelude::{NamedResource, Pokemon};

use crate::{
    config::{AnalysisConfig, Curation, Pacing},
    error::Error,
    model::report::{Exclusion, ResultRow, RunSummary},
    pokeapi::PokeApiClient,
    service::{
        classify::{self, Signature},
        effectiveness,
        orchestrator::{LookupCaches, PokemonOrchestrator, SpeciesOrchestrator},
        retry::RetryContext,
    },
};


/// Result of analysing a single listed Pokémon
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Included(ResultRow),
    Excluded(Exclusion),
}

/// Drop listing entries that are never analysed.
///
/// Gigantamax and gender variants are always dropped, base species are always kept, and other
/// special forms are kept only with `include_forms`.
pub fn prefilter(
    listing: Vec<NamedResource>,
    include_forms: bool,
    curation: &Curation,
) -> Vec<NamedResource> {
    listing
        .into_iter()
        .filter(|entry| {
            if classify::is_gmax_or_gender_variant(&entry.name, curation) {
                false
            } else if !classify::is_special_form(&entry.name, curation) {
                true
            } else {
                include_forms
            }
        })
        .collect()
}

/// Sort rows by defensive advantages, then base stat total, both descending.
///
/// The sort is stable, rows tied on both keep their listing order.
pub fn rank(rows: &mut [ResultRow]) {
    rows.sort_by(|a, b| {
        b.defensive_advantages
            .cmp(&a.defensive_advantages)
            .then_with(|| b.base_stats_total.cmp(&a.base_stats_total))
    });
}

pub struct AnalysisService<'a> {
    client: &'a PokeApiClient,
    retry: &'a RetryContext,
    config: &'a AnalysisConfig,
    curation: &'a Curation,
    pacing: &'a Pacing,
}

impl<'a> AnalysisService<'a> {
    /// Creates a new instance of [`AnalysisService`]
    pub fn new(
        client: &'a PokeApiClient,
        retry: &'a RetryContext,
        config: &'a AnalysisConfig,
        curation: &'a Curation,
        pacing: &'a Pacing,
    ) -> Self {
        Self {
            client,
            retry,
            config,
            curation,
            pacing,
        }
    }

    /// Analyse every entry of a pre-filtered listing and rank the accepted rows.
    ///
    /// Entries are processed one at a time in listing order. Records fetched along the way are
    /// added to `caches`.
    pub async fn run(&self, listing: &[NamedResource], caches: &mut LookupCaches) -> RunSummary {
        let mut seen: HashSet<(String, Signature)> = HashSet::new();
        let mut rows = Vec::new();
        let mut exclusions: BTreeMap<Exclusion, usize> = BTreeMap::new();
        let mut error_count = 0;

        tracing::info!("Analyzing {} Pokémon", listing.len());

        for entry in listing {
            match self.analyze(entry, caches, &mut seen).await {
                Ok(Outcome::Included(row)) => {
                    tracing::debug!(
                        "Accepted {} with {} defensive advantages",
                        row.name,
                        row.defensive_advantages
                    );
                    rows.push(row);

                    if self.pacing.cooldown_every > 0
                        && rows.len() % self.pacing.cooldown_every == 0
                        && !self.pacing.cooldown().is_zero()
                    {
                        tokio::time::sleep(self.pacing.cooldown()).await;
                    }
                }
                Ok(Outcome::Excluded(reason)) => {
                    tracing::debug!("Skipping {}: {}", entry.name, reason);
                    *exclusions.entry(reason).or_insert(0) += 1;
                }
                Err(e) => {
                    error_count += 1;
                    tracing::error!("Error processing {}: {}", entry.name, e);
                }
            }
        }

        rank(&mut rows);

        tracing::info!(
            "Analysis complete: {} accepted, {} excluded, {} errors",
            rows.len(),
            exclusions.values().sum::<usize>(),
            error_count
        );

        RunSummary {
            rows,
            error_count,
            exclusions,
        }
    }

    /// Take a single listing entry through every check, in order.
    async fn analyze(
        &self,
        entry: &NamedResource,
        caches: &mut LookupCaches,
        seen: &mut HashSet<(String, Signature)>,
    ) -> Result<Outcome, Error> {
        if classify::is_denylisted(&entry.name, self.curation) {
            return Ok(Outcome::Excluded(Exclusion::Denylisted));
        }

        let pokemon_orch = PokemonOrchestrator::new(self.client, self.retry);
        let species_orch = SpeciesOrchestrator::new(self.client, self.retry);

        let pokemon = match pokemon_orch.fetch_pokemon(&entry.url, caches).await {
            Ok(pokemon) => pokemon,
            Err(e) if e.is_unavailable() => {
                tracing::warn!("No details for {}: {}", entry.name, e);
                return Ok(Outcome::Excluded(Exclusion::Unavailable));
            }
            Err(e) => return Err(e),
        };

        let dex_number = species_orch.national_dex_number(&pokemon, caches).await;

        if species_orch
            .is_legendary_or_mythical(&pokemon, self.curation, caches)
            .await
        {
            return Ok(Outcome::Excluded(Exclusion::LegendaryOrMythical));
        }

        let base_stats_total = pokemon.base_stat_total();
        if base_stats_total < self.config.min_bst {
            return Ok(Outcome::Excluded(Exclusion::BelowMinimumTotal));
        }

        let signature = classify::signature(&pokemon);
        let base_name = classify::base_form_name(&pokemon.name, self.curation);

        if base_name != pokemon.name
            && self
                .same_as_base_form(&pokemon_orch, &base_name, &signature, caches)
                .await
        {
            return Ok(Outcome::Excluded(Exclusion::CosmeticVariant));
        }

        let key = (base_name, signature);
        if seen.contains(&key) {
            return Ok(Outcome::Excluded(Exclusion::Duplicate));
        }

        let types = pokemon.type_names();
        let defensive_advantages = effectiveness::defensive_score(&types, &caches.type_chart)?;
        seen.insert(key);

        Ok(Outcome::Included(self.result_row(
            &pokemon,
            dex_number,
            base_stats_total,
            defensive_advantages,
        )))
    }

    /// Whether the base form has the same types and stats. A base form that can't be fetched is
    /// never the same.
    async fn same_as_base_form(
        &self,
        pokemon_orch: &PokemonOrchestrator<'_>,
        base_name: &str,
        signature: &Signature,
        caches: &mut LookupCaches,
    ) -> bool {
        match pokemon_orch.fetch_pokemon_by_name(base_name, caches).await {
            Ok(base) => classify::signature(&base) == *signature,
            Err(e) => {
                tracing::debug!("Base form {} unavailable, keeping variant: {}", base_name, e);
                false
            }
        }
    }

    fn result_row(
        &self,
        pokemon: &Pokemon,
        dex_number: u32,
        base_stats_total: u32,
        defensive_advantages: usize,
    ) -> ResultRow {
        let types = pokemon
            .type_names()
            .iter()
            .map(|t| classify::title_case(t))
            .collect::<Vec<_>>()
            .join(", ");

        ResultRow {
            name: classify::display_name(&pokemon.name, self.curation),
            id: dex_number,
            types,
            base_stats_total,
            defensive_advantages,
        }
    }
}
