//! Tests for AnalysisService::run on base species.

use worthy::{
    config::AnalysisConfig,
    model::report::{Exclusion, ResultRow},
};
use worthy_test_utils::prelude::*;

use super::{analyze, with_min_bst};
use crate::common;

/// Expect a qualifying Pokémon to produce a complete row
#[tokio::test]
async fn includes_qualifying_pokemon() {
    let mut test = TestSetup::new().await;
    let garchomp = data::garchomp();
    test.pokeapi().create_pokemon_endpoint("445", &garchomp, 1);
    test.pokeapi().create_species_endpoint(
        445,
        &factory::mock_species(445, "garchomp", false, false),
        1,
    );

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(445, "garchomp")],
        &AnalysisConfig::default(),
        &mut caches,
    )
    .await;

    assert_eq!(
        summary.rows,
        vec![ResultRow {
            name: "Garchomp".to_string(),
            id: 445,
            types: "Dragon, Ground".to_string(),
            base_stats_total: 600,
            // immune: electric; half: fire, water, grass, poison, rock
            defensive_advantages: 6,
        }]
    );
    assert_eq!(summary.error_count, 0);
    test.assert_mocks();
}

/// Expect Ultra Beasts and Paradox Pokémon to be skipped without any request
#[tokio::test]
async fn skips_denylisted_without_fetching() {
    let mut test = TestSetup::new().await;
    test.pokeapi().create_status_endpoint("/pokemon/798/", 200, 0);
    test.pokeapi().create_status_endpoint("/pokemon/992/", 200, 0);

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(798, "kartana"), (992, "iron-hands")],
        &with_min_bst(0),
        &mut caches,
    )
    .await;

    assert!(summary.rows.is_empty());
    assert_eq!(summary.excluded(Exclusion::Denylisted), 2);
    assert_eq!(summary.error_count, 0);
    assert!(caches.details.is_empty());
    test.assert_mocks();
}

/// Expect legendary Pokémon to be excluded
#[tokio::test]
async fn excludes_legendary() {
    let mut test = TestSetup::new().await;
    test.pokeapi().create_pokemon_endpoint("150", &data::mewtwo(), 1);
    test.pokeapi().create_species_endpoint(
        150,
        &factory::mock_species(150, "mewtwo", true, false),
        1,
    );

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(150, "mewtwo")],
        &AnalysisConfig::default(),
        &mut caches,
    )
    .await;

    assert!(summary.rows.is_empty());
    assert_eq!(summary.excluded(Exclusion::LegendaryOrMythical), 1);
    test.assert_mocks();
}

/// Expect a base stat total equal to the minimum to pass and one below it to fail
#[tokio::test]
async fn minimum_total_is_inclusive() {
    for (min_bst, included) in [(534, true), (535, false)] {
        let mut test = TestSetup::new().await;
        test.pokeapi().create_pokemon_endpoint("6", &data::charizard(), 1);
        test.pokeapi().create_species_endpoint(
            6,
            &factory::mock_species(6, "charizard", false, false),
            1,
        );

        let mut caches = common::caches();
        let summary =
            analyze(&test, &[(6, "charizard")], &with_min_bst(min_bst), &mut caches).await;

        assert_eq!(summary.rows.len() == 1, included, "min_bst {}", min_bst);
        assert_eq!(
            summary.excluded(Exclusion::BelowMinimumTotal) == 1,
            !included,
            "min_bst {}",
            min_bst
        );
        test.assert_mocks();
    }
}

/// Expect missing detail records to be excluded rather than counted as errors
#[tokio::test]
async fn excludes_unavailable_details() {
    let mut test = TestSetup::new().await;
    test.pokeapi().create_status_endpoint("/pokemon/9999/", 404, 1);
    test.pokeapi().create_status_endpoint("/pokemon/9998/", 500, 3);

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(9999, "missingno"), (9998, "glitchmon")],
        &AnalysisConfig::default(),
        &mut caches,
    )
    .await;

    assert!(summary.rows.is_empty());
    assert_eq!(summary.excluded(Exclusion::Unavailable), 2);
    assert_eq!(summary.error_count, 0);
    test.assert_mocks();
}

/// Expect a failing entry to be counted while the rest of the listing is still analysed
#[tokio::test]
async fn counts_errors_and_continues() {
    let mut test = TestSetup::new().await;
    let odd = factory::mock_pokemon(9000, "oddmon", &["cosmic"], [100; 6], 9000);
    test.pokeapi().create_pokemon_endpoint("9000", &odd, 1);
    test.pokeapi().create_species_endpoint(
        9000,
        &factory::mock_species(9000, "oddmon", false, false),
        1,
    );
    test.pokeapi()
        .create_pokemon_endpoint("445", &data::garchomp(), 1);
    test.pokeapi().create_species_endpoint(
        445,
        &factory::mock_species(445, "garchomp", false, false),
        1,
    );

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(9000, "oddmon"), (445, "garchomp")],
        &AnalysisConfig::default(),
        &mut caches,
    )
    .await;

    assert_eq!(summary.error_count, 1);
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].name, "Garchomp");
    test.assert_mocks();
}

/// Expect rows ranked by defensive advantages, then base stat total
#[tokio::test]
async fn ranks_results() {
    let mut test = TestSetup::new().await;
    for (pokemon, name) in [
        (data::garchomp(), "garchomp"),
        (data::metagross(), "metagross"),
    ] {
        test.pokeapi()
            .create_pokemon_endpoint(&pokemon.id.to_string(), &pokemon, 1);
        test.pokeapi().create_species_endpoint(
            pokemon.id,
            &factory::mock_species(pokemon.id, name, false, false),
            1,
        );
    }

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(445, "garchomp"), (376, "metagross")],
        &AnalysisConfig::default(),
        &mut caches,
    )
    .await;

    let ranked: Vec<(&str, usize)> = summary
        .rows
        .iter()
        .map(|r| (r.name.as_str(), r.defensive_advantages))
        .collect();
    // Metagross: immune poison, quarter psychic, half 9 from steel + fighting
    assert_eq!(ranked, vec![("Metagross", 12), ("Garchomp", 6)]);
    test.assert_mocks();
}

/// Expect a second pass over warm caches to make no requests and give the same rows
#[tokio::test]
async fn second_pass_uses_caches() {
    let mut test = TestSetup::new().await;
    for (pokemon, name) in [
        (data::garchomp(), "garchomp"),
        (data::metagross(), "metagross"),
        (data::charizard(), "charizard"),
    ] {
        test.pokeapi()
            .create_pokemon_endpoint(&pokemon.id.to_string(), &pokemon, 1);
        test.pokeapi().create_species_endpoint(
            pokemon.id,
            &factory::mock_species(pokemon.id, name, false, false),
            1,
        );
    }
    let entries = [(6, "charizard"), (445, "garchomp"), (376, "metagross")];

    let mut caches = common::caches();
    let first = analyze(&test, &entries, &AnalysisConfig::default(), &mut caches).await;
    let second = analyze(&test, &entries, &AnalysisConfig::default(), &mut caches).await;

    assert_eq!(first, second);
    assert_eq!(first.rows.len(), 3);
    test.assert_mocks();
}
