//! Tests for AnalysisService::run on alternate forms.

use worthy::model::report::Exclusion;
use worthy_test_utils::prelude::*;

use super::{analyze, with_min_bst};
use crate::common;

/// Expect a Mega Evolution to be listed under its display name and base species number
#[tokio::test]
async fn includes_mega_evolution_with_base_dex_number() {
    let mut test = TestSetup::new().await;
    let charizard = data::charizard();
    let charizard_species = factory::mock_species(6, "charizard", false, false);

    test.pokeapi().create_pokemon_endpoints(&charizard, 1, 1);
    test.pokeapi()
        .create_pokemon_endpoint("10034", &data::charizard_mega_x(), 1);
    // Once for charizard, once when the form's own species lookup is redirected
    test.pokeapi()
        .create_species_endpoint(6, &charizard_species, 2);
    test.pokeapi()
        .create_status_endpoint("/pokemon-species/10034/", 404, 1);

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(6, "charizard"), (10034, "charizard-mega-x")],
        &with_min_bst(525),
        &mut caches,
    )
    .await;

    let rows: Vec<(&str, u32, &str, u32, usize)> = summary
        .rows
        .iter()
        .map(|r| {
            (
                r.name.as_str(),
                r.id,
                r.types.as_str(),
                r.base_stats_total,
                r.defensive_advantages,
            )
        })
        .collect();

    // Equal scores, higher total first
    assert_eq!(
        rows,
        vec![
            ("Mega Charizard X", 6, "Fire, Dragon", 634, 8),
            ("Charizard", 6, "Fire, Flying", 534, 8),
        ]
    );
    assert_eq!(summary.error_count, 0);
    test.assert_mocks();
}

/// Expect a form with the same types and stats as its base form to be dropped
#[tokio::test]
async fn excludes_cosmetic_variant() {
    let mut test = TestSetup::new().await;
    let garchomp = data::garchomp();
    let costume = factory::mock_pokemon(
        10999,
        "garchomp-costume",
        &["ground", "dragon"],
        [108, 130, 95, 80, 85, 102],
        445,
    );

    test.pokeapi().create_pokemon_endpoints(&garchomp, 1, 1);
    test.pokeapi().create_pokemon_endpoint("10999", &costume, 1);
    test.pokeapi().create_species_endpoint(
        445,
        &factory::mock_species(445, "garchomp", false, false),
        2,
    );
    test.pokeapi()
        .create_status_endpoint("/pokemon-species/10999/", 404, 1);

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(445, "garchomp"), (10999, "garchomp-costume")],
        &with_min_bst(525),
        &mut caches,
    )
    .await;

    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].name, "Garchomp");
    assert_eq!(summary.excluded(Exclusion::CosmeticVariant), 1);
    test.assert_mocks();
}

/// Expect forms sharing a base name and signature to be reported once, even when the base form
/// itself can't be fetched
#[tokio::test]
async fn deduplicates_forms_without_base_record() {
    let mut test = TestSetup::new().await;
    let stats = [75, 98, 70, 114, 70, 75];
    let amped = factory::mock_pokemon(849, "toxtricity-amped", &["electric", "poison"], stats, 849);
    let low_key =
        factory::mock_pokemon(10184, "toxtricity-low-key", &["electric", "poison"], stats, 849);

    test.pokeapi().create_pokemon_endpoint("849", &amped, 1);
    test.pokeapi().create_pokemon_endpoint("10184", &low_key, 1);
    test.pokeapi().create_species_endpoint(
        849,
        &factory::mock_species(849, "toxtricity", false, false),
        2,
    );
    test.pokeapi()
        .create_status_endpoint("/pokemon-species/10184/", 404, 1);
    // Looked up by both forms for the legendary check and the cosmetic check
    test.pokeapi()
        .create_status_endpoint("/pokemon/toxtricity/", 404, 4);

    let mut caches = common::caches();
    let summary = analyze(
        &test,
        &[(849, "toxtricity-amped"), (10184, "toxtricity-low-key")],
        &with_min_bst(500),
        &mut caches,
    )
    .await;

    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].name, "Toxtricity (Amped)");
    assert_eq!(summary.rows[0].defensive_advantages, 8);
    assert_eq!(summary.excluded(Exclusion::Duplicate), 1);
    assert_eq!(summary.error_count, 0);
    test.assert_mocks();
}
