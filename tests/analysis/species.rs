//! Tests for SpeciesOrchestrator species resolution and legendary checks.

use worthy::{
    config::Curation,
    error::Error,
    service::orchestrator::SpeciesOrchestrator,
};
use worthy_test_utils::prelude::*;

use crate::common;

/// Expect a form without its own species to use the species it references
#[tokio::test]
async fn redirects_missing_species_to_base() {
    let mut test = TestSetup::new().await;
    let charizard_species = factory::mock_species(6, "charizard", false, false);
    test.pokeapi()
        .create_status_endpoint("/pokemon-species/10034/", 404, 1);
    test.pokeapi()
        .create_species_endpoint(6, &charizard_species, 1);

    let client = common::client(&test);
    let retry = common::instant_retry();
    let mut caches = common::caches();
    let species_orch = SpeciesOrchestrator::new(&client, &retry);
    let mega = data::charizard_mega_x();

    let species = species_orch
        .fetch_species(&mega, &mut caches)
        .await
        .expect("Failed to fetch species");
    let dex_number = species_orch.national_dex_number(&mega, &mut caches).await;

    assert_eq!(species, charizard_species);
    assert_eq!(dex_number, 6);
    // Cached under the form's own id
    assert_eq!(caches.species.get(&10034), Some(&charizard_species));
    test.assert_mocks();
}

/// Expect a default record when neither the form nor its base species exists
#[tokio::test]
async fn falls_back_to_default_species() {
    let mut test = TestSetup::new().await;
    test.pokeapi()
        .create_status_endpoint("/pokemon-species/10034/", 404, 1);
    test.pokeapi()
        .create_status_endpoint("/pokemon-species/6/", 404, 1);
    test.pokeapi()
        .create_status_endpoint("/pokemon/charizard/", 404, 1);

    let client = common::client(&test);
    let retry = common::instant_retry();
    let mut caches = common::caches();
    let species_orch = SpeciesOrchestrator::new(&client, &retry);
    let mega = data::charizard_mega_x();

    let dex_number = species_orch.national_dex_number(&mega, &mut caches).await;
    let is_legendary = species_orch
        .is_legendary_or_mythical(&mega, &Curation::default(), &mut caches)
        .await;

    assert_eq!(dex_number, 10034);
    assert_eq!(caches.species.get(&10034).and_then(|s| s.id), None);
    // The base form record doesn't exist either, so nothing marks it legendary
    assert!(!is_legendary);
    test.assert_mocks();
}

/// Expect a form to be legendary when its base form is
#[tokio::test]
async fn form_of_legendary_is_legendary() {
    let mut test = TestSetup::new().await;
    let mewtwo = data::mewtwo();
    let form = factory::mock_pokemon(10999, "mewtwo-armored", &["psychic"], [100; 6], 10999);

    test.pokeapi().create_species_endpoint(
        10999,
        &factory::mock_species(10999, "mewtwo-armored", false, false),
        1,
    );
    test.pokeapi().create_pokemon_endpoint("mewtwo", &mewtwo, 1);
    test.pokeapi().create_species_endpoint(
        150,
        &factory::mock_species(150, "mewtwo", true, false),
        1,
    );

    let client = common::client(&test);
    let retry = common::instant_retry();
    let mut caches = common::caches();

    let is_legendary = SpeciesOrchestrator::new(&client, &retry)
        .is_legendary_or_mythical(&form, &Curation::default(), &mut caches)
        .await;

    assert!(is_legendary);
    test.assert_mocks();
}

/// Expect an undeterminable status to count as legendary
#[tokio::test]
async fn fails_closed_when_species_unavailable() {
    let mut test = TestSetup::new().await;
    test.pokeapi()
        .create_status_endpoint("/pokemon-species/445/", 500, 3);

    let client = common::client(&test);
    let retry = common::instant_retry();
    let mut caches = common::caches();
    let species_orch = SpeciesOrchestrator::new(&client, &retry);
    let garchomp = data::garchomp();

    let is_legendary = species_orch
        .is_legendary_or_mythical(&garchomp, &Curation::default(), &mut caches)
        .await;

    assert!(is_legendary);
    assert!(caches.species.is_empty());
    test.assert_mocks();
}

/// Expect exhausted species retries to surface as an error, not a default record
#[tokio::test]
async fn exhausted_species_lookup_is_an_error() {
    let mut test = TestSetup::new().await;
    test.pokeapi()
        .create_status_endpoint("/pokemon-species/445/", 503, 3);

    let client = common::client(&test);
    let retry = common::instant_retry();
    let mut caches = common::caches();

    let result = SpeciesOrchestrator::new(&client, &retry)
        .fetch_species(&data::garchomp(), &mut caches)
        .await;

    assert!(matches!(result, Err(Error::RetryExhausted { .. })));
    test.assert_mocks();
}
