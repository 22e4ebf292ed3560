//! Tests for full runs and the persisted lookup caches.

use worthy::{
    config::{POKEMON_DETAILS_CACHE, SPECIES_INFO_CACHE, TYPE_CHART_FILENAME},
    error::{analysis::AnalysisError, cache::CacheError, Error},
    startup,
};
use worthy_test_utils::{constant::TEST_LISTING_LIMIT, prelude::*};

use crate::common;

const ENTRIES: &[(u32, &str)] = &[
    (6, "charizard"),
    (150, "mewtwo"),
    (445, "garchomp"),
    (798, "kartana"),
    (10034, "charizard-mega-x"),
];

/// Register every endpoint a run over `ENTRIES` without forms needs, detail and species
/// endpoints expected once.
fn create_catalog_endpoints(test: &mut TestSetup, listing_requests: usize) {
    let listing = factory::mock_listing(&test.url(), ENTRIES);

    test.pokeapi()
        .create_type_chart_endpoints(&data::type_details());
    test.pokeapi()
        .create_listing_endpoint(&listing, TEST_LISTING_LIMIT, listing_requests);

    for (pokemon, legendary) in [
        (data::charizard(), false),
        (data::mewtwo(), true),
        (data::garchomp(), false),
    ] {
        test.pokeapi()
            .create_pokemon_endpoint(&pokemon.id.to_string(), &pokemon, 1);
        test.pokeapi().create_species_endpoint(
            pokemon.id,
            &factory::mock_species(pokemon.id, &pokemon.name, legendary, false),
            1,
        );
    }
}

/// Expect a run to analyse the listing and write all three cache files
#[tokio::test]
async fn run_writes_cache_files() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let cache_dir = TestCacheDir::new()?;
    create_catalog_endpoints(&mut test, 1);

    let config = common::test_config(&test, cache_dir.path(), &[]);
    let summary = worthy::run(&config).await.expect("Run failed");

    let names: Vec<&str> = summary.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Charizard", "Garchomp"]);
    assert_eq!(summary.error_count, 0);

    let details = cache_dir.read_json(POKEMON_DETAILS_CACHE)?;
    let species = cache_dir.read_json(SPECIES_INFO_CACHE)?;
    let type_chart = cache_dir.read_json(TYPE_CHART_FILENAME)?;

    assert_eq!(details.as_object().map(|m| m.len()), Some(3));
    assert_eq!(species["150"]["is_legendary"], true);
    assert_eq!(type_chart.as_object().map(|m| m.len()), Some(18));
    test.assert_mocks();

    Ok(())
}

/// Expect a second run to reuse every cache and only fetch the listing again
#[tokio::test]
async fn second_run_reads_caches() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let cache_dir = TestCacheDir::new()?;
    create_catalog_endpoints(&mut test, 2);

    let config = common::test_config(&test, cache_dir.path(), &[]);
    let first = worthy::run(&config).await.expect("First run failed");
    let second = worthy::run(&config).await.expect("Second run failed");

    assert_eq!(first.rows, second.rows);
    test.assert_mocks();

    Ok(())
}

/// Expect an unparseable cache file to abort the run before any request
#[tokio::test]
async fn unparseable_cache_is_an_error() -> Result<(), TestError> {
    let test = TestSetup::new().await;
    let cache_dir = TestCacheDir::new()?;
    cache_dir.write(POKEMON_DETAILS_CACHE, "not json")?;

    let config = common::test_config(&test, cache_dir.path(), &[]);
    let result = worthy::run(&config).await;

    assert!(matches!(
        result,
        Err(Error::CacheError(CacheError::Parse { .. }))
    ));

    Ok(())
}

/// Expect a catalog without battle types to abort the run before the listing is requested
#[tokio::test]
async fn empty_type_chart_aborts_run() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let cache_dir = TestCacheDir::new()?;
    let listing = factory::mock_listing(&test.url(), ENTRIES);
    test.pokeapi()
        .create_type_list_endpoint(&["unknown", "shadow"], 1);
    test.pokeapi()
        .create_listing_endpoint(&listing, TEST_LISTING_LIMIT, 0);

    let config = common::test_config(&test, cache_dir.path(), &[]);
    let result = worthy::run(&config).await;

    assert!(matches!(
        result,
        Err(Error::AnalysisError(AnalysisError::EmptyTypeChart))
    ));
    assert!(!cache_dir.exists(TYPE_CHART_FILENAME));
    test.assert_mocks();

    Ok(())
}

/// Expect --refresh-cache to ignore existing cache files and overwrite them
#[tokio::test]
async fn refresh_ignores_existing_caches() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    let cache_dir = TestCacheDir::new()?;
    cache_dir.write(POKEMON_DETAILS_CACHE, "not json")?;
    cache_dir.write(TYPE_CHART_FILENAME, "{}")?;
    create_catalog_endpoints(&mut test, 1);

    let config = common::test_config(&test, cache_dir.path(), &["--refresh-cache"]);
    let summary = worthy::run(&config).await.expect("Run failed");

    assert_eq!(summary.rows.len(), 2);
    let details = cache_dir.read_json(POKEMON_DETAILS_CACHE)?;
    assert_eq!(details.as_object().map(|m| m.len()), Some(3));
    test.assert_mocks();

    Ok(())
}

/// Expect missing cache files to load as empty caches
#[tokio::test]
async fn missing_cache_files_load_empty() -> Result<(), TestError> {
    let test = TestSetup::new().await;
    let cache_dir = TestCacheDir::new()?;
    let config = common::test_config(&test, cache_dir.path(), &[]);

    let (caches, type_chart) = startup::load_caches(&config).expect("Failed to load caches");

    assert!(caches.details.is_empty());
    assert!(caches.species.is_empty());
    assert!(type_chart.is_none());
    assert!(!cache_dir.exists(POKEMON_DETAILS_CACHE));

    Ok(())
}

/// Expect saved caches to load back unchanged
#[tokio::test]
async fn saved_caches_load_back() -> Result<(), TestError> {
    let test = TestSetup::new().await;
    let cache_dir = TestCacheDir::new()?;
    let config = common::test_config(&test, cache_dir.path(), &[]);

    let mut caches = common::caches();
    let garchomp = data::garchomp();
    let url = format!("{}/pokemon/445/", test.url());
    caches.details.insert(url.clone(), garchomp.clone());
    caches
        .species
        .insert(445, factory::mock_species(445, "garchomp", false, false));

    startup::save_caches(&config, &caches).expect("Failed to save caches");
    let (loaded, _) = startup::load_caches(&config).expect("Failed to load caches");

    assert_eq!(loaded.details.get(&url), Some(&garchomp));
    assert_eq!(loaded.species.get(&445).map(|s| s.is_legendary), Some(false));

    Ok(())
}

/// Expect each scratch directory to be distinct and to be removed with its cache files on drop
#[test]
fn scratch_dir_is_removed_on_drop() -> Result<(), TestError> {
    let first = TestCacheDir::new()?;
    let second = TestCacheDir::new()?;
    assert_ne!(first.path(), second.path());

    let path = first.path().to_path_buf();
    first.write(SPECIES_INFO_CACHE, "{}")?;
    assert!(first.exists(SPECIES_INFO_CACHE));

    drop(first);

    assert!(!path.exists());
    assert!(second.path().exists());

    Ok(())
}
