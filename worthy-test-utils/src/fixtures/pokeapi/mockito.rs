//! PokeAPI HTTP mock endpoint creation utilities.
//!
//! These methods register mock endpoints on the setup's mockito server. Each mock is kept in
//! `TestSetup::mocks` so it stays registered for the whole test and is checked by
//! `TestSetup::assert_mocks`.

use entity::prelude::{Pokemon, PokemonSpecies, ResourceList, TypeDetail};
use mockito::{Matcher, Mock};

use crate::{constant::TEST_RETRY_AFTER_SECS, fixtures::pokeapi::PokeApiFixtures};

impl<'a> PokeApiFixtures<'a> {
    fn json_endpoint(&mut self, path: &str, body: String, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    fn keep(&mut self, mock: Mock) {
        self.setup.mocks.push(mock);
    }

    /// Create a mock HTTP endpoint for the Pokémon listing.
    ///
    /// Sets up a mock GET endpoint at `/pokemon?limit={limit}`.
    ///
    /// # Arguments
    /// - `listing` - Listing returned from the endpoint
    /// - `limit` - Value the `limit` query parameter must have
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_listing_endpoint(
        &mut self,
        listing: &ResourceList,
        limit: u32,
        expected_requests: usize,
    ) {
        let mock = self
            .setup
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::UrlEncoded("limit".into(), limit.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(listing).unwrap())
            .expect(expected_requests)
            .create();

        self.keep(mock);
    }

    /// Create a mock HTTP endpoint for a Pokémon detail record.
    ///
    /// The record is served at `/pokemon/{key}/`, where `key` is either the catalog id (as used
    /// by listing URLs) or the name (as used for base form lookups).
    pub fn create_pokemon_endpoint(
        &mut self,
        key: &str,
        pokemon: &Pokemon,
        expected_requests: usize,
    ) {
        let path = format!("/pokemon/{}/", key);
        let mock = self.json_endpoint(
            &path,
            serde_json::to_string(pokemon).unwrap(),
            expected_requests,
        );

        self.keep(mock);
    }

    /// Serve a Pokémon at both `/pokemon/{id}/` and `/pokemon/{name}/`.
    pub fn create_pokemon_endpoints(
        &mut self,
        pokemon: &Pokemon,
        expected_by_id: usize,
        expected_by_name: usize,
    ) {
        self.create_pokemon_endpoint(&pokemon.id.to_string(), pokemon, expected_by_id);
        self.create_pokemon_endpoint(&pokemon.name, pokemon, expected_by_name);
    }

    /// Create a mock HTTP endpoint for a species record at `/pokemon-species/{id}/`.
    pub fn create_species_endpoint(
        &mut self,
        id: u32,
        species: &PokemonSpecies,
        expected_requests: usize,
    ) {
        let path = format!("/pokemon-species/{}/", id);
        let mock = self.json_endpoint(
            &path,
            serde_json::to_string(species).unwrap(),
            expected_requests,
        );

        self.keep(mock);
    }

    /// Create a mock HTTP endpoint for the type list at `/type`.
    ///
    /// The listing includes every name given, non-battle types included.
    pub fn create_type_list_endpoint(&mut self, names: &[&str], expected_requests: usize) {
        let base_url = self.setup.url();
        let listing = ResourceList {
            count: names.len() as u32,
            results: names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    entity::prelude::NamedResource::new(
                        *name,
                        format!("{}/type/{}/", base_url, i + 1),
                    )
                })
                .collect(),
        };

        let mock = self.json_endpoint(
            "/type",
            serde_json::to_string(&listing).unwrap(),
            expected_requests,
        );

        self.keep(mock);
    }

    /// Create a mock HTTP endpoint for a type record at `/type/{name}/`.
    pub fn create_type_endpoint(&mut self, detail: &TypeDetail, expected_requests: usize) {
        let path = format!("/type/{}/", detail.name);
        let mock = self.json_endpoint(
            &path,
            serde_json::to_string(detail).unwrap(),
            expected_requests,
        );

        self.keep(mock);
    }

    /// Create the type list and one type endpoint per record, each expected once.
    pub fn create_type_chart_endpoints(&mut self, details: &[TypeDetail]) {
        let mut names: Vec<&str> = details.iter().map(|d| d.name.as_str()).collect();
        names.extend(["unknown", "shadow"]);

        self.create_type_list_endpoint(&names, 1);
        for detail in details {
            self.create_type_endpoint(detail, 1);
        }
    }

    /// Create a mock HTTP endpoint that responds to `GET {path}` with an empty body and `status`.
    pub fn create_status_endpoint(&mut self, path: &str, status: usize, expected_requests: usize) {
        let mock = self
            .setup
            .server
            .mock("GET", path)
            .with_status(status)
            .expect(expected_requests)
            .create();

        self.keep(mock);
    }

    /// Create a mock HTTP endpoint that rate limits `GET {path}` with a zero `Retry-After`.
    pub fn create_rate_limited_endpoint(&mut self, path: &str, expected_requests: usize) {
        let mock = self
            .rate_limited(path, expected_requests)
            .with_header("retry-after", &TEST_RETRY_AFTER_SECS.to_string())
            .create();

        self.keep(mock);
    }

    /// Create a mock HTTP endpoint that rate limits `GET {path}` without any `Retry-After`.
    pub fn create_rate_limited_endpoint_without_retry_after(
        &mut self,
        path: &str,
        expected_requests: usize,
    ) {
        let mock = self.rate_limited(path, expected_requests).create();

        self.keep(mock);
    }

    fn rate_limited(&mut self, path: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(429)
            .expect(expected_requests)
    }

    /// Create a mock HTTP endpoint returning a body that isn't the expected JSON.
    pub fn create_malformed_endpoint(&mut self, path: &str, expected_requests: usize) {
        let mock = self.json_endpoint(path, "{\"oops\": true}".to_string(), expected_requests);

        self.keep(mock);
    }
}
