//! Test fixtures for the mock catalog.
//!
//! - `pokeapi` - Catalog records (Pokémon, species, types, listings) and the mock endpoints
//!   serving them

pub mod pokeapi;
