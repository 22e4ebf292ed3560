use crate::TestSetup;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn pokeapi<'a>(&'a mut self) -> PokeApiFixtures<'a> {
        PokeApiFixtures { setup: self }
    }
}

pub struct PokeApiFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
