pub mod cache_dir;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use cache_dir::TestCacheDir;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::pokeapi::{data, factory},
        TestCacheDir, TestError, TestSetup,
    };
}
