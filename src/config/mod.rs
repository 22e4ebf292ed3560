//! Run configuration.
//!
//! Options come from command-line flags, each of which falls back to a `WORTHY_*` environment
//! variable (a `.env` file is loaded first by the binary). [`Config::from_cli`] validates the raw
//! flags and splits them into the plain values the analysis consumes.

pub mod curation;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::error::config::ConfigError;

pub use curation::Curation;

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_MIN_BST: u32 = 525;
pub const DEFAULT_LISTING_LIMIT: u32 = 4000;

pub const TYPE_CHART_FILENAME: &str = "type_chart.json";
pub const POKEMON_DETAILS_CACHE: &str = "pokemon_details.json";
pub const SPECIES_INFO_CACHE: &str = "species_info.json";

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "worthy",
    about = "Analyze Pokémon based on stats and type advantages"
)]
pub struct Cli {
    /// Include mega evolutions, regional forms, and other variants
    #[arg(long, env = "WORTHY_INCLUDE_FORMS")]
    pub include_forms: bool,

    /// Minimum base stat total
    #[arg(long, env = "WORTHY_MIN_BST", default_value_t = DEFAULT_MIN_BST)]
    pub min_bst: u32,

    /// Ignore cached data and refresh from API
    #[arg(long, env = "WORTHY_REFRESH_CACHE")]
    pub refresh_cache: bool,

    /// Directory holding the JSON lookup caches
    #[arg(long, env = "WORTHY_CACHE_DIR", default_value = ".")]
    pub cache_dir: PathBuf,

    /// CSV output path (defaults to pokemon_analysis[_with_forms].csv)
    #[arg(long, env = "WORTHY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// PokeAPI base URL
    #[arg(long, env = "WORTHY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// JSON file overriding the curated name lists
    #[arg(long, env = "WORTHY_CURATION")]
    pub curation: Option<PathBuf>,

    /// Number of catalog entries to request in the listing call
    #[arg(long = "limit", env = "WORTHY_LIMIT", default_value_t = DEFAULT_LISTING_LIMIT)]
    pub listing_limit: u32,
}

/// Options that change which Pokémon make it into the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub include_forms: bool,
    pub min_bst: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_forms: false,
            min_bst: DEFAULT_MIN_BST,
        }
    }
}

/// Retry behaviour for a single catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up.
    pub max_attempts: u32,
    /// Flat delay between attempts (milliseconds). Rate limits without a
    /// Retry-After header wait twice this.
    pub delay_ms: u64,
}

impl RetryPolicy {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_DELAY_MS: u64 = 1000;

    /// Get retry delay as Duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay_ms: Self::DEFAULT_DELAY_MS,
        }
    }
}

/// Pauses inserted to stay under the catalog's rate limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pacing {
    /// Cool down after every this many accepted results.
    pub cooldown_every: usize,
    /// Cooldown length (milliseconds).
    pub cooldown_ms: u64,
    /// Pause between type requests while building the type chart (milliseconds).
    pub type_request_pause_ms: u64,
}

impl Pacing {
    /// No pauses at all, for tests against a mock catalog.
    pub fn none() -> Self {
        Self {
            cooldown_every: 20,
            cooldown_ms: 0,
            type_request_pause_ms: 0,
        }
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn type_request_pause(&self) -> Duration {
        Duration::from_millis(self.type_request_pause_ms)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            cooldown_every: 20,
            cooldown_ms: 500,
            type_request_pause_ms: 100,
        }
    }
}

/// Locations of the three persisted lookup caches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheFiles {
    pub type_chart: PathBuf,
    pub details: PathBuf,
    pub species: PathBuf,
}

impl CacheFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            type_chart: dir.join(TYPE_CHART_FILENAME),
            details: dir.join(POKEMON_DETAILS_CACHE),
            species: dir.join(SPECIES_INFO_CACHE),
        }
    }
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub refresh_cache: bool,
    pub cache_files: CacheFiles,
    pub output: PathBuf,
    pub api_url: String,
    pub listing_limit: u32,
    pub curation: Curation,
    pub retry: RetryPolicy,
    pub pacing: Pacing,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if !(cli.api_url.starts_with("http://") || cli.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                option: "api-url".to_string(),
                reason: format!("{:?} is not an http(s) URL", cli.api_url),
            });
        }

        if cli.listing_limit == 0 {
            return Err(ConfigError::InvalidValue {
                option: "limit".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let curation = match &cli.curation {
            Some(path) => Curation::from_file(path)?,
            None => Curation::default(),
        };

        let output = cli
            .output
            .unwrap_or_else(|| PathBuf::from(default_output_name(cli.include_forms)));

        Ok(Self {
            analysis: AnalysisConfig {
                include_forms: cli.include_forms,
                min_bst: cli.min_bst,
            },
            refresh_cache: cli.refresh_cache,
            cache_files: CacheFiles::in_dir(&cli.cache_dir),
            output,
            api_url: cli.api_url.trim_end_matches('/').to_string(),
            listing_limit: cli.listing_limit,
            curation,
            retry: RetryPolicy::default(),
            pacing: Pacing::default(),
        })
    }
}

/// `pokemon_analysis.csv`, or `pokemon_analysis_with_forms.csv` when forms are included.
pub fn default_output_name(include_forms: bool) -> String {
    let forms_text = if include_forms { "_with_forms" } else { "" };
    format!("pokemon_analysis{forms_text}.csv")
}
