use std::{path::Path, time::Duration};

use ::config::{builder::DefaultState, ConfigBuilder, Environment, File, FileFormat};
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::games::wordle::{
    game::DEFAULT_ROUND_DELAY,
    words_list::Source,
    RoundConfig, Rounds, RoundsError,
};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "endevina.toml";

/// Variables like `ENDEVINA_ROUND_DELAY_MS` override the file. Nested keys
/// use `__`, as in `ENDEVINA_DICTIONARY__SOURCES`.
pub const ENV_PREFIX: &str = "ENDEVINA";

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub round_delay_ms: u64,
    pub share_title: String,
    pub flavor_texts: Vec<String>,
    pub dictionary: DictionaryConfig,
    pub rounds: Vec<RoundConfig>,
    pub reveal_order: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            round_delay_ms: DEFAULT_ROUND_DELAY.as_millis() as u64,
            share_title: "Endevina on visc".to_owned(),
            flavor_texts: Vec::new(),
            dictionary: DictionaryConfig::default(),
            rounds: Rounds::classic_config(),
            reveal_order: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    pub sources: Vec<Source>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            sources: Source::defaults(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(::config::ConfigError),

    #[error("invalid rounds: {0}")]
    Rounds(#[from] RoundsError),
}

impl Config {
    /// Reads `path` (which must exist), or [`DEFAULT_CONFIG_FILE`] if it is
    /// there, then applies environment overrides.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        Self::build(
            ::config::Config::builder().add_source(file.format(FileFormat::Toml)),
            Self::environment(),
        )
    }

    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Self::build(
            ::config::Config::builder().add_source(File::from_str(text, FileFormat::Toml)),
            Self::environment(),
        )
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn build(
        builder: ConfigBuilder<DefaultState>,
        environment: Environment,
    ) -> Result<Self, Error> {
        let config: Self = builder
            .add_source(environment)
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        config.rounds()?;
        Ok(config)
    }

    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }

    pub fn rounds(&self) -> Result<Rounds, RoundsError> {
        Rounds::new(self.rounds.iter().cloned(), self.reveal_order.clone())
    }

    pub fn flavor_text(&self) -> Option<&str> {
        let flavor_text = self
            .flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(String::as_str);

        if flavor_text.is_none() {
            debug!("no flavor texts provided in config");
        }

        flavor_text
    }
}
