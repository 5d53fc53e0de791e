use tracing::{debug, info, warn};

use super::{
    source::{Location, Source},
    ValidationMode, WordsList,
};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("could not read {location}: {source}")]
    Io {
        location: String,
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{location} answered with status {status}")]
    Status {
        location: String,
        status: reqwest::StatusCode,
    },

    #[error("{location} contained no usable words")]
    Empty { location: String },
}

/// Retrieves the raw text behind a [`Location`].
pub trait Fetch {
    async fn fetch(&self, location: &Location) -> Result<String, SourceError>;
}

/// Reads local files from disk and remote lists over HTTP.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Fetch for Fetcher {
    async fn fetch(&self, location: &Location) -> Result<String, SourceError> {
        match location {
            Location::Url(url) => {
                let response = self.client().get(url.clone()).send().await?;

                if !response.status().is_success() {
                    return Err(SourceError::Status {
                        location: location.to_string(),
                        status: response.status(),
                    });
                }

                Ok(response.text().await?)
            }
            Location::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        location: location.to_string(),
                        source,
                    })
            }
        }
    }
}

/// Result of trying every source in order.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub words: WordsList,
    pub loaded_from: Option<Source>,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        self.loaded_from.is_some()
    }

    /// Validation falls back to accepting anything when no source loaded.
    pub fn mode(&self) -> ValidationMode {
        if self.is_loaded() {
            ValidationMode::Dictionary
        } else {
            ValidationMode::AcceptAny
        }
    }
}

#[tracing::instrument(skip_all, fields(location = %source.location, format = ?source.format))]
async fn load_source(
    fetcher: &impl Fetch,
    source: &Source,
    words: &mut WordsList,
) -> Result<usize, SourceError> {
    let text = fetcher.fetch(&source.location()).await?;
    let added = words.extend_from_text(source.format, &text);

    debug!(added, total = words.len());

    if words.is_empty() {
        return Err(SourceError::Empty {
            location: source.location.clone(),
        });
    }

    Ok(added)
}

/// Tries each source in turn and stops at the first one that leaves the
/// list non-empty. Failures are logged and never fatal.
#[tracing::instrument(skip_all, fields(sources = sources.len()))]
pub async fn load(fetcher: &impl Fetch, sources: &[Source]) -> LoadOutcome {
    let mut words = WordsList::new();

    for source in sources {
        match load_source(fetcher, source, &mut words).await {
            Ok(added) => {
                info!(location = %source.location, added, "loaded dictionary");

                return LoadOutcome {
                    words,
                    loaded_from: Some(source.clone()),
                };
            }
            Err(err) => warn!(location = %source.location, "skipping dictionary source: {err}"),
        }
    }

    warn!("no dictionary source could be loaded, falling back to accepting any word");

    LoadOutcome {
        words,
        loaded_from: None,
    }
}
