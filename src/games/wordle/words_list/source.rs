use std::{fmt::Display, path::PathBuf, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Layout of a word list file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// One word per line.
    #[default]
    Plain,
    /// Hunspell `.dic`: a word count on the first line, then entries that
    /// may carry `/` affix flags.
    Hunspell,
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new("^[a-zç]+$").expect("hard-coded regex should be valid"))
}

impl SourceFormat {
    pub fn parse(self, text: &str) -> impl Iterator<Item = String> + '_ {
        let skip = match self {
            Self::Plain => 0,
            Self::Hunspell => 1,
        };

        text.lines().skip(skip).filter_map(|line| {
            let raw = line.trim();
            if raw.is_empty() {
                return None;
            }

            let word = raw.split('/').next().unwrap_or(raw).to_lowercase();
            token_regex().is_match(&word).then_some(word)
        })
    }
}

/// Where a word list lives: a remote `http(s)` URL or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Url(Url),
    Path(PathBuf),
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map_or_else(|()| Self::Path(PathBuf::from(value)), Self::Path),
            _ => Self::Path(PathBuf::from(value)),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub location: String,
    #[serde(default)]
    pub format: SourceFormat,
}

impl Source {
    pub fn new(location: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            location: location.into(),
            format,
        }
    }

    pub fn location(&self) -> Location {
        Location::from(self.location.as_str())
    }

    /// The bundled plain list, then the public Catalan Hunspell dictionary.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("words-ca.txt", SourceFormat::Plain),
            Self::new(
                "https://raw.githubusercontent.com/wooorm/dictionaries/main/dictionaries/ca/index.dic",
                SourceFormat::Hunspell,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::{Location, Source, SourceFormat};

    #[test]
    fn plain_lists_keep_every_line() {
        let text = "avet\r\n  Golafres \n\nl'avi\ncaça\nNIÑO\n";
        let words: Vec<String> = SourceFormat::Plain.parse(text).collect();

        assert_eq!(words, vec!["avet", "golafres", "caça"]);
    }

    #[test]
    fn hunspell_skips_count_and_affixes() {
        let text = "4\navet/S\ntreballador/FMS\nabans\n3r/X\n";
        let words: Vec<String> = SourceFormat::Hunspell.parse(text).collect();

        assert_eq!(words, vec!["avet", "treballador", "abans"]);
    }

    #[test]
    fn hunspell_header_is_skipped_even_if_it_looks_like_a_word() {
        let words: Vec<String> = SourceFormat::Hunspell.parse("casa\ngat").collect();
        assert_eq!(words, vec!["gat"]);
    }

    #[test]
    fn locations() {
        assert!(matches!(
            Source::defaults()[1].location(),
            Location::Url(url) if url.host_str() == Some("raw.githubusercontent.com")
        ));
        assert_eq!(
            Source::defaults()[0].location(),
            Location::Path(PathBuf::from("words-ca.txt"))
        );
        assert_eq!(
            Location::from("file:///tmp/words.txt"),
            Location::Path(PathBuf::from("/tmp/words.txt"))
        );
    }
}
