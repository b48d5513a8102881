//! Loads JSON content tables and engine config from disk.
//!
//! A content directory may hold any of `phrases.json`, `tarot.json`,
//! `horoscope.json` and `bundles.json`. Missing files are skipped; the
//! engine substitutes defaults for them. Unreadable or malformed files are
//! errors.

use std::fs;
use std::path::{Path, PathBuf};

use saju_engine::{
    ContentTables, ElementBundleTable, FortuneConfig, HoroscopeTable, PhraseBank, TarotTable,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const PHRASES_FILE: &str = "phrases.json";
pub const TAROT_FILE: &str = "tarot.json";
pub const HOROSCOPE_FILE: &str = "horoscope.json";
pub const BUNDLES_FILE: &str = "bundles.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Option<T>, LoadError> {
    let path = dir.join(name);
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "content file not found; using defaults");
        return Ok(None);
    }
    let value = read_json(&path)?;
    tracing::debug!(path = %path.display(), "content file loaded");
    Ok(Some(value))
}

/// Load every table present in `dir`.
pub fn load_tables(dir: &Path) -> Result<ContentTables, LoadError> {
    Ok(ContentTables {
        phrases: read_optional::<PhraseBank>(dir, PHRASES_FILE)?,
        tarot: read_optional::<TarotTable>(dir, TAROT_FILE)?,
        horoscope: read_optional::<HoroscopeTable>(dir, HOROSCOPE_FILE)?,
        bundles: read_optional::<ElementBundleTable>(dir, BUNDLES_FILE)?,
    })
}

/// Load the engine config, or the default when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FortuneConfig, LoadError> {
    match path {
        Some(p) => read_json(p),
        None => Ok(FortuneConfig::default()),
    }
}
