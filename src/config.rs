//! Indexer settings: command-line values layered over the site generator's
//! own config file, layered over built-in defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::IndexerError;

pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_SECTION: &str = "docs";

/// The subset of the site config the indexer reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteFile {
    #[serde(rename = "baseURL", alias = "baseurl")]
    pub base_url: Option<String>,
    pub params: SiteParams,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteParams {
    #[serde(rename = "documentationSections", alias = "documentationsections")]
    pub documentation_sections: Option<Vec<String>>,
}

impl SiteFile {
    /// Parse a site config file. `.yaml`/`.yml` read as YAML, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, IndexerError> {
        let raw = fs::read_to_string(path).map_err(|source| IndexerError::Read { path: path.to_path_buf(), source })?;
        let is_yaml = path.extension().is_some_and(|e| e == "yaml" || e == "yml");
        let parsed = if is_yaml {
            serde_yaml::from_str(&raw).map_err(|e| e.to_string())
        } else {
            toml::from_str(&raw).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| IndexerError::SiteConfig { path: path.to_path_buf(), message })
    }
}

/// Values supplied on the command line (or through the environment).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub site_config: Option<PathBuf>,
    pub sections: Vec<String>,
    pub base_url: Option<String>,
}

/// Resolved settings for one build.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexerConfig {
    pub base_url: String,
    pub sections: Vec<String>,
}

impl IndexerConfig {
    /// Resolve settings. Explicit overrides win over the site file, which wins
    /// over defaults. An empty section list counts as unset.
    pub fn resolve(overrides: Overrides) -> Result<Self, IndexerError> {
        let site = match &overrides.site_config {
            Some(path) => {
                let site = SiteFile::load(path)?;
                tracing::debug!(path = %path.display(), "loaded site config");
                site
            }
            None => SiteFile::default(),
        };
        Ok(Self::merge(overrides, site))
    }

    fn merge(overrides: Overrides, site: SiteFile) -> Self {
        let base_url = overrides
            .base_url
            .or(site.base_url)
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        let sections = Some(overrides.sections)
            .filter(|s| !s.is_empty())
            .or(site.params.documentation_sections.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| vec![DEFAULT_SECTION.to_owned()]);

        Self { base_url, sections }
    }
}
