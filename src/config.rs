// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search box and results page settings.
//!
//! Every field has a default, so an empty object (or no file at all) gives the
//! stock behaviour: open at two characters, show five rows, redirect to
//! `/search?q=...`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Minimum query length before the widget opens.
pub const MIN_QUERY_CHARS: usize = 2;

/// Maximum rows the widget shows.
pub const MAX_RESULTS: usize = 5;

/// Where Enter-without-selection sends the user.
pub const RESULTS_PATH: &str = "/search";

/// A browse link offered when the results page has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackLink {
    pub label: String,
    pub href: String,
}

impl FallbackLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub min_query_chars: usize,
    pub max_results: usize,
    pub results_path: String,
    pub placeholder: String,
    pub fallback_links: Vec<FallbackLink>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: MIN_QUERY_CHARS,
            max_results: MAX_RESULTS,
            results_path: RESULTS_PATH.to_string(),
            placeholder: "Search documentation...".to_string(),
            fallback_links: default_fallback_links(),
        }
    }
}

fn default_fallback_links() -> Vec<FallbackLink> {
    vec![
        FallbackLink::new("Browse Q&A", "/qa"),
        FallbackLink::new("Tutorials", "/tutorials"),
        FallbackLink::new("Troubleshooting", "/troubleshooting"),
    ]
}

impl SearchConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        debug!(path = %path.display(), ?config, "loaded search config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_query_chars == 0 {
            return Err(ConfigError::InvalidField {
                field: "minQueryChars",
                reason: "must be at least 1",
            });
        }
        if self.max_results == 0 {
            return Err(ConfigError::InvalidField {
                field: "maxResults",
                reason: "must be at least 1",
            });
        }
        if !self.results_path.starts_with('/') {
            return Err(ConfigError::InvalidField {
                field: "resultsPath",
                reason: "must be an absolute path",
            });
        }
        Ok(())
    }
}
