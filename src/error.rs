// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading documents and configuration.
//!
//! Matching, widget transitions and the results page cannot fail. Only the
//! loaders that turn bytes on disk into an index or a config return these.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a [`DocumentIndex`](crate::DocumentIndex).
#[derive(Debug, Error)]
pub enum IndexError {
    /// A document had a blank title.
    #[error("document {position} has an empty title")]
    EmptyTitle {
        /// Position of the offending document in the input list.
        position: usize,
    },
    /// A document had a blank href.
    #[error("document {position} ({title:?}) has an empty href")]
    EmptyHref {
        /// Position of the offending document in the input list.
        position: usize,
        /// Title of the document, to make the report findable.
        title: String,
    },
    /// Input was not a JSON array of documents.
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure to load a [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained a value the widget cannot work with.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
