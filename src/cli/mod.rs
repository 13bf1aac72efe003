// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Four subcommands: `search` runs the navigation-bar matcher, `results`
//! renders the results page, `inspect` validates a document list, and
//! `replay` drives a search box through scripted key presses.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sitesearch::datasets::Dataset;
use sitesearch::Key;

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Documentation search for the Gemini CLI All in One site",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where documents and settings come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Compiled-in document list (default depends on the command)
    #[arg(long, value_enum, conflicts_with = "docs")]
    pub dataset: Option<Dataset>,

    /// JSON file with an array of {title, description, category, href}
    #[arg(long)]
    pub docs: Option<PathBuf>,

    /// JSON settings file (minQueryChars, maxResults, resultsPath, ...)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what the search box dropdown shows for a query
    Search {
        query: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Print the dropdown view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the results page for a query (or a /search?q= URL with --url)
    Results {
        query: String,

        /// Treat QUERY as a URL and read its q parameter
        #[arg(long)]
        url: bool,

        #[command(flatten)]
        source: SourceArgs,

        /// Print the page view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a document list and compare the compiled-in lists
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Type a query into a search box, press keys, and show each step
    Replay {
        query: String,

        /// Comma-separated keys: down, up, enter, esc
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<Key>,

        /// Click this row after the key presses
        #[arg(long)]
        click: Option<usize>,

        #[command(flatten)]
        source: SourceArgs,
    },
}
