// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two compiled-in document lists.
//!
//! The navigation bar and hero search boxes use [`navbar`]. The results page
//! uses [`results_page`]. The lists overlap but are maintained separately, so
//! the same query can find different pages in each place. [`divergence`]
//! reports the hrefs present in only one of them.
//!
//! Each call builds a fresh index; nothing here is a shared global.

use clap::ValueEnum;

use crate::types::{DocumentIndex, SearchableDocument};

/// (title, description, category, href)
type Seed = (&'static str, &'static str, &'static str, &'static str);

const NAVBAR: &[Seed] = &[
    (
        "How to install Gemini CLI on Windows",
        "Node.js, npm and PowerShell setup for Windows 10 and 11",
        "Installation",
        "/qa/install-windows",
    ),
    (
        "How to install Gemini CLI on macOS",
        "Homebrew and npm installation with PATH fixes",
        "Installation",
        "/qa/install-macos",
    ),
    (
        "How to install Gemini CLI on Linux",
        "Global npm install and permission setup",
        "Installation",
        "/qa/install-linux",
    ),
    (
        "Authenticating with your Google account",
        "Log in with OAuth, an API key or Vertex AI",
        "Getting Started",
        "/qa/authentication",
    ),
    (
        "What are the free tier limits?",
        "Requests per minute and per day for personal accounts",
        "Usage",
        "/qa/free-tier-limits",
    ),
    (
        "Configuring MCP servers",
        "Connect external tools through settings.json",
        "Configuration",
        "/tutorials/mcp-servers",
    ),
    (
        "Writing a GEMINI.md context file",
        "Give the model project instructions and memory",
        "Configuration",
        "/tutorials/gemini-md",
    ),
    (
        "Built-in slash commands",
        "/help, /chat, /memory, /stats and friends",
        "Reference",
        "/tutorials/slash-commands",
    ),
    (
        "Running shell commands safely",
        "Sandboxing, confirmations and YOLO mode",
        "Security",
        "/tutorials/shell-commands",
    ),
    (
        "Fixing quota exceeded (429) errors",
        "Why rate limits trigger and how to wait them out",
        "Troubleshooting",
        "/troubleshooting/quota-exceeded",
    ),
    (
        "Fixing authentication failures",
        "Expired tokens, wrong project and proxy issues",
        "Troubleshooting",
        "/troubleshooting/auth-failures",
    ),
    (
        "Changelog",
        "What changed in each Gemini CLI release",
        "Updates",
        "/changelog",
    ),
    (
        "Awesome resources",
        "Extensions, prompts and community projects",
        "Resources",
        "/resources",
    ),
];

const RESULTS_PAGE: &[Seed] = &[
    (
        "How to install Gemini CLI on Windows",
        "Node.js, npm and PowerShell setup for Windows 10 and 11",
        "Installation",
        "/qa/install-windows",
    ),
    (
        "How to install Gemini CLI on macOS",
        "Homebrew and npm installation with PATH fixes",
        "Installation",
        "/qa/install-macos",
    ),
    (
        "How to install Gemini CLI on Linux",
        "Global npm install and permission setup",
        "Installation",
        "/qa/install-linux",
    ),
    (
        "Updating to the latest version",
        "npm update, npx and nightly builds",
        "Installation",
        "/qa/update",
    ),
    (
        "Authenticating with your Google account",
        "Log in with OAuth, an API key or Vertex AI",
        "Getting Started",
        "/qa/authentication",
    ),
    (
        "Your first session",
        "Ask a question, edit a file, run a command",
        "Getting Started",
        "/tutorials/first-session",
    ),
    (
        "What are the free tier limits?",
        "Requests per minute and per day for personal accounts",
        "Usage",
        "/qa/free-tier-limits",
    ),
    (
        "Non-interactive mode and scripting",
        "Pipe prompts in with -p and use the output in scripts",
        "Usage",
        "/tutorials/non-interactive",
    ),
    (
        "Configuring MCP servers",
        "Connect external tools through settings.json",
        "Configuration",
        "/tutorials/mcp-servers",
    ),
    (
        "Writing a GEMINI.md context file",
        "Give the model project instructions and memory",
        "Configuration",
        "/tutorials/gemini-md",
    ),
    (
        "Choosing a model",
        "Switch between Pro and Flash with --model",
        "Configuration",
        "/qa/choosing-a-model",
    ),
    (
        "Running shell commands safely",
        "Sandboxing, confirmations and YOLO mode",
        "Security",
        "/tutorials/shell-commands",
    ),
    (
        "Fixing quota exceeded (429) errors",
        "Why rate limits trigger and how to wait them out",
        "Troubleshooting",
        "/troubleshooting/quota-exceeded",
    ),
    (
        "Fixing authentication failures",
        "Expired tokens, wrong project and proxy issues",
        "Troubleshooting",
        "/troubleshooting/auth-failures",
    ),
    (
        "Command not found after install",
        "Add the npm global bin directory to PATH",
        "Troubleshooting",
        "/troubleshooting/command-not-found",
    ),
];

/// Which compiled-in list to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    /// Navigation bar and hero search box
    Navbar,
    /// Dedicated results page
    ResultsPage,
}

impl Dataset {
    pub fn load(self) -> DocumentIndex {
        match self {
            Dataset::Navbar => navbar(),
            Dataset::ResultsPage => results_page(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Navbar => "navbar",
            Dataset::ResultsPage => "results-page",
        }
    }
}

pub fn navbar() -> DocumentIndex {
    from_seeds(NAVBAR)
}

pub fn results_page() -> DocumentIndex {
    from_seeds(RESULTS_PAGE)
}

fn from_seeds(seeds: &[Seed]) -> DocumentIndex {
    DocumentIndex::from_trusted(
        seeds
            .iter()
            .map(|&(title, description, category, href)| {
                SearchableDocument::new(title, description, category, href)
            })
            .collect(),
    )
}

/// Hrefs found in only one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Divergence {
    pub navbar_only: Vec<String>,
    pub results_page_only: Vec<String>,
    /// Same href, different title/description/category.
    pub mismatched: Vec<String>,
}

impl Divergence {
    pub fn is_empty(&self) -> bool {
        self.navbar_only.is_empty()
            && self.results_page_only.is_empty()
            && self.mismatched.is_empty()
    }
}

/// Compare two lists by href.
pub fn divergence(navbar: &DocumentIndex, results_page: &DocumentIndex) -> Divergence {
    let find = |index: &DocumentIndex, href: &str| {
        index.iter().find(|doc| doc.href == href).cloned()
    };

    let mut report = Divergence::default();
    for doc in navbar {
        match find(results_page, &doc.href) {
            None => report.navbar_only.push(doc.href.clone()),
            Some(other) if other != *doc => report.mismatched.push(doc.href.clone()),
            Some(_) => {}
        }
    }
    for doc in results_page {
        if find(navbar, &doc.href).is_none() {
            report.results_page_only.push(doc.href.clone());
        }
    }
    report
}
