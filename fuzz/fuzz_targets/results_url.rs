// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for results-page URL handling.
//!
//! Any string a user can type must survive the trip into a `/search?q=` link
//! and back out of it unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::{query_from_url, results_href, RESULTS_PATH};

fuzz_target!(|query: String| {
    let href = results_href(RESULTS_PATH, &query);
    assert!(href.starts_with("/search?q="));
    assert_eq!(query_from_url(&href).as_deref(), Some(query.as_str()));
});
