// Subject - Tokenized sentence fixtures for validation test suites
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canonical sentence fixtures.
//!
//! This module provides fixtures organized by category:
//!
//! - **sentences**: one named constructor per tokenization case
//! - **scenarios**: expected tokens and key counts for each named fixture
//! - **builders**: builder pattern for customizable fixtures

pub mod builders;
mod scenarios;
mod sentences;

pub use scenarios::*;
pub use sentences::*;

use crate::error::FixtureError;
use crate::FixtureList;
use subject_core::TestSubject;
use tracing::debug;

/// Returns all fixture functions for iteration.
///
/// Useful for running the same test across all fixtures.
pub fn all() -> FixtureList {
    vec![
        ("default_sentence", default_sentence),
        ("single_token", single_token),
        ("empty", empty),
        ("double_space", double_space),
        ("duplicates", duplicates),
        ("padded", padded),
        ("mixed_whitespace", mixed_whitespace),
        ("unicode", unicode),
    ]
}

/// Looks up a fixture by name and builds it.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownFixture`] if no fixture has that name.
pub fn by_name(name: &str) -> Result<TestSubject, FixtureError> {
    let fixtures = all();
    match fixtures.iter().find(|(n, _)| *n == name) {
        Some((_, fixture_fn)) => {
            debug!(fixture = name, "building named fixture");
            Ok(fixture_fn())
        }
        None => {
            let available = fixtures
                .iter()
                .map(|(n, _)| *n)
                .collect::<Vec<_>>()
                .join(", ");
            debug!(fixture = name, "unknown fixture requested");
            Err(FixtureError::UnknownFixture {
                name: name.to_string(),
                available,
            })
        }
    }
}
