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

//! Expected tokenization for every named fixture.

use subject_core::DEFAULT_SEED;

use super::sentences::{MIXED_WHITESPACE_SEED, PADDED_SEED, UNICODE_SEED};

/// A named fixture paired with what a consumer should observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Fixture name, as registered in [`all`](super::all).
    pub name: &'static str,
    /// Seed the fixture is built from.
    pub seed: &'static str,
    /// Expected `string_array`.
    pub tokens: Vec<&'static str>,
    /// Expected `string_map` size.
    pub distinct: usize,
}

impl Scenario {
    fn new(
        name: &'static str,
        seed: &'static str,
        tokens: Vec<&'static str>,
        distinct: usize,
    ) -> Self {
        Self {
            name,
            seed,
            tokens,
            distinct,
        }
    }
}

/// Returns the expected observations for every named fixture.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "default_sentence",
            DEFAULT_SEED,
            vec![
                "logic",
                "will",
                "get",
                "you",
                "from",
                "A",
                "to",
                "Z",
                "imagination",
                "will",
                "get",
                "you",
                "everywhere",
            ],
            10,
        ),
        Scenario::new("single_token", "hello", vec!["hello"], 1),
        Scenario::new("empty", "", vec![""], 1),
        Scenario::new("double_space", "a  b", vec!["a", "", "b"], 3),
        Scenario::new("duplicates", "x x x", vec!["x", "x", "x"], 1),
        Scenario::new("padded", PADDED_SEED, vec!["", "padded", "sentence", ""], 3),
        Scenario::new(
            "mixed_whitespace",
            MIXED_WHITESPACE_SEED,
            vec!["tab\tseparated", "line\nbreak"],
            2,
        ),
        Scenario::new(
            "unicode",
            UNICODE_SEED,
            vec!["naïve", "café\u{00A0}crème", "日本語"],
            3,
        ),
    ]
}
