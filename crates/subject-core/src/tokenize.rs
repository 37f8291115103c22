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

//! Space tokenization.
//!
//! Sentences are split on every U+0020 and nothing else. Runs of spaces
//! produce empty tokens, as do leading and trailing spaces. Tabs, newlines
//! and no-break spaces stay inside their token.

/// The only separator recognized by [`tokenize`].
pub const SEPARATOR: char = ' ';

/// Split `seed` on every [`SEPARATOR`], preserving empty tokens.
///
/// The result always has at least one element; the empty string yields
/// a single empty token.
///
/// # Examples
///
/// ```
/// use subject_core::tokenize;
///
/// assert_eq!(tokenize("a  b"), ["a", "", "b"]);
/// assert_eq!(tokenize(""), [""]);
/// assert_eq!(tokenize(" x "), ["", "x", ""]);
/// ```
pub fn tokenize(seed: &str) -> Vec<String> {
    seed.split(SEPARATOR).map(String::from).collect()
}

/// Inverse of [`tokenize`]: joins tokens with a single [`SEPARATOR`].
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.as_ref().len() + 1).sum());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(token.as_ref());
    }
    out
}
