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

//! Named sentence fixtures covering each tokenization case.

use subject_core::TestSubject;

/// Seed of [`padded`].
pub const PADDED_SEED: &str = " padded sentence ";

/// Seed of [`mixed_whitespace`].
pub const MIXED_WHITESPACE_SEED: &str = "tab\tseparated line\nbreak";

/// Seed of [`unicode`].
pub const UNICODE_SEED: &str = "naïve café\u{00A0}crème 日本語";

/// The default sentence.
///
/// Tests: repeated words, single-letter tokens, long tokens.
pub fn default_sentence() -> TestSubject {
    TestSubject::new()
}

/// A single word with no separator.
pub fn single_token() -> TestSubject {
    TestSubject::from_seed("hello")
}

/// The empty seed, which yields one empty token.
pub fn empty() -> TestSubject {
    TestSubject::from_seed("")
}

/// Two words separated by two spaces.
///
/// Tests: an empty token between the words.
pub fn double_space() -> TestSubject {
    TestSubject::from_seed("a  b")
}

/// The same word three times.
///
/// Tests: duplicate map keys collapse to one entry.
pub fn duplicates() -> TestSubject {
    TestSubject::from_seed("x x x")
}

/// Leading and trailing spaces.
pub fn padded() -> TestSubject {
    TestSubject::from_seed(PADDED_SEED)
}

/// Tabs and newlines, which must stay inside their tokens.
pub fn mixed_whitespace() -> TestSubject {
    TestSubject::from_seed(MIXED_WHITESPACE_SEED)
}

/// Non-ASCII tokens and a no-break space that must not split.
pub fn unicode() -> TestSubject {
    TestSubject::from_seed(UNICODE_SEED)
}
