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

//! Fixture counting utilities.
//!
//! Functions for counting tokens in a fixture so consumer tests can state
//! their expectations without re-deriving them by hand.

use subject_core::TestSubject;

/// Count all tokens, duplicates and empty tokens included.
pub fn count_tokens(subject: &TestSubject) -> usize {
    subject.string_iterable().len()
}

/// Count distinct tokens (the size of the self-keyed map).
pub fn count_distinct(subject: &TestSubject) -> usize {
    subject.string_map().len()
}

/// Count empty tokens produced by adjacent, leading or trailing spaces.
pub fn count_empty_tokens(subject: &TestSubject) -> usize {
    subject.string_iterable().filter(|t| t.is_empty()).count()
}

/// Count tokens longer than `max_chars` characters.
///
/// Length is measured in `char`s, not bytes.
pub fn count_tokens_longer_than(subject: &TestSubject, max_chars: usize) -> usize {
    subject
        .string_iterable()
        .filter(|t| t.chars().count() > max_chars)
        .count()
}

/// Count tokens that repeat an earlier token.
pub fn count_duplicate_tokens(subject: &TestSubject) -> usize {
    count_tokens(subject) - count_distinct(subject)
}
