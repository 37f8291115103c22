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

//! Error types for fixture lookup.

use thiserror::Error;

/// Errors raised by the fixture catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// No fixture is registered under this name.
    #[error("unknown fixture '{name}' (available: {available})")]
    UnknownFixture {
        /// Name that was requested.
        name: String,
        /// Comma-separated list of registered names.
        available: String,
    },
}
