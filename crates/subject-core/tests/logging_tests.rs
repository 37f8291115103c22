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

//! Construction and snapshot decoding under an installed subscriber.

use subject_core::TestSubject;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing for tests.
fn init_tracing() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_target(true)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_construction_with_subscriber() {
    init_tracing();

    let subject = TestSubject::from_seed("traced subject");
    assert_eq!(subject.token_count(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_snapshot_rejection_with_subscriber() {
    init_tracing();

    let result = subject_core::from_json(r#"{"seed":"a","tokens":["b"]}"#);
    assert!(matches!(
        result,
        Err(subject_core::SubjectError::Inconsistent { .. })
    ));
}
