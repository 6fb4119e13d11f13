// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary state directories with auto-cleanup

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_day_invariants, assert_spans};
#[allow(unused_imports)]
pub use fixtures::{FailingStore, range, test_config, test_settings};
#[allow(unused_imports)]
pub use temp_dir::{TempState, setup_temp_state};
