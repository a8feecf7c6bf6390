// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Fixture composers in a fixed time zone
//! - A recording emitter to inspect what was reported

mod fixtures;
mod recorder;

#[allow(unused_imports)]
pub use fixtures::{TEST_OFFSET_HOURS, slot, test_composer, test_time_zone};
pub use recorder::Recorder;
