// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Entry point for composer tests.
//!
//! Covers the reporting contract of both emission modes through the public API.

mod common;
mod composer;
