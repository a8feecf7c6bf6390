// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! DateTimeComposer integration tests.

mod channel;
mod confirm;
mod live;
mod slots;
