// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line host of visitpass: terminal pickers and request drafting around the core composer.

mod cli;
mod cmd_generate_completion;
mod cmd_pick;
mod cmd_preapprove;
mod cmd_slots;
mod config;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
