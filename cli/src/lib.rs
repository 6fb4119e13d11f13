// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of slotwise: edit a weekly availability and preview bookable slots.

mod cli;
mod cmd_generate_completion;
mod cmd_preview;
mod cmd_schedule;
mod cmd_settings;
mod config;
mod range_formatter;
mod slot_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
