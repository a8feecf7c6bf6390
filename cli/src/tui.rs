// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod component;
mod component_calendar;
mod component_confirm;
mod component_page;
mod component_slots;
mod composer_editor;
mod composer_store;
mod dispatcher;

pub use app::pick_datetime;
