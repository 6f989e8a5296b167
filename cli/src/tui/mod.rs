// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod component;
mod component_form;
mod component_page;
mod date_field;
mod dispatcher;
mod event_editor;
mod event_store;
mod keymap;
mod time_field;
mod widgets;

pub use app::draft_event;
pub use event_store::{EventData, EventDraft, EventStore};
