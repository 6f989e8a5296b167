// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// The dispatcher shared by the form components and the store.
pub type Dispatcher = spinform_core::Dispatcher<Action>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    UpdateSummary(String),
    UpdateDate(String),
    UpdateStart(String),
    UpdateEnd(String),
    SubmitChanges,
}
