// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// The employee acting at the desk.
///
/// Passed explicitly to whatever needs it, never looked up from global state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Identity {
    /// Employee id as known to the visitor API.
    pub employee_id: i64,

    /// Login name of the employee, if known.
    #[serde(default)]
    pub subject: Option<String>,
}

impl Identity {
    pub fn new(employee_id: i64) -> Self {
        Self {
            employee_id,
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: impl ToString) -> Self {
        self.subject = Some(subject.to_string());
        self
    }
}
