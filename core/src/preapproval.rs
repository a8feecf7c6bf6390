// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{ComposedTimestamp, Identity};

/// Body of a pre-approval request, as posted to the visitor API.
///
/// Timestamps serialize as ISO-8601 text with their UTC offset. Checking that the window makes
/// sense is left to the server.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PreApprovalRequest {
    pub visitor_id: i64,
    pub employee_id: i64,
    pub valid_from: ComposedTimestamp,
    pub valid_to: ComposedTimestamp,
    pub max_visits_per_day: u32,
}

impl PreApprovalRequest {
    pub const DEFAULT_MAX_VISITS_PER_DAY: u32 = 5;

    /// Creates a request on behalf of `identity`.
    pub fn new(
        identity: &Identity,
        visitor_id: i64,
        valid_from: ComposedTimestamp,
        valid_to: ComposedTimestamp,
    ) -> Self {
        Self {
            visitor_id,
            employee_id: identity.employee_id,
            valid_from,
            valid_to,
            max_visits_per_day: Self::DEFAULT_MAX_VISITS_PER_DAY,
        }
    }

    pub fn with_max_visits_per_day(mut self, max: u32) -> Self {
        self.max_visits_per_day = max;
        self
    }
}
