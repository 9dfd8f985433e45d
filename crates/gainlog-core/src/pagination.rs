// ABOUTME: Page-number pagination types for workout listings
// ABOUTME: Query parameter encoding and server-provided pagination metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use serde::{Deserialize, Serialize};

use crate::models::Workout;

/// Pagination metadata returned with every workout listing
///
/// Always replaced wholesale from the latest response, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// 1-based page number of this response
    pub current_page: u32,
    /// Page size used by the server
    pub per_page: u32,
    /// Total number of workouts
    pub total_count: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Whether a following page exists
    pub has_next_page: bool,
    /// Whether a preceding page exists
    pub has_prev_page: bool,
}

/// Page selection for list requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page to fetch (1-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Select a page with an explicit size
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Encode as `page=..&per_page=..`, omitting absent and zero values
    ///
    /// Returns an empty string when nothing is set.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut pairs = Vec::with_capacity(2);
        if let Some(page) = self.page.filter(|&p| p > 0) {
            pairs.push(format!("page={page}"));
        }
        if let Some(per_page) = self.per_page.filter(|&p| p > 0) {
            pairs.push(format!("per_page={per_page}"));
        }
        pairs.join("&")
    }

    /// Append the query string to a resource path
    #[must_use]
    pub fn apply_to(&self, path: &str) -> String {
        let query = self.query_string();
        if query.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{query}")
        }
    }
}

/// Body of the workout list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedWorkouts {
    /// Workouts on this page, in server order
    pub workouts: Vec<Workout>,
    /// Paging state for this response
    pub pagination: PaginationMeta,
}
