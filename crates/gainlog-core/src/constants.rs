// ABOUTME: Wire-level constants shared by the GainLog client crates
// ABOUTME: Storage keys, endpoint paths, login routes and list defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

/// Keys used for durable session storage
pub mod storage_keys {
    /// Key holding the raw auth token
    pub const TOKEN: &str = "GainLogToken";

    /// Key holding the JSON-encoded user profile
    pub const USER: &str = "user";
}

/// Relative API resource paths
pub mod endpoints {
    /// Workout collection
    pub const WORKOUTS: &str = "workouts";

    /// Exercise reference data
    pub const EXERCISES: &str = "exercises";

    /// Token verification
    pub const AUTH_VERIFY: &str = "auth/verify";
}

/// Client-side navigation targets
pub mod routes {
    /// Plain login view
    pub const LOGIN: &str = "/login";

    /// Login view flagged as a session expiry
    pub const LOGIN_EXPIRED: &str = "/login?expired=true";
}

/// HTTP header values
pub mod headers {
    /// Content type sent with every request
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// List size defaults
pub mod defaults {
    /// Number of workouts loaded by the cache's recent view
    pub const RECENT_WORKOUTS_LIMIT: u32 = 5;

    /// Number of workouts requested by the service's `limit` endpoint
    pub const RECENT_ENDPOINT_LIMIT: u32 = 6;
}

/// Substring of a 401 error message that marks an expired token
pub const EXPIRED_TOKEN_MARKER: &str = "expired";
