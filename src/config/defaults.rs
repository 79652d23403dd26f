// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Visibility**: How many toasts are shown at once
//! - **Auto-dismiss**: Per-kind display durations
//! - **Confirm**: Delay before a confirm continuation runs
//! - **Diagnostics**: Lifecycle event buffer sizing

// ==========================================================================
// Visibility Defaults
// ==========================================================================

/// Default number of notifications visible at once. Others are queued.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Minimum number of visible notifications.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum number of visible notifications.
pub const MAX_MAX_VISIBLE: usize = 10;

// ==========================================================================
// Auto-dismiss Defaults
// ==========================================================================

/// Default display duration for success notifications (in milliseconds).
pub const DEFAULT_SUCCESS_TIMEOUT_MS: u64 = 3_000;

/// Default display duration for info notifications (in milliseconds).
pub const DEFAULT_INFO_TIMEOUT_MS: u64 = 3_000;

/// Default display duration for warning notifications (in milliseconds).
pub const DEFAULT_WARNING_TIMEOUT_MS: u64 = 5_000;

/// Shortest accepted auto-dismiss duration (in milliseconds).
pub const MIN_TIMEOUT_MS: u64 = 500;

/// Longest accepted auto-dismiss duration (in milliseconds).
pub const MAX_TIMEOUT_MS: u64 = 60_000;

// ==========================================================================
// Confirm Defaults
// ==========================================================================

/// Delay before a confirm continuation runs (in milliseconds).
pub const DEFAULT_CONFIRM_DELAY_MS: u64 = 2_000;

/// Minimum confirm delay (in milliseconds).
pub const MIN_CONFIRM_DELAY_MS: u64 = 0;

/// Maximum confirm delay (in milliseconds).
pub const MAX_CONFIRM_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Capacity of the channel between diagnostics handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_VISIBLE > 0);
    assert!(MAX_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);

    assert!(MIN_TIMEOUT_MS > 0);
    assert!(MAX_TIMEOUT_MS >= MIN_TIMEOUT_MS);
    assert!(DEFAULT_SUCCESS_TIMEOUT_MS >= MIN_TIMEOUT_MS);
    assert!(DEFAULT_SUCCESS_TIMEOUT_MS <= MAX_TIMEOUT_MS);
    assert!(DEFAULT_INFO_TIMEOUT_MS >= MIN_TIMEOUT_MS);
    assert!(DEFAULT_INFO_TIMEOUT_MS <= MAX_TIMEOUT_MS);
    assert!(DEFAULT_WARNING_TIMEOUT_MS >= MIN_TIMEOUT_MS);
    assert!(DEFAULT_WARNING_TIMEOUT_MS <= MAX_TIMEOUT_MS);

    assert!(MAX_CONFIRM_DELAY_MS >= MIN_CONFIRM_DELAY_MS);
    assert!(DEFAULT_CONFIRM_DELAY_MS >= MIN_CONFIRM_DELAY_MS);
    assert!(DEFAULT_CONFIRM_DELAY_MS <= MAX_CONFIRM_DELAY_MS);

    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DIAGNOSTICS_CHANNEL_CAPACITY > 0);
};
