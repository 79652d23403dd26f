// SPDX-License-Identifier: MPL-2.0
//! User interface components for the notification surface.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toast`] - Toast cards and the bottom-right overlay

pub mod design_tokens;
pub mod toast;
