// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Typed property values and their coercion rules.
//!
//! Each value module owns the normalization performed at property set-time:
//! literal parsing, sign handling, and fixed-point rendering. The property
//! handlers in [`crate::property`] delegate here and never re-implement a
//! coercion inline.

mod duration;
mod geo;
mod status;

pub use duration::{DurationParts, ValueDuration};
pub use geo::ValueGeo;
pub use status::ValueRequestStatus;
