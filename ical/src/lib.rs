// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Build, validate and serialize iCalendar (RFC 5545) component properties.
//!
//! This crate is the builder-side complement to an iCalendar parser: typed
//! property values are stored per component, coerced and validated at
//! set-time, and re-emitted as folded content lines. The timezone module
//! resolves symbolic names, UTC synonyms, and numeric offsets to concrete
//! timezones backed by the host database.
//!
//! # Example
//!
//! ```
//! use calbuild_ical::{Parameters, VEvent};
//!
//! let mut event = VEvent::new();
//! event
//!     .set_class(Some("private"), Parameters::new())?
//!     .set_priority(Some(5), Parameters::new())?
//!     .set_location(Some("Conference Room 1"), Parameters::new())?;
//!
//! assert_eq!(event.class(), Some("PRIVATE"));
//! assert_eq!(event.create_priority(), "PRIORITY:5\r\n");
//! # Ok::<(), calbuild_ical::PropertyError>(())
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::must_use_candidate,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

pub mod component;
pub mod config;
pub mod error;
pub mod formatter;
pub mod keyword;
pub mod parameter;
pub mod property;
pub mod timezone;
pub mod value;

pub use crate::component::{
    ComponentKind, VAlarm, VEvent, VFreeBusy, VJournal, VTimeZone, VTodo,
};
pub use crate::config::CalendarConfig;
pub use crate::error::{PropertyError, TimeZoneError};
pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter};
pub use crate::parameter::Parameters;
pub use crate::property::{
    Class, Comment, Conference, DtStart, Duration, DurationInput, Geo, Location, Priority,
    PropertyHandler, Repeat, RequestStatus, Status, Uri,
};
pub use crate::value::{DurationParts, ValueDuration, ValueGeo, ValueRequestStatus};
