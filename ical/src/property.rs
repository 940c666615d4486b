// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Property handlers organized by RFC 5545 sections.
//!
//! Each property is a small struct-with-methods bundle owning its storage
//! and coercion rule; component types compose named instances of these.
//!
//! ## Property Organization
//!
//! - 3.8.1. Descriptive Component Properties (descriptive.rs)
//! - 3.8.2. Date and Time Properties (datetime.rs)
//! - 3.8.4. Relationship Component Properties (relationship.rs)
//! - 3.8.6. Alarm Component Properties (alarm.rs)
//! - 3.8.8. Miscellaneous Properties (miscellaneous.rs)
//!
//! The contract, uniform across properties:
//!
//! - `set` coerces and validates, then stores; empty input is only stored
//!   when the calendar allows empty properties. A failed set leaves the
//!   stored state untouched.
//! - `get` returns `None` (or an empty sequence) for an unset property,
//!   never an error.
//! - `create` renders zero or more content lines through the formatter.
//! - `delete` clears to absent.

mod alarm;
mod datetime;
mod descriptive;
mod miscellaneous;
mod relationship;
pub(crate) mod store;
mod util;

pub use alarm::Repeat;
pub use datetime::{DtStart, Duration, DurationInput};
pub use descriptive::{Class, Comment, Geo, Location, Priority, Status};
pub use miscellaneous::{Conference, RequestStatus};
pub use relationship::Uri;
pub use store::{Multi, Single, Slot};

use crate::config::CalendarConfig;

/// Uniform capability surface of a property handler.
///
/// Components aggregate their handlers behind this trait for whole-component
/// emission and introspection; the typed accessors stay on the concrete
/// handler types.
pub trait PropertyHandler {
    /// The property name as emitted (e.g. `STATUS`).
    fn name(&self) -> &'static str;

    /// Whether any value (including the explicit empty value) is stored.
    fn is_set(&self) -> bool;

    /// Clear all stored state; returns whether anything was stored for
    /// multi-valued properties, true unconditionally for singletons.
    fn clear(&mut self) -> bool;

    /// Emit the stored state as content-line text.
    fn create(&self, config: &CalendarConfig) -> String;
}
