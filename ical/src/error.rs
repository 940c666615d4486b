// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for property mutation and timezone resolution.
//!
//! Absence of a property is never an error: getters return `Option` (or an
//! empty sequence for multi-valued properties). Invalid input to a setter is
//! always an error, carrying the property name and the offending value. A
//! failed set leaves the previously stored property untouched.

use crate::component::ComponentKind;

/// Error raised by a property setter on invalid input.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    /// An empty value was given but the calendar does not allow empty
    /// properties.
    #[error("empty value not allowed for {property}")]
    EmptyValueNotAllowed {
        /// Property name.
        property: &'static str,
    },

    /// The value failed the property's coercion rule.
    #[error("invalid {property} value: {value}")]
    InvalidValue {
        /// Property name.
        property: &'static str,
        /// The offending value, rendered for diagnostics.
        value: String,
    },

    /// An integer value fell outside the property's permitted range.
    #[error("{property} value {value} outside range {min}..={max}")]
    OutOfRange {
        /// Property name.
        property: &'static str,
        /// The offending value.
        value: i64,
        /// Lower bound, inclusive.
        min: i64,
        /// Upper bound, inclusive.
        max: i64,
    },

    /// An enumeration value is not in the allowed set for the enclosing
    /// component kind.
    #[error("invalid {property} value {value} for {kind}")]
    InvalidEnumeration {
        /// Property name.
        property: &'static str,
        /// The offending value.
        value: String,
        /// The enclosing component kind whose allowed set was consulted.
        kind: ComponentKind,
    },

    /// A multi-value index referenced neither an existing entry nor the
    /// next position.
    #[error("{property} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// Property name.
        property: &'static str,
        /// The offending index.
        index: usize,
        /// Current number of stored entries.
        len: usize,
    },

    /// A date/time value carried an unresolvable timezone or offset.
    #[error(transparent)]
    TimeZone(#[from] TimeZoneError),
}

/// Error raised by the timezone offset resolver.
#[derive(Debug, thiserror::Error)]
pub enum TimeZoneError {
    /// The string is neither a known zone name, a UTC synonym, nor a
    /// resolvable offset.
    #[error("invalid timezone '{value}'")]
    InvalidTimeZone {
        /// The original input string.
        value: String,
        /// Underlying timezone database failure.
        #[source]
        source: jiff::Error,
    },

    /// No zone in the host timezone database matches the offset.
    #[error("offset '{offset}' ({seconds} seconds) does not match any timezone")]
    NoZoneForOffset {
        /// The offset literal as given.
        offset: String,
        /// The offset converted to seconds.
        seconds: i32,
    },
}
