// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Descriptive Component Properties (RFC 5545 Section 3.8.1)
//!
//! - 3.8.1.3: `Class` - Access classification (PUBLIC, PRIVATE, CONFIDENTIAL)
//! - 3.8.1.4: `Comment` - Non-processing comments (multi-valued)
//! - 3.8.1.6: `Geo` - Geographic position (latitude/longitude)
//! - 3.8.1.7: `Location` - Venue location
//! - 3.8.1.9: `Priority` - Priority level (0-9, zero distinct from unset)
//! - 3.8.1.11: `Status` - Component status, allowed set keyed by the
//!   enclosing component kind

use crate::component::ComponentKind;
use crate::config::CalendarConfig;
use crate::error::PropertyError;
use crate::formatter::escape_text;
use crate::keyword::{
    KW_CLASS, KW_COMMENT, KW_GEO, KW_LOCATION, KW_PRIORITY, KW_STATUS, KW_STATUS_CANCELLED,
    KW_STATUS_COMPLETED, KW_STATUS_CONFIRMED, KW_STATUS_DRAFT, KW_STATUS_FINAL,
    KW_STATUS_IN_PROCESS, KW_STATUS_NEEDS_ACTION, KW_STATUS_TENTATIVE,
};
use crate::parameter::Parameters;
use crate::property::PropertyHandler;
use crate::property::store::{Multi, Single, Slot};
use crate::property::util::trim_trailing_newlines;
use crate::value::ValueGeo;

/// Filter out `None` and `Some("")`, the two empty input forms.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Access classification (CLASS).
///
/// Values are uppercased at storage; the three standard literals and any
/// extension token are accepted.
#[derive(Debug, Clone, Default)]
pub struct Class {
    store: Single<String>,
}

impl Class {
    /// Set the classification.
    ///
    /// # Errors
    /// Fails when the value is empty and the calendar disallows empty
    /// properties.
    pub fn set(
        &mut self,
        value: Option<&str>,
        params: Parameters,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        match non_empty(value) {
            None => self.store.set_empty(config, KW_CLASS),
            Some(v) => {
                let v = trim_trailing_newlines(v).to_ascii_uppercase();
                self.store.set(v, params);
                Ok(())
            }
        }
    }

    /// The stored classification.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.store.get().map(String::as_str)
    }

    /// The stored classification with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(&str, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (v.as_str(), p))
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

impl PropertyHandler for Class {
    fn name(&self) -> &'static str {
        KW_CLASS
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        self.store
            .create(KW_CLASS, config, |v, p| (p.render(), v.clone()))
    }
}

/// Non-processing comment (COMMENT), multi-valued.
#[derive(Debug, Clone, Default)]
pub struct Comment {
    store: Multi<String>,
}

impl Comment {
    /// Append or replace a comment entry.
    ///
    /// # Errors
    /// Fails on an empty value when the calendar disallows empty
    /// properties, or on an index past the next position.
    pub fn set(
        &mut self,
        value: Option<&str>,
        params: Parameters,
        index: Option<usize>,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        let slot = match non_empty(value) {
            None => {
                if !config.allow_empty {
                    return Err(PropertyError::EmptyValueNotAllowed {
                        property: KW_COMMENT,
                    });
                }
                Slot::Empty
            }
            Some(v) => Slot::Set {
                value: trim_trailing_newlines(v).to_string(),
                params,
            },
        };
        self.store.set(slot, index, KW_COMMENT)
    }

    /// The comment at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.store.get(index).map(String::as_str)
    }

    /// The comment at `index` with its parameters.
    #[must_use]
    pub fn get_with_params(&self, index: usize) -> Option<(&str, &Parameters)> {
        self.store.get_with_params(index).map(|(v, p)| (v.as_str(), p))
    }

    /// All comments in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<&str> {
        self.store.get_all().into_iter().map(String::as_str).collect()
    }

    /// Remove the comment at `index`, or clear all comments.
    pub fn delete(&mut self, index: Option<usize>) -> bool {
        self.store.delete(index)
    }
}

impl PropertyHandler for Comment {
    fn name(&self) -> &'static str {
        KW_COMMENT
    }

    fn is_set(&self) -> bool {
        !self.store.is_empty()
    }

    fn clear(&mut self) -> bool {
        self.store.delete(None)
    }

    fn create(&self, config: &CalendarConfig) -> String {
        let language = config.language.as_deref();
        self.store.create(KW_COMMENT, config, |v, p| {
            (p.render_with_language(language), escape_text(v))
        })
    }
}

/// Geographic position (GEO).
#[derive(Debug, Clone, Default)]
pub struct Geo {
    store: Single<ValueGeo>,
}

impl Geo {
    /// Set the coordinate pair.
    ///
    /// Absence of either coordinate routes to the empty-value rule.
    ///
    /// # Errors
    /// Fails when a coordinate is missing and the calendar disallows empty
    /// properties.
    pub fn set(
        &mut self,
        latitude: Option<f64>,
        longitude: Option<f64>,
        params: Parameters,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => {
                self.store.set(ValueGeo::new(latitude, longitude), params);
                Ok(())
            }
            _ => self.store.set_empty(config, KW_GEO),
        }
    }

    /// The stored coordinate pair.
    #[must_use]
    pub fn get(&self) -> Option<ValueGeo> {
        self.store.get().copied()
    }

    /// The stored coordinate pair with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(ValueGeo, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (*v, p))
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

impl PropertyHandler for Geo {
    fn name(&self) -> &'static str {
        KW_GEO
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        self.store
            .create(KW_GEO, config, |v, p| (p.render(), v.to_string()))
    }
}

/// Venue location (LOCATION).
#[derive(Debug, Clone, Default)]
pub struct Location {
    store: Single<String>,
}

impl Location {
    /// Set the location text.
    ///
    /// # Errors
    /// Fails when the value is empty and the calendar disallows empty
    /// properties.
    pub fn set(
        &mut self,
        value: Option<&str>,
        params: Parameters,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        match non_empty(value) {
            None => self.store.set_empty(config, KW_LOCATION),
            Some(v) => {
                self.store.set(trim_trailing_newlines(v).to_string(), params);
                Ok(())
            }
        }
    }

    /// The stored location text.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.store.get().map(String::as_str)
    }

    /// The stored location text with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(&str, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (v.as_str(), p))
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

impl PropertyHandler for Location {
    fn name(&self) -> &'static str {
        KW_LOCATION
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        let language = config.language.as_deref();
        self.store.create(KW_LOCATION, config, |v, p| {
            (p.render_with_language(language), escape_text(v))
        })
    }
}

/// Priority level (PRIORITY), 0 through 9.
///
/// Zero is a valid explicit value, distinct from unset.
#[derive(Debug, Clone, Default)]
pub struct Priority {
    store: Single<i64>,
}

impl Priority {
    const MIN: i64 = 0;
    const MAX: i64 = 9;

    /// Set the priority.
    ///
    /// # Errors
    /// Fails on a value outside `0..=9`, or on `None` when the calendar
    /// disallows empty properties.
    pub fn set(
        &mut self,
        value: Option<i64>,
        params: Parameters,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        match value {
            None => self.store.set_empty(config, KW_PRIORITY),
            Some(v) => {
                if !(Self::MIN..=Self::MAX).contains(&v) {
                    return Err(PropertyError::OutOfRange {
                        property: KW_PRIORITY,
                        value: v,
                        min: Self::MIN,
                        max: Self::MAX,
                    });
                }
                self.store.set(v, params);
                Ok(())
            }
        }
    }

    /// The stored priority.
    #[must_use]
    pub fn get(&self) -> Option<i64> {
        self.store.get().copied()
    }

    /// The stored priority with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(i64, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (*v, p))
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

impl PropertyHandler for Priority {
    fn name(&self) -> &'static str {
        KW_PRIORITY
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        self.store
            .create(KW_PRIORITY, config, |v, p| (p.render(), v.to_string()))
    }
}

/// Component status (STATUS).
///
/// The allowed set depends on the enclosing component kind; kinds other
/// than Event, Todo and Journal store the uppercased value unvalidated.
#[derive(Debug, Clone, Default)]
pub struct Status {
    store: Single<String>,
}

const ALLOWED_VEVENT: [&str; 3] = [
    KW_STATUS_CONFIRMED,
    KW_STATUS_CANCELLED,
    KW_STATUS_TENTATIVE,
];
const ALLOWED_VTODO: [&str; 4] = [
    KW_STATUS_COMPLETED,
    KW_STATUS_CANCELLED,
    KW_STATUS_IN_PROCESS,
    KW_STATUS_NEEDS_ACTION,
];
const ALLOWED_VJOURNAL: [&str; 3] = [KW_STATUS_CANCELLED, KW_STATUS_DRAFT, KW_STATUS_FINAL];

impl Status {
    /// Set the status, validated against the allowed set for `kind`.
    ///
    /// # Errors
    /// Fails when the value is outside the allowed set for the enclosing
    /// component kind, or empty while the calendar disallows empty
    /// properties.
    pub fn set(
        &mut self,
        value: Option<&str>,
        params: Parameters,
        kind: ComponentKind,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        let value = non_empty(value).map(|v| trim_trailing_newlines(v).to_ascii_uppercase());
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return self.store.set_empty(config, KW_STATUS);
        };

        let allowed: Option<&[&str]> = match kind {
            ComponentKind::Event => Some(&ALLOWED_VEVENT),
            ComponentKind::Todo => Some(&ALLOWED_VTODO),
            ComponentKind::Journal => Some(&ALLOWED_VJOURNAL),
            _ => None,
        };
        if let Some(allowed) = allowed {
            if !allowed.contains(&value.as_str()) {
                return Err(PropertyError::InvalidEnumeration {
                    property: KW_STATUS,
                    value,
                    kind,
                });
            }
        }
        self.store.set(value, params);
        Ok(())
    }

    /// The stored status.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.store.get().map(String::as_str)
    }

    /// The stored status with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(&str, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (v.as_str(), p))
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

impl PropertyHandler for Status {
    fn name(&self) -> &'static str {
        KW_STATUS
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        self.store
            .create(KW_STATUS, config, |v, p| (p.render(), v.clone()))
    }
}
