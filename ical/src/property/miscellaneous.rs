// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Miscellaneous Component Properties (RFC 5545 Section 3.8.8, RFC 7986)
//!
//! - 3.8.8.3: `RequestStatus` - Structured scheduling status (multi-valued)
//! - RFC 7986 5.11: `Conference` - Conference access information
//!   (multi-valued, `VALUE=URI` required)

use crate::config::CalendarConfig;
use crate::error::PropertyError;
use crate::keyword::{KW_CONFERENCE, KW_REQUEST_STATUS, KW_URI};
use crate::parameter::Parameters;
use crate::property::PropertyHandler;
use crate::property::store::{Multi, Slot};
use crate::property::util::trim_trailing_newlines;
use crate::value::ValueRequestStatus;

/// Scheduling request status (REQUEST-STATUS), multi-valued.
#[derive(Debug, Clone, Default)]
pub struct RequestStatus {
    store: Multi<ValueRequestStatus>,
}

impl RequestStatus {
    /// Append or replace a request-status entry.
    ///
    /// A missing code or description routes to the empty-value rule; a
    /// present code must be a finite number and is re-rendered as fixed
    /// two-decimal text.
    ///
    /// # Errors
    /// Fails on a non-finite code, on an empty value when the calendar
    /// disallows empty properties, or on an index past the next position.
    pub fn set(
        &mut self,
        code: Option<f64>,
        description: Option<&str>,
        ext_data: Option<&str>,
        params: Parameters,
        index: Option<usize>,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        let description = description.filter(|d| !d.is_empty());
        let slot = match (code, description) {
            (Some(code), Some(description)) => {
                if !code.is_finite() {
                    return Err(PropertyError::InvalidValue {
                        property: KW_REQUEST_STATUS,
                        value: code.to_string(),
                    });
                }
                let ext_data = ext_data
                    .filter(|e| !e.is_empty())
                    .map(|e| trim_trailing_newlines(e).to_string());
                Slot::Set {
                    value: ValueRequestStatus::new(
                        code,
                        trim_trailing_newlines(description),
                        ext_data,
                    ),
                    params,
                }
            }
            _ => {
                if !config.allow_empty {
                    return Err(PropertyError::EmptyValueNotAllowed {
                        property: KW_REQUEST_STATUS,
                    });
                }
                Slot::Empty
            }
        };
        self.store.set(slot, index, KW_REQUEST_STATUS)
    }

    /// The entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ValueRequestStatus> {
        self.store.get(index)
    }

    /// The entry at `index` with its parameters.
    #[must_use]
    pub fn get_with_params(&self, index: usize) -> Option<(&ValueRequestStatus, &Parameters)> {
        self.store.get_with_params(index)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<&ValueRequestStatus> {
        self.store.get_all()
    }

    /// Remove the entry at `index`, or clear all entries.
    pub fn delete(&mut self, index: Option<usize>) -> bool {
        self.store.delete(index)
    }
}

impl PropertyHandler for RequestStatus {
    fn name(&self) -> &'static str {
        KW_REQUEST_STATUS
    }

    fn is_set(&self) -> bool {
        !self.store.is_empty()
    }

    fn clear(&mut self) -> bool {
        self.store.delete(None)
    }

    fn create(&self, config: &CalendarConfig) -> String {
        let language = config.language.as_deref();
        self.store.create(KW_REQUEST_STATUS, config, |v, p| {
            (p.render_with_language(language), v.render())
        })
    }
}

/// Conference access information (CONFERENCE), multi-valued.
///
/// The property grammar requires an explicit value type, so a `VALUE=URI`
/// hint is injected when absent.
#[derive(Debug, Clone, Default)]
pub struct Conference {
    store: Multi<String>,
}

impl Conference {
    /// Append or replace a conference entry.
    ///
    /// # Errors
    /// Fails on an empty value when the calendar disallows empty
    /// properties, or on an index past the next position.
    pub fn set(
        &mut self,
        value: Option<&str>,
        mut params: Parameters,
        index: Option<usize>,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        let slot = match value.filter(|v| !v.is_empty()) {
            None => {
                if !config.allow_empty {
                    return Err(PropertyError::EmptyValueNotAllowed {
                        property: KW_CONFERENCE,
                    });
                }
                Slot::Empty
            }
            Some(v) => {
                params.ensure_value_type(KW_URI);
                Slot::Set {
                    value: trim_trailing_newlines(v).to_string(),
                    params,
                }
            }
        };
        self.store.set(slot, index, KW_CONFERENCE)
    }

    /// The entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.store.get(index).map(String::as_str)
    }

    /// The entry at `index` with its parameters.
    #[must_use]
    pub fn get_with_params(&self, index: usize) -> Option<(&str, &Parameters)> {
        self.store.get_with_params(index).map(|(v, p)| (v.as_str(), p))
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<&str> {
        self.store.get_all().into_iter().map(String::as_str).collect()
    }

    /// Remove the entry at `index`, or clear all entries.
    pub fn delete(&mut self, index: Option<usize>) -> bool {
        self.store.delete(index)
    }
}

impl PropertyHandler for Conference {
    fn name(&self) -> &'static str {
        KW_CONFERENCE
    }

    fn is_set(&self) -> bool {
        !self.store.is_empty()
    }

    fn clear(&mut self) -> bool {
        self.store.delete(None)
    }

    fn create(&self, config: &CalendarConfig) -> String {
        let language = config.language.as_deref();
        self.store.create(KW_CONFERENCE, config, |v, p| {
            // URI values are emitted unescaped.
            (p.render_with_language(language), v.clone())
        })
    }
}
