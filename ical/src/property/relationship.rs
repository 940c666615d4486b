// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Relationship Component Properties (RFC 5545 Section 3.8.4)
//!
//! - 3.8.4.6: `Uri` - URI-valued property, shared by URL (3.8.4.6) and
//!   TZURL (3.8.3.5)

use crate::config::CalendarConfig;
use crate::error::PropertyError;
use crate::parameter::Parameters;
use crate::property::PropertyHandler;
use crate::property::store::Single;
use crate::property::util::assign_url;

/// A URI-valued singleton property.
///
/// One handler type serves every URI property; the emitted name is fixed
/// at construction. Validation is shared through the URL-assignment
/// routine.
#[derive(Debug, Clone)]
pub struct Uri {
    name: &'static str,
    store: Single<String>,
}

impl Uri {
    /// Create a handler emitting under `name` (e.g. `URL`, `TZURL`).
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            store: Single::default(),
        }
    }

    /// Set the URI value.
    ///
    /// # Errors
    /// Fails on a value that is not URI-shaped, or on an empty value when
    /// the calendar disallows empty properties.
    pub fn set(
        &mut self,
        value: Option<&str>,
        params: Parameters,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        match value.filter(|v| !v.is_empty()) {
            None => self.store.set_empty(config, self.name),
            Some(v) => assign_url(&mut self.store, v, params, self.name),
        }
    }

    /// The stored URI.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.store.get().map(String::as_str)
    }

    /// The stored URI with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(&str, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (v.as_str(), p))
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

impl PropertyHandler for Uri {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        // URI values are emitted unescaped per RFC 5545.
        self.store
            .create(self.name, config, |v, p| (p.render(), v.clone()))
    }
}
