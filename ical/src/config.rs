// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Per-calendar options consulted by the property handlers.

/// Options controlling property storage and emission.
///
/// Every component carries one of these. The two recognized options mirror
/// the calendar-level settings of RFC 5545 producers:
///
/// - `allow_empty`: whether a property may be set to an empty value, and
///   whether such a property is still emitted as a bare content line.
/// - `language`: default language tag injected into text-bearing properties
///   that lack an explicit `LANGUAGE` parameter at emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Whether empty-valued properties are accepted and emitted bare.
    pub allow_empty: bool,

    /// Default language tag for text-bearing properties.
    pub language: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            allow_empty: true,
            language: None,
        }
    }
}

impl CalendarConfig {
    /// Create a config with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allow-empty option.
    #[must_use]
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Set the default language tag.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
