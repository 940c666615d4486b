// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Property parameters (RFC 5545 Section 3.2).
//!
//! Parameter keys are case-normalized to upper case at insertion time, and
//! insertion order is preserved for emission. Property handlers inject a
//! `VALUE` type hint where their grammar requires one, and text-bearing
//! properties may receive a default `LANGUAGE` at emission time.

use std::fmt;

use crate::keyword::{KW_LANGUAGE, KW_VALUE};

/// An insertion-ordered set of property parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a parameter, case-folding the key to upper case.
    ///
    /// A parameter with the same (folded) key is replaced in place, keeping
    /// its original position.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        let key = key.as_ref().to_ascii_uppercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a parameter value by key (case-insensitive).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a parameter with the given key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove a parameter by key; returns whether one was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let key = key.to_ascii_uppercase();
        let before = self.entries.len();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.len() != before
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inject a `VALUE` type hint unless one is already present.
    ///
    /// Used by properties whose grammar requires an explicit value type
    /// (e.g. CONFERENCE requires `VALUE=URI`).
    pub fn ensure_value_type(&mut self, default: &str) {
        if !self.contains(KW_VALUE) {
            self.insert(KW_VALUE, default);
        }
    }

    /// Render as a `;KEY=value` chain for a content line.
    ///
    /// Values containing `:`, `;` or `,` are double-quoted per RFC 5545
    /// Section 3.2.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with_language(None)
    }

    /// Render with a default language tag.
    ///
    /// When `language` is `Some` and no `LANGUAGE` parameter is present, a
    /// `LANGUAGE` parameter is appended. The stored set is not modified.
    #[must_use]
    pub fn render_with_language(&self, language: Option<&str>) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            render_one(&mut out, key, value);
        }
        if let Some(lang) = language {
            if !self.contains(KW_LANGUAGE) {
                render_one(&mut out, KW_LANGUAGE, lang);
            }
        }
        out
    }
}

fn render_one(out: &mut String, key: &str, value: &str) {
    out.push(';');
    out.push_str(key);
    out.push('=');
    if needs_quoting(value) {
        out.push('"');
        out.push_str(value);
        out.push('"');
    } else {
        out.push_str(value);
    }
}

fn needs_quoting(value: &str) -> bool {
    !(value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
        && value.contains([':', ';', ','])
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Parameters {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}
