// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Property storage: one slot per singleton property, an ordered sequence
//! per multi-valued property.
//!
//! Absence, explicit emptiness, and a stored value are three distinct
//! states. An empty-valued property never carries parameters; whether it
//! may be stored (and whether it is emitted as a bare line) is governed by
//! the calendar's allow-empty option. A failed set never alters the
//! previously stored state.

use crate::config::CalendarConfig;
use crate::error::PropertyError;
use crate::formatter::content_line;
use crate::parameter::Parameters;

/// Storage for a singleton property.
#[derive(Debug, Clone, PartialEq)]
pub enum Single<V> {
    /// No value has been set.
    Absent,
    /// Explicitly set to empty; emitted as a bare line when allowed.
    Empty,
    /// A stored value with its parameters.
    Set {
        /// The coerced value.
        value: V,
        /// Normalized parameters.
        params: Parameters,
    },
}

impl<V> Default for Single<V> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<V> Single<V> {
    /// The stored value, if any.
    pub fn get(&self) -> Option<&V> {
        match self {
            Self::Set { value, .. } => Some(value),
            Self::Absent | Self::Empty => None,
        }
    }

    /// The stored value together with its parameters, if any.
    pub fn get_with_params(&self) -> Option<(&V, &Parameters)> {
        match self {
            Self::Set { value, params } => Some((value, params)),
            Self::Absent | Self::Empty => None,
        }
    }

    /// Whether a value (including the explicit empty value) is stored.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Store a coerced value with normalized parameters.
    pub fn set(&mut self, value: V, params: Parameters) {
        *self = Self::Set { value, params };
    }

    /// Store the explicit empty value.
    ///
    /// # Errors
    /// Fails with [`PropertyError::EmptyValueNotAllowed`] unless the
    /// calendar allows empty properties; the previous state is kept.
    pub fn set_empty(
        &mut self,
        config: &CalendarConfig,
        property: &'static str,
    ) -> Result<(), PropertyError> {
        if !config.allow_empty {
            return Err(PropertyError::EmptyValueNotAllowed { property });
        }
        *self = Self::Empty;
        Ok(())
    }

    /// Clear to absent. Always returns true.
    pub fn delete(&mut self) -> bool {
        *self = Self::Absent;
        true
    }

    /// Emit the property as content-line text.
    ///
    /// Absent yields the empty string; Empty yields a bare `NAME:` line
    /// when the calendar allows empty properties, the empty string
    /// otherwise; a stored value is rendered by `render`, which returns
    /// the parameter chain and value text.
    pub fn create(
        &self,
        name: &str,
        config: &CalendarConfig,
        render: impl FnOnce(&V, &Parameters) -> (String, String),
    ) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Empty => {
                if config.allow_empty {
                    content_line(name, "", "")
                } else {
                    String::new()
                }
            }
            Self::Set { value, params } => {
                let (params_text, value_text) = render(value, params);
                content_line(name, &params_text, &value_text)
            }
        }
    }
}

/// One entry of a multi-valued property.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<V> {
    /// Explicitly set to empty.
    Empty,
    /// A stored value with its parameters.
    Set {
        /// The coerced value.
        value: V,
        /// Normalized parameters.
        params: Parameters,
    },
}

impl<V> Slot<V> {
    fn value(&self) -> Option<&V> {
        match self {
            Self::Set { value, .. } => Some(value),
            Self::Empty => None,
        }
    }

    fn value_with_params(&self) -> Option<(&V, &Parameters)> {
        match self {
            Self::Set { value, params } => Some((value, params)),
            Self::Empty => None,
        }
    }
}

/// Storage for a multi-valued property: an insertion-ordered sequence of
/// entries, re-emitted in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Multi<V> {
    entries: Vec<Slot<V>>,
}

impl<V> Default for Multi<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Multi<V> {
    /// Number of stored entries (empty entries included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value at `index`, if present and non-empty.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.entries.get(index).and_then(Slot::value)
    }

    /// The value and parameters at `index`, if present and non-empty.
    pub fn get_with_params(&self, index: usize) -> Option<(&V, &Parameters)> {
        self.entries.get(index).and_then(Slot::value_with_params)
    }

    /// All non-empty values in insertion order.
    pub fn get_all(&self) -> Vec<&V> {
        self.entries.iter().filter_map(Slot::value).collect()
    }

    /// All non-empty values with their parameters, in insertion order.
    pub fn get_all_with_params(&self) -> Vec<(&V, &Parameters)> {
        self.entries
            .iter()
            .filter_map(Slot::value_with_params)
            .collect()
    }

    /// Append or replace an entry.
    ///
    /// With no index the entry is appended. An index referencing an
    /// existing entry replaces it; an index equal to the current length
    /// appends.
    ///
    /// # Errors
    /// Fails with [`PropertyError::IndexOutOfBounds`] for an index past
    /// the next position; the stored sequence is unchanged.
    pub fn set(
        &mut self,
        slot: Slot<V>,
        index: Option<usize>,
        property: &'static str,
    ) -> Result<(), PropertyError> {
        match index {
            None => self.entries.push(slot),
            Some(i) if i < self.entries.len() => self.entries[i] = slot,
            Some(i) if i == self.entries.len() => self.entries.push(slot),
            Some(i) => {
                return Err(PropertyError::IndexOutOfBounds {
                    property,
                    index: i,
                    len: self.entries.len(),
                });
            }
        }
        Ok(())
    }

    /// Remove one entry, or clear the whole sequence.
    ///
    /// With no index the sequence is cleared; returns false when it was
    /// already empty. With an index, removes that entry only; returns
    /// false for an out-of-range index.
    pub fn delete(&mut self, index: Option<usize>) -> bool {
        match index {
            None => {
                if self.entries.is_empty() {
                    return false;
                }
                self.entries.clear();
                true
            }
            Some(i) => {
                if i < self.entries.len() {
                    self.entries.remove(i);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Emit one content line per entry, in insertion order.
    ///
    /// Empty entries are emitted bare when the calendar allows empty
    /// properties and skipped otherwise.
    pub fn create(
        &self,
        name: &str,
        config: &CalendarConfig,
        render: impl Fn(&V, &Parameters) -> (String, String),
    ) -> String {
        let mut output = String::new();
        for entry in &self.entries {
            match entry {
                Slot::Empty => {
                    if config.allow_empty {
                        output.push_str(&content_line(name, "", ""));
                    }
                }
                Slot::Set { value, params } => {
                    let (params_text, value_text) = render(value, params);
                    output.push_str(&content_line(name, &params_text, &value_text));
                }
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_plain(value: &String, params: &Parameters) -> (String, String) {
        (params.render(), value.clone())
    }

    #[test]
    fn single_lifecycle() {
        let config = CalendarConfig::default();
        let mut slot: Single<String> = Single::default();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
        assert_eq!(slot.create("X-NOTE", &config, render_plain), "");

        slot.set("hello".to_string(), Parameters::new());
        assert_eq!(slot.get().map(String::as_str), Some("hello"));
        assert_eq!(
            slot.create("X-NOTE", &config, render_plain),
            "X-NOTE:hello\r\n"
        );

        assert!(slot.delete());
        assert!(!slot.is_set());
        assert!(slot.delete());
    }

    #[test]
    fn single_empty_gated_by_allow_empty() {
        let strict = CalendarConfig::default().allow_empty(false);
        let mut slot: Single<String> = Single::default();
        assert!(matches!(
            slot.set_empty(&strict, "X-NOTE"),
            Err(PropertyError::EmptyValueNotAllowed { property: "X-NOTE" })
        ));
        assert!(!slot.is_set());

        let lax = CalendarConfig::default();
        slot.set_empty(&lax, "X-NOTE").unwrap();
        assert!(slot.is_set());
        assert_eq!(slot.get(), None);
        assert_eq!(slot.create("X-NOTE", &lax, render_plain), "X-NOTE:\r\n");
    }

    #[test]
    fn multi_append_replace_and_bounds() {
        let mut multi: Multi<String> = Multi::default();
        let entry = |s: &str| Slot::Set {
            value: s.to_string(),
            params: Parameters::new(),
        };

        multi.set(entry("a"), None, "COMMENT").unwrap();
        multi.set(entry("b"), Some(1), "COMMENT").unwrap();
        multi.set(entry("c"), Some(0), "COMMENT").unwrap();
        assert_eq!(multi.get_all(), [&"c".to_string(), &"b".to_string()]);

        let err = multi.set(entry("d"), Some(5), "COMMENT");
        assert!(matches!(
            err,
            Err(PropertyError::IndexOutOfBounds {
                index: 5,
                len: 2,
                ..
            })
        ));
        assert_eq!(multi.len(), 2);
    }

    #[test]
    fn multi_delete_semantics() {
        let mut multi: Multi<String> = Multi::default();
        assert!(!multi.delete(None));

        let entry = |s: &str| Slot::Set {
            value: s.to_string(),
            params: Parameters::new(),
        };
        multi.set(entry("a"), None, "COMMENT").unwrap();
        multi.set(entry("b"), None, "COMMENT").unwrap();

        assert!(multi.delete(Some(0)));
        assert_eq!(multi.get_all(), [&"b".to_string()]);
        assert!(!multi.delete(Some(7)));
        assert!(multi.delete(None));
        assert!(multi.is_empty());
    }
}
