// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Alarm Component Properties (RFC 5545 Section 3.8.6)
//!
//! - 3.8.6.2: `Repeat` - Repeat count (non-negative, zero distinct from
//!   unset)

use crate::config::CalendarConfig;
use crate::error::PropertyError;
use crate::keyword::KW_REPEAT;
use crate::parameter::Parameters;
use crate::property::PropertyHandler;
use crate::property::store::Single;

/// Alarm repeat count (REPEAT).
#[derive(Debug, Clone, Default)]
pub struct Repeat {
    store: Single<i64>,
}

impl Repeat {
    /// Set the repeat count.
    ///
    /// # Errors
    /// Fails on a negative count, or on `None` when the calendar disallows
    /// empty properties.
    pub fn set(
        &mut self,
        value: Option<i64>,
        params: Parameters,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        match value {
            None => self.store.set_empty(config, KW_REPEAT),
            Some(v) => {
                if v < 0 {
                    return Err(PropertyError::InvalidValue {
                        property: KW_REPEAT,
                        value: v.to_string(),
                    });
                }
                self.store.set(v, params);
                Ok(())
            }
        }
    }

    /// The stored repeat count.
    #[must_use]
    pub fn get(&self) -> Option<i64> {
        self.store.get().copied()
    }

    /// The stored repeat count with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(i64, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (*v, p))
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

impl PropertyHandler for Repeat {
    fn name(&self) -> &'static str {
        KW_REPEAT
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        self.store
            .create(KW_REPEAT, config, |v, p| (p.render(), v.to_string()))
    }
}
