// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Date and Time Component Properties (RFC 5545 Section 3.8.2)
//!
//! - 3.8.2.4: `DtStart` - Component start
//! - 3.8.2.5: `Duration` - Component duration

use jiff::civil;

use crate::config::CalendarConfig;
use crate::error::PropertyError;
use crate::keyword::{KW_DTSTART, KW_DURATION, KW_TZID};
use crate::parameter::Parameters;
use crate::property::PropertyHandler;
use crate::property::store::Single;
use crate::property::util::trim_trailing_newlines;
use crate::timezone::resolve_time_zone;
use crate::value::{DurationParts, ValueDuration};

/// Component start (DTSTART).
///
/// Stored as a civil date-time; an attached timezone travels in the `TZID`
/// parameter and is resolved against the host database at set-time.
#[derive(Debug, Clone, Default)]
pub struct DtStart {
    store: Single<civil::DateTime>,
}

impl DtStart {
    /// Set the start date-time.
    ///
    /// # Errors
    /// Fails on an unresolvable `TZID` parameter, or on `None` when the
    /// calendar disallows empty properties.
    pub fn set(
        &mut self,
        value: Option<civil::DateTime>,
        params: Parameters,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        match value {
            None => self.store.set_empty(config, KW_DTSTART),
            Some(v) => {
                if let Some(tzid) = params.get(KW_TZID) {
                    resolve_time_zone(tzid)?;
                }
                self.store.set(v, params);
                Ok(())
            }
        }
    }

    /// The stored start.
    #[must_use]
    pub fn get(&self) -> Option<civil::DateTime> {
        self.store.get().copied()
    }

    /// The stored start with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(civil::DateTime, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (*v, p))
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

fn format_civil(dt: civil::DateTime) -> String {
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

impl PropertyHandler for DtStart {
    fn name(&self) -> &'static str {
        KW_DTSTART
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        self.store
            .create(KW_DTSTART, config, |v, p| (p.render(), format_civil(*v)))
    }
}

/// Input forms accepted by [`Duration::set`].
#[derive(Debug, Clone, Copy)]
pub enum DurationInput<'a> {
    /// A pre-built duration value.
    Interval(ValueDuration),
    /// A duration literal such as `PT1H30M`; any sign prefix is stripped.
    Literal(&'a str),
    /// A structured parts record, possibly carrying the legacy inversion
    /// flag.
    Parts(DurationParts),
}

impl From<ValueDuration> for DurationInput<'_> {
    fn from(value: ValueDuration) -> Self {
        Self::Interval(value)
    }
}

impl<'a> From<&'a str> for DurationInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Literal(value)
    }
}

impl From<DurationParts> for DurationInput<'_> {
    fn from(value: DurationParts) -> Self {
        Self::Parts(value)
    }
}

/// Component duration (DURATION).
///
/// Durations are unsigned at storage; every accepted input form is
/// normalized through [`ValueDuration::conform`] or
/// [`ValueDuration::from_parts`].
#[derive(Debug, Clone, Default)]
pub struct Duration {
    store: Single<ValueDuration>,
}

impl Duration {
    /// Set the duration.
    ///
    /// # Errors
    /// Fails on an unparseable literal, or on `None` when the calendar
    /// disallows empty properties.
    pub fn set(
        &mut self,
        value: Option<DurationInput<'_>>,
        params: Parameters,
        config: &CalendarConfig,
    ) -> Result<(), PropertyError> {
        let duration = match value {
            None => return self.store.set_empty(config, KW_DURATION),
            Some(DurationInput::Interval(d)) => d.conform(),
            Some(DurationInput::Parts(parts)) => ValueDuration::from_parts(parts),
            Some(DurationInput::Literal(s)) => {
                let s = trim_trailing_newlines(s);
                // Sign prefix is stripped: a stored duration can only be
                // positive.
                let unsigned = s.trim_start_matches(['+', '-']);
                unsigned
                    .parse::<ValueDuration>()
                    .map_err(|_| PropertyError::InvalidValue {
                        property: KW_DURATION,
                        value: s.to_string(),
                    })?
                    .conform()
            }
        };
        self.store.set(duration, params);
        Ok(())
    }

    /// The stored duration.
    #[must_use]
    pub fn get(&self) -> Option<ValueDuration> {
        self.store.get().copied()
    }

    /// The stored duration with its parameters.
    #[must_use]
    pub fn get_with_params(&self) -> Option<(ValueDuration, &Parameters)> {
        self.store.get_with_params().map(|(v, p)| (*v, p))
    }

    /// The stored duration resolved against a component start.
    ///
    /// Returns the end date-time, or `None` when no duration is stored or
    /// the arithmetic overflows the civil range.
    #[must_use]
    pub fn end_for(&self, start: civil::DateTime) -> Option<civil::DateTime> {
        let span = self.get()?.to_span().ok()?;
        start.checked_add(span).ok()
    }

    /// Clear to absent.
    pub fn delete(&mut self) -> bool {
        self.store.delete()
    }
}

impl PropertyHandler for Duration {
    fn name(&self) -> &'static str {
        KW_DURATION
    }

    fn is_set(&self) -> bool {
        self.store.is_set()
    }

    fn clear(&mut self) -> bool {
        self.store.delete()
    }

    fn create(&self, config: &CalendarConfig) -> String {
        self.store
            .create(KW_DURATION, config, |v, p| (p.render(), v.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_sign_stripped_at_storage() {
        let config = CalendarConfig::default();
        let mut duration = Duration::default();
        duration
            .set(Some("-PT1H30M".into()), Parameters::new(), &config)
            .unwrap();
        assert_eq!(
            duration.get(),
            Some(ValueDuration::DateTime {
                positive: true,
                day: 0,
                hour: 1,
                minute: 30,
                second: 0,
            })
        );
    }

    #[test]
    fn unparseable_literal_keeps_previous_value() {
        let config = CalendarConfig::default();
        let mut duration = Duration::default();
        duration
            .set(Some("P1D".into()), Parameters::new(), &config)
            .unwrap();
        assert!(matches!(
            duration.set(Some("1 hour".into()), Parameters::new(), &config),
            Err(PropertyError::InvalidValue { .. })
        ));
        assert_eq!(
            duration.get(),
            Some(ValueDuration::DateTime {
                positive: true,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            })
        );
    }

    #[test]
    fn end_for_adds_span_to_start() {
        let config = CalendarConfig::default();
        let mut duration = Duration::default();
        duration
            .set(Some("P1DT2H".into()), Parameters::new(), &config)
            .unwrap();
        let start = civil::date(2026, 3, 14).at(9, 30, 0, 0);
        assert_eq!(
            duration.end_for(start),
            Some(civil::date(2026, 3, 15).at(11, 30, 0, 0))
        );
    }

    #[test]
    fn dtstart_validates_tzid() {
        let config = CalendarConfig::default();
        let mut dtstart = DtStart::default();
        let start = civil::date(2026, 3, 14).at(9, 30, 0, 0);

        let err = dtstart.set(
            Some(start),
            Parameters::from([("tzid", "Not/AZone")]),
            &config,
        );
        assert!(matches!(err, Err(PropertyError::TimeZone(_))));
        assert_eq!(dtstart.get(), None);

        // Offset-form and synonym TZIDs resolve through the same path.
        dtstart
            .set(
                Some(start),
                Parameters::from([("tzid", "+0100")]),
                &config,
            )
            .unwrap();
        assert_eq!(dtstart.get(), Some(start));
    }

    #[test]
    fn dtstart_emits_basic_format() {
        let config = CalendarConfig::default();
        let mut dtstart = DtStart::default();
        dtstart
            .set(
                Some(civil::date(2026, 3, 14).at(9, 30, 0, 0)),
                Parameters::from([("tzid", "Europe/Stockholm")]),
                &config,
            )
            .unwrap();
        assert_eq!(
            dtstart.create(&config),
            "DTSTART;TZID=Europe/Stockholm:20260314T093000\r\n"
        );
    }
}
