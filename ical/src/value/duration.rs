// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type as defined in RFC 5545 Section 3.3.6.

use std::fmt;
use std::str::FromStr;

use chumsky::error::Rich;
use chumsky::prelude::*;

/// Duration Value defined in RFC 5545 Section 3.3.6.
///
/// Stored durations are unsigned: property setters strip any sign prefix
/// from literals and [`ValueDuration::conform`] forces the positive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDuration {
    /// Date and Time Duration
    DateTime {
        /// Whether the duration is positive
        positive: bool,
        /// Day Duration
        day: u32,
        /// Hour Duration
        hour: u32,
        /// Minute Duration
        minute: u32,
        /// Second Duration
        second: u32,
    },

    /// Week Duration
    Week {
        /// Whether the duration is positive
        positive: bool,
        /// Week Duration
        week: u32,
    },
}

/// Structured parts record for a duration, the pre-parsed form accepted by
/// duration setters.
///
/// Carries the legacy `invert` sign flag that older producers stored
/// alongside the unit fields; [`ValueDuration::from_parts`] is the single
/// place that flag is normalized away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts {
    /// Week component.
    pub weeks: u32,
    /// Day component.
    pub days: u32,
    /// Hour component.
    pub hours: u32,
    /// Minute component.
    pub minutes: u32,
    /// Second component.
    pub seconds: u32,
    /// Legacy inversion flag; ignored by normalization, durations are
    /// unsigned at storage.
    pub invert: bool,
}

impl ValueDuration {
    /// A zero-length duration.
    pub const ZERO: Self = Self::DateTime {
        positive: true,
        day: 0,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build from a structured parts record, normalizing the legacy
    /// `invert` flag away.
    ///
    /// A record holding only weeks stays in week form; weeks mixed with any
    /// day or time component are folded into days.
    #[must_use]
    pub fn from_parts(parts: DurationParts) -> Self {
        let DurationParts {
            weeks,
            days,
            hours,
            minutes,
            seconds,
            invert: _,
        } = parts;

        if weeks > 0 && days == 0 && hours == 0 && minutes == 0 && seconds == 0 {
            return Self::Week {
                positive: true,
                week: weeks,
            };
        }

        Self::DateTime {
            positive: true,
            day: days + weeks * 7,
            hour: hours,
            minute: minutes,
            second: seconds,
        }
        .conform()
    }

    /// Normalize to the storage form: positive sign and carried time units
    /// (seconds < 60, minutes < 60, hours < 24).
    #[must_use]
    pub fn conform(self) -> Self {
        match self {
            Self::Week { week, .. } => Self::Week {
                positive: true,
                week,
            },
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => {
                let minute = minute + second / 60;
                let second = second % 60;
                let hour = hour + minute / 60;
                let minute = minute % 60;
                let day = day + hour / 24;
                let hour = hour % 24;
                Self::DateTime {
                    positive: true,
                    day,
                    hour,
                    minute,
                    second,
                }
            }
        }
    }

    /// Convert to a jiff calendar span for date arithmetic.
    ///
    /// # Errors
    /// Returns an error if a unit exceeds jiff's span limits.
    pub fn to_span(self) -> Result<jiff::Span, jiff::Error> {
        match self {
            Self::Week { week, .. } => jiff::Span::new().try_weeks(i64::from(week)),
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => jiff::Span::new()
                .try_days(i64::from(day))?
                .try_hours(i64::from(hour))?
                .try_minutes(i64::from(minute))?
                .try_seconds(i64::from(second)),
        }
    }
}

impl fmt::Display for ValueDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week { positive, .. } | Self::DateTime { positive, .. } if !positive => {
                write!(f, "-P")?;
            }
            _ => write!(f, "P")?,
        }

        match self {
            Self::Week { week, .. } => write!(f, "{week}W"),
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => {
                if *day > 0 {
                    write!(f, "{day}D")?;
                }
                if *hour > 0 || *minute > 0 || *second > 0 {
                    write!(f, "T")?;
                    if *hour > 0 {
                        write!(f, "{hour}H")?;
                    }
                    if *minute > 0 {
                        write!(f, "{minute}M")?;
                    }
                    if *second > 0 {
                        write!(f, "{second}S")?;
                    }
                } else if *day == 0 {
                    write!(f, "T0S")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for ValueDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        duration_literal()
            .then_ignore(end())
            .parse(s)
            .into_result()
            .map_err(|errs| {
                errs.first()
                    .map_or_else(|| format!("invalid duration: {s}"), ToString::to_string)
            })
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
fn duration_literal<'src>()
-> impl Parser<'src, &'src str, ValueDuration, extra::Err<Rich<'src, char>>> {
    // case-sensitive
    let int = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10) // u32 max is 10 digits: 4_294_967_295
        .collect::<String>()
        .try_map(|s: String, span| {
            lexical::parse::<u32, _>(s.as_bytes())
                .map_err(|_| Rich::custom(span, "duration component overflows u32"))
        });

    let week = int.then_ignore(just('W'));

    let second_val = int.then_ignore(just('S'));
    let minute_val = int.then_ignore(just('M'));
    let hour_val = int.then_ignore(just('H'));

    // dur-second = 1*DIGIT "S"
    let second_only = second_val.map(|s| (0, 0, s));

    // dur-minute = 1*DIGIT "M" [dur-second]
    let minute_with_second = minute_val
        .then(second_val.or_not())
        .map(|(m, s)| (0, m, s.unwrap_or(0)));

    // dur-hour = 1*DIGIT "H" [dur-minute]
    let hour_with_minute = hour_val
        .then(minute_val.then(second_val.or_not()).or_not())
        .map(|(h, opt_ms)| match opt_ms {
            Some((m, opt_s)) => (h, m, opt_s.unwrap_or(0)),
            None => (h, 0, 0),
        });

    // dur-time = "T" (dur-hour / dur-minute / dur-second)
    let time = just('T').ignore_then(choice((hour_with_minute, minute_with_second, second_only)));

    let day = int.then_ignore(just('D'));
    let date = day.then(time.or_not());

    let sign = select! { c @ ('+' | '-') => c }
        .or_not()
        .map(|sign| !matches!(sign, Some('-')));
    let prefix = sign.then_ignore(just('P'));
    choice((
        prefix.then(date).map(|(positive, (day, time))| {
            let (hour, minute, second) = time.unwrap_or((0, 0, 0));
            ValueDuration::DateTime {
                positive,
                day,
                hour,
                minute,
                second,
            }
        }),
        prefix
            .then(time)
            .map(|(positive, (h, m, s))| ValueDuration::DateTime {
                positive,
                day: 0,
                hour: h,
                minute: m,
                second: s,
            }),
        prefix
            .then(week)
            .map(|(positive, week)| ValueDuration::Week { positive, week }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc_forms() {
        let cases = [
            (
                "P15DT5H0M20S",
                ValueDuration::DateTime {
                    positive: true,
                    day: 15,
                    hour: 5,
                    minute: 0,
                    second: 20,
                },
            ),
            (
                "P7W",
                ValueDuration::Week {
                    positive: true,
                    week: 7,
                },
            ),
            (
                "PT1H30M",
                ValueDuration::DateTime {
                    positive: true,
                    day: 0,
                    hour: 1,
                    minute: 30,
                    second: 0,
                },
            ),
            (
                "-PT15M",
                ValueDuration::DateTime {
                    positive: false,
                    day: 0,
                    hour: 0,
                    minute: 15,
                    second: 0,
                },
            ),
        ];
        for (src, expected) in cases {
            assert_eq!(src.parse::<ValueDuration>().unwrap(), expected, "{src}");
        }
    }

    #[test]
    fn rejects_malformed_literals() {
        for src in ["P", "PT", "15D", "P15X", "P1D2H", "PT5H20S7M", "P1W2D"] {
            assert!(src.parse::<ValueDuration>().is_err(), "{src}");
        }
    }

    #[test]
    fn display_round_trips() {
        for src in ["P15DT5H20S", "P7W", "PT1H30M", "PT0S", "P3D"] {
            let parsed: ValueDuration = src.parse().unwrap();
            assert_eq!(parsed.to_string(), src);
        }
    }

    #[test]
    fn conform_carries_and_drops_sign() {
        let d = ValueDuration::DateTime {
            positive: false,
            day: 0,
            hour: 25,
            minute: 61,
            second: 75,
        };
        assert_eq!(
            d.conform(),
            ValueDuration::DateTime {
                positive: true,
                day: 1,
                hour: 2,
                minute: 2,
                second: 15,
            }
        );
    }

    #[test]
    fn from_parts_repairs_legacy_invert() {
        let parts = DurationParts {
            weeks: 1,
            days: 1,
            invert: true,
            ..DurationParts::default()
        };
        assert_eq!(
            ValueDuration::from_parts(parts),
            ValueDuration::DateTime {
                positive: true,
                day: 8,
                hour: 0,
                minute: 0,
                second: 0,
            }
        );

        let weeks_only = DurationParts {
            weeks: 2,
            invert: true,
            ..DurationParts::default()
        };
        assert_eq!(
            ValueDuration::from_parts(weeks_only),
            ValueDuration::Week {
                positive: true,
                week: 2,
            }
        );
    }
}
