// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone and UTC-offset resolution.
//!
//! Date/time property values may carry zone information as a symbolic name
//! (`Europe/Stockholm`), a UTC synonym (`Z`, `UTC`, `GMT`), or a numeric
//! offset (`+0100`, `-05:00`, `+013045`). This module converts between the
//! offset forms, classifies UTC-equivalence, and resolves any of the three
//! forms to a concrete [`jiff::tz::TimeZone`].
//!
//! All functions are pure; the only shared state is the pair of literal
//! constants below and the host timezone database consulted through jiff.

use jiff::Timestamp;
use jiff::tz::{self, Dst, Offset, TimeZone};
use tracing::{debug, trace};

use crate::error::TimeZoneError;
use crate::keyword::{KW_GMT, KW_UTC, KW_Z};

/// Strings treated as synonyms for UTC.
pub const UTC_SYNONYMS: [&str; 3] = [KW_Z, KW_UTC, KW_GMT];

/// The canonical zero-offset literal, mapped straight to UTC.
pub const UTC_OFFSET: &str = "+00:00";

// Probe instants for observing a zone's standard and daylight offsets:
// mid-January and mid-July 2026, noon UTC.
const WINTER_PROBE_SECOND: i64 = 1_768_478_400;
const SUMMER_PROBE_SECOND: i64 = 1_784_116_800;

fn probe_instants() -> [Timestamp; 2] {
    [WINTER_PROBE_SECOND, SUMMER_PROBE_SECOND]
        .map(|s| Timestamp::from_second(s).unwrap_or(Timestamp::UNIX_EPOCH))
}

/// Convert an offset literal to signed seconds.
///
/// Accepts `[+/-]HHMM[SS]` and the colon-separated equivalents. Returns 0
/// for malformed input rather than failing; callers that must distinguish
/// "unparseable" from a genuine zero offset check [`has_offset`] first.
#[must_use]
pub fn offset_to_seconds(offset: &str) -> i32 {
    let offset = offset.trim().replace(':', "");
    let len = offset.len();
    if !(5..=7).contains(&len) {
        return 0;
    }
    if !offset.starts_with(['+', '-']) {
        return 0;
    }
    let is_minus = offset.starts_with('-');
    let digits = offset.as_bytes().get(1..).unwrap_or_default();
    if !digits.iter().all(u8::is_ascii_digit) {
        return 0;
    }

    let mut seconds = parse_two_digits(digits.get(0..2)) * 3600;
    seconds += parse_two_digits(digits.get(2..4)) * 60;
    if len == 7 {
        seconds += parse_two_digits(digits.get(4..6));
    }
    if is_minus { -seconds } else { seconds }
}

fn parse_two_digits(digits: Option<&[u8]>) -> i32 {
    digits.map_or(0, |d| lexical::parse::<i32, _>(d).unwrap_or(0))
}

/// Render signed seconds as an offset literal `[+/-]HHMM[SS]`.
///
/// The sign is always present; the seconds component is emitted only when
/// non-zero.
#[must_use]
pub fn seconds_to_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = u64::from(seconds.unsigned_abs());
    let hour = abs / 3600;
    let minute = abs % 3600 / 60;
    let second = abs % 60;
    let mut out = format!("{sign}{hour:02}{minute:02}");
    if second > 0 {
        out.push_str(&format!("{second:02}"));
    }
    out
}

/// Whether the string carries a trailing UTC offset.
///
/// True only for a trailing sign-prefixed 4- or 6-digit run once colon
/// separators are removed; explicitly false when the string ends in the
/// `Z` UTC marker.
#[must_use]
pub fn has_offset(string: &str) -> bool {
    let s = string.trim();
    if s.is_empty() || s.ends_with(KW_Z) {
        return false;
    }
    let s = s.replace(':', "");
    let b = s.as_bytes();
    let n = b.len();
    let tail_is_offset = |digits: usize| {
        n > digits
            && matches!(b.get(n - digits - 1), Some(b'+' | b'-'))
            && b.get(n - digits..)
                .is_some_and(|d| d.iter().all(u8::is_ascii_digit))
    };
    tail_is_offset(4) || tail_is_offset(6)
}

/// Extract the trailing offset substring from a date string.
///
/// Scans backward collecting digits and colons, stopping (inclusive) at a
/// sign character; returns `None` as soon as any other character is hit.
#[must_use]
pub fn get_offset(date_string: &str) -> Option<String> {
    let mut collected: Vec<char> = Vec::new();
    for c in date_string.trim().chars().rev() {
        match c {
            '0'..='9' | ':' => collected.push(c),
            '+' | '-' => {
                collected.push(c);
                collected.reverse();
                return Some(collected.into_iter().collect());
            }
            _ => return None,
        }
    }
    if collected.is_empty() {
        None
    } else {
        collected.reverse();
        Some(collected.into_iter().collect())
    }
}

/// Whether the value denotes UTC.
///
/// True for an offset of zero magnitude (`+0000`, `+00:00`) and for the
/// case-insensitive UTC synonyms (`Z`, `UTC`, `GMT`).
#[must_use]
pub fn is_utc_timezone(time_zone_string: &str) -> bool {
    if time_zone_string.is_empty() {
        return false;
    }
    if has_offset(time_zone_string) {
        let stripped = time_zone_string.replace(':', "");
        return leading_int(&stripped) == 0;
    }
    let upper = time_zone_string.to_ascii_uppercase();
    UTC_SYNONYMS.contains(&upper.as_str())
}

// Leading-integer reading: optional sign, then digits up to the first
// non-digit character.
fn leading_int(s: &str) -> i64 {
    let s = s.trim();
    let (sign, rest) = match s.strip_prefix(['+', '-']) {
        Some(rest) if s.starts_with('-') => (-1, rest),
        Some(rest) => (1, rest),
        None => (1, s),
    };
    let end = rest
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    rest.as_bytes()
        .get(..end)
        .map_or(0, |d| lexical::parse::<i64, _>(d).unwrap_or(0))
        * sign
}

/// Resolve an offset literal to a timezone name from the host database.
///
/// The literal zero offset maps to `UTC` directly. Any other offset is
/// converted to seconds and matched against the database, probing
/// any-variant, standard, then daylight offsets in that order.
///
/// # Errors
/// Returns [`TimeZoneError::NoZoneForOffset`] when no zone matches.
#[tracing::instrument]
pub fn zone_name_from_offset(offset: &str) -> Result<String, TimeZoneError> {
    if offset == UTC_OFFSET {
        return Ok(KW_UTC.to_string());
    }
    let seconds = offset_to_seconds(offset);
    let no_match = || TimeZoneError::NoZoneForOffset {
        offset: offset.to_string(),
        seconds,
    };
    let target = Offset::from_seconds(seconds).map_err(|_| no_match())?;

    debug!(seconds, "scanning timezone database for offset");
    for probe in [DstProbe::Any, DstProbe::Standard, DstProbe::Daylight] {
        if let Some(name) = find_zone(target, probe) {
            return Ok(name);
        }
    }
    Err(no_match())
}

#[derive(Debug, Clone, Copy)]
enum DstProbe {
    Any,
    Standard,
    Daylight,
}

impl DstProbe {
    fn matches(self, dst: Dst) -> bool {
        match self {
            Self::Any => true,
            Self::Standard => !matches!(dst, Dst::Yes),
            Self::Daylight => matches!(dst, Dst::Yes),
        }
    }
}

fn find_zone(target: Offset, probe: DstProbe) -> Option<String> {
    for name in tz::db().available() {
        let Ok(zone) = TimeZone::get(name.as_str()) else {
            continue;
        };
        for instant in probe_instants() {
            let info = zone.to_offset_info(instant);
            if info.offset() == target && probe.matches(info.dst()) {
                trace!(zone = name.as_str(), ?probe, "offset matched");
                return Some(name.as_str().to_string());
            }
        }
    }
    None
}

/// Resolve a zone name, UTC synonym, or offset literal to a
/// [`jiff::tz::TimeZone`].
///
/// This is the umbrella entry point used whenever a date/time value
/// carries zone information: offset-form input is resolved to a zone name
/// first, UTC synonyms map to the canonical name, and the result is looked
/// up in the host database.
///
/// # Errors
/// Returns [`TimeZoneError::InvalidTimeZone`] (carrying the original
/// string and the underlying cause) when the lookup fails, or
/// [`TimeZoneError::NoZoneForOffset`] when an offset matches no zone.
#[tracing::instrument]
pub fn resolve_time_zone(tz_string: &str) -> Result<TimeZone, TimeZoneError> {
    let name = if has_offset(tz_string) {
        zone_name_from_offset(tz_string)?
    } else if UTC_SYNONYMS.contains(&tz_string) {
        KW_UTC.to_string()
    } else {
        tz_string.to_string()
    };
    TimeZone::get(&name).map_err(|source| TimeZoneError::InvalidTimeZone {
        value: tz_string.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_to_seconds_parses_all_forms() {
        let cases = [
            ("+0100", 3600),
            ("-0500", -18000),
            ("+01:00", 3600),
            ("-05:00", -18000),
            ("+013045", 5445),
            ("-01:30:45", -5445),
            ("+0000", 0),
            (" +0200 ", 7200),
        ];
        for (src, expected) in cases {
            assert_eq!(offset_to_seconds(src), expected, "{src}");
        }
    }

    #[test]
    fn offset_to_seconds_malformed_is_zero() {
        for src in ["", "0100", "+01", "+01000000", "+01a0", "Z", "UTC"] {
            assert_eq!(offset_to_seconds(src), 0, "{src}");
        }
    }

    #[test]
    fn six_character_offset_ignores_trailing_digit() {
        // A 6-character offset parses the hour and minute fields only.
        assert_eq!(offset_to_seconds("+01005"), 3600);
    }

    #[test]
    fn seconds_to_offset_renders_sign_and_seconds() {
        assert_eq!(seconds_to_offset(3600), "+0100");
        assert_eq!(seconds_to_offset(-18000), "-0500");
        assert_eq!(seconds_to_offset(0), "+0000");
        assert_eq!(seconds_to_offset(5445), "+013045");
        assert_eq!(seconds_to_offset(-5445), "-013045");
    }

    #[test]
    fn has_offset_suffix_grammar() {
        assert!(has_offset("+0100"));
        assert!(has_offset("20260115T120000+0100"));
        assert!(has_offset("20260115T120000-01:30:45"));
        assert!(!has_offset("20260115T120000Z"));
        assert!(!has_offset("Europe/Stockholm"));
        assert!(!has_offset(""));
        assert!(!has_offset("+01"));
    }

    #[test]
    fn get_offset_backward_scan() {
        assert_eq!(
            get_offset("20260115T120000+0100").as_deref(),
            Some("+0100")
        );
        assert_eq!(
            get_offset("20260115T120000-01:30:45").as_deref(),
            Some("-01:30:45")
        );
        assert_eq!(get_offset("20260115T120000Z"), None);
        assert_eq!(get_offset(""), None);
    }

    #[test]
    fn utc_classification() {
        for utc in ["Z", "UTC", "GMT", "utc", "gmt", "+00:00", "+0000", "-0000"] {
            assert!(is_utc_timezone(utc), "{utc}");
        }
        for other in ["+0100", "-05:00", "Europe/Stockholm", ""] {
            assert!(!is_utc_timezone(other), "{other}");
        }
    }

    #[test]
    fn offset_round_trip_every_quarter_hour() {
        let mut s = -50400;
        while s <= 50400 {
            assert_eq!(offset_to_seconds(&seconds_to_offset(s)), s, "{s}");
            s += 900;
        }
    }

    #[test]
    fn zero_offset_literal_resolves_to_utc() {
        assert_eq!(zone_name_from_offset("+00:00").unwrap(), "UTC");
    }

    #[test]
    fn named_zone_resolution() {
        let zone = resolve_time_zone("Europe/Stockholm").unwrap();
        assert_eq!(zone.iana_name(), Some("Europe/Stockholm"));

        for utc in UTC_SYNONYMS {
            let zone = resolve_time_zone(utc).unwrap();
            assert_eq!(zone.iana_name(), Some("UTC"));
        }
    }

    #[test]
    fn offset_resolution_finds_a_matching_zone() {
        // +01:00 is Central European Time in winter; some zone must match.
        let name = zone_name_from_offset("+0100").unwrap();
        let zone = TimeZone::get(&name).unwrap();
        let matches_target = probe_instants()
            .iter()
            .any(|&ts| zone.to_offset(ts).seconds() == 3600);
        assert!(matches_target, "{name}");
    }

    #[test]
    fn unresolvable_inputs_error() {
        assert!(matches!(
            resolve_time_zone("Not/AZone"),
            Err(TimeZoneError::InvalidTimeZone { .. })
        ));
        // 13 minutes past no whole- or half-hour zone.
        assert!(matches!(
            zone_name_from_offset("+0013"),
            Err(TimeZoneError::NoZoneForOffset { seconds: 780, .. })
        ));
    }
}
