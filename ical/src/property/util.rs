// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the property handlers.

use crate::error::PropertyError;
use crate::parameter::Parameters;
use crate::property::store::Single;

/// Strip trailing CR/LF characters from an input value.
pub(crate) fn trim_trailing_newlines(value: &str) -> &str {
    value.trim_end_matches(['\r', '\n'])
}

/// Validate and store a URI-shaped value.
///
/// Shared by every URI-valued property (URL, TZURL). The shape check is a
/// RFC 3986 subset: a scheme (ALPHA followed by ALPHA / DIGIT / `+` / `-`
/// / `.`), a colon, a non-empty remainder, and no whitespace or control
/// characters anywhere.
pub(crate) fn assign_url(
    store: &mut Single<String>,
    value: &str,
    params: Parameters,
    property: &'static str,
) -> Result<(), PropertyError> {
    let value = trim_trailing_newlines(value);
    if !is_uri_shaped(value) {
        return Err(PropertyError::InvalidValue {
            property,
            value: value.to_string(),
        });
    }
    store.set(value.to_string(), params);
    Ok(())
}

fn is_uri_shaped(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let Some((scheme, rest)) = value.split_once(':') else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_shapes() {
        for ok in [
            "https://example.com/cal.ics",
            "mailto:jsmith@example.com",
            "tel:+1-919-555-1234",
            "x-conf+v1:room42",
        ] {
            assert!(is_uri_shaped(ok), "{ok}");
        }
        for bad in ["", "no-colon", ":missing", "1st:scheme", "ht tp://x", "https:"] {
            assert!(!is_uri_shaped(bad), "{bad}");
        }
    }

    #[test]
    fn assign_url_rejects_without_clobbering() {
        let mut store = Single::default();
        assign_url(&mut store, "https://example.com", Parameters::new(), "URL").unwrap();
        let err = assign_url(&mut store, "not a uri", Parameters::new(), "URL");
        assert!(matches!(err, Err(PropertyError::InvalidValue { .. })));
        assert_eq!(store.get().map(String::as_str), Some("https://example.com"));
    }
}
