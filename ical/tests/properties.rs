// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the property store contracts.
//!
//! These exercise the component-level accessors: coercion round-trips,
//! absence sentinels, context-dependent enumeration checks, multi-value
//! ordering, and content-line emission.

use calbuild_ical::{
    CalendarConfig, ComponentKind, Parameters, PropertyError, VAlarm, VEvent, VFreeBusy, VJournal,
    VTimeZone, VTodo, ValueDuration,
};

#[test]
fn fresh_component_returns_absence_everywhere() {
    let event = VEvent::new();
    assert_eq!(event.class(), None);
    assert_eq!(event.comments(), Vec::<&str>::new());
    assert_eq!(event.comment(0), None);
    assert_eq!(event.conferences(), Vec::<&str>::new());
    assert_eq!(event.dtstart(), None);
    assert_eq!(event.duration(), None);
    assert_eq!(event.geo(), None);
    assert_eq!(event.location(), None);
    assert_eq!(event.priority(), None);
    assert!(event.request_statuses().is_empty());
    assert_eq!(event.status(), None);
    assert_eq!(event.url(), None);
    assert_eq!(event.create_properties(), "");

    let timezone = VTimeZone::new();
    assert_eq!(timezone.tzurl(), None);

    let alarm = VAlarm::new();
    assert_eq!(alarm.repeat(), None);
    assert_eq!(alarm.duration(), None);
}

#[test]
fn set_then_get_returns_the_coerced_form() {
    let mut event = VEvent::new();
    event.set_class(Some("private"), Parameters::new()).unwrap();
    assert_eq!(event.class(), Some("PRIVATE"));

    event.set_priority(Some(5), Parameters::new()).unwrap();
    assert_eq!(event.priority(), Some(5));

    event
        .set_duration(Some("+P2W"), Parameters::new())
        .unwrap();
    assert_eq!(
        event.duration(),
        Some(ValueDuration::Week {
            positive: true,
            week: 2,
        })
    );
    assert_eq!(event.create_duration(), "DURATION:P2W\r\n");
}

#[test]
fn status_enumeration_is_keyed_by_component_kind() {
    let mut event = VEvent::new();
    assert!(matches!(
        event.set_status(Some("BOGUS"), Parameters::new()),
        Err(PropertyError::InvalidEnumeration {
            kind: ComponentKind::Event,
            ..
        })
    ));
    event.set_status(Some("CONFIRMED"), Parameters::new()).unwrap();
    assert_eq!(event.status(), Some("CONFIRMED"));

    // COMPLETED is a to-do status, not an event status.
    assert!(event.set_status(Some("COMPLETED"), Parameters::new()).is_err());
    assert_eq!(event.status(), Some("CONFIRMED"));

    let mut todo = VTodo::new();
    todo.set_status(Some("COMPLETED"), Parameters::new()).unwrap();
    assert_eq!(todo.status(), Some("COMPLETED"));

    let mut journal = VJournal::new();
    journal.set_status(Some("final"), Parameters::new()).unwrap();
    assert_eq!(journal.status(), Some("FINAL"));
    assert!(journal.set_status(Some("CONFIRMED"), Parameters::new()).is_err());
}

#[test]
fn priority_bounds_and_explicit_zero() {
    let mut event = VEvent::new();
    event.set_priority(Some(9), Parameters::new()).unwrap();
    assert!(matches!(
        event.set_priority(Some(10), Parameters::new()),
        Err(PropertyError::OutOfRange { value: 10, .. })
    ));
    assert_eq!(event.priority(), Some(9));

    event.set_priority(Some(0), Parameters::new()).unwrap();
    assert_eq!(event.priority(), Some(0));
    assert_eq!(event.create_priority(), "PRIORITY:0\r\n");
}

#[test]
fn multi_value_ordering_and_indexed_delete() {
    let mut event = VEvent::new();
    event.set_comment(Some("a"), Parameters::new(), None).unwrap();
    event.set_comment(Some("b"), Parameters::new(), None).unwrap();
    assert_eq!(event.comments(), ["a", "b"]);

    assert!(event.delete_comment(Some(0)));
    assert_eq!(event.comments(), ["b"]);

    // Replace-by-index and append-at-next-position.
    event.set_comment(Some("c"), Parameters::new(), Some(0)).unwrap();
    event.set_comment(Some("d"), Parameters::new(), Some(1)).unwrap();
    assert_eq!(event.comments(), ["c", "d"]);

    assert!(matches!(
        event.set_comment(Some("e"), Parameters::new(), Some(5)),
        Err(PropertyError::IndexOutOfBounds { index: 5, len: 2, .. })
    ));

    assert!(event.delete_comment(None));
    assert!(!event.delete_comment(None));
}

#[test]
fn request_status_emission() {
    let mut freebusy = VFreeBusy::new();
    freebusy
        .set_request_status(Some(2.0), Some("Success"), None, Parameters::new(), None)
        .unwrap();
    assert_eq!(
        freebusy.create_request_status(),
        "REQUEST-STATUS:2.00;Success\r\n"
    );

    freebusy
        .set_request_status(
            Some(3.1),
            Some("Invalid property value"),
            Some("DTSTART:96-Apr-01"),
            Parameters::new(),
            None,
        )
        .unwrap();
    let output = freebusy.create_request_status();
    assert!(output.contains("REQUEST-STATUS:2.00;Success\r\n"));
    assert!(
        output.contains("REQUEST-STATUS:3.10;Invalid property value;DTSTART:96-Apr-01\r\n")
    );

    let statuses = freebusy.request_statuses();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].code, "2.00");
    assert_eq!(statuses[1].description, "Invalid property value");
}

#[test]
fn empty_values_follow_the_allow_empty_option() {
    // Default config allows empty: a bare line is stored and emitted.
    let mut event = VEvent::new();
    event.set_location(None, Parameters::new()).unwrap();
    assert_eq!(event.location(), None);
    assert_eq!(event.create_location(), "LOCATION:\r\n");

    // Strict config rejects the empty set and emits nothing.
    let mut strict = VEvent::with_config(CalendarConfig::new().allow_empty(false));
    assert!(matches!(
        strict.set_location(None, Parameters::new()),
        Err(PropertyError::EmptyValueNotAllowed {
            property: "LOCATION"
        })
    ));
    assert_eq!(strict.create_location(), "");
}

#[test]
fn empty_property_carries_no_parameters() {
    let mut event = VEvent::new();
    event
        .set_location(Some("Somewhere"), Parameters::from([("language", "en")]))
        .unwrap();
    event.set_location(None, Parameters::from([("language", "en")])).unwrap();
    // The stored empty value dropped the parameters.
    assert_eq!(event.create_location(), "LOCATION:\r\n");
}

#[test]
fn parameters_are_normalized_and_rendered() {
    let mut event = VEvent::new();
    event
        .set_location(
            Some("Main Hall"),
            Parameters::from([("Language", "sv"), ("x-room", "12")]),
        )
        .unwrap();
    assert_eq!(
        event.create_location(),
        "LOCATION;LANGUAGE=sv;X-ROOM=12:Main Hall\r\n"
    );
    let (value, params) = event.location_with_params().unwrap();
    assert_eq!(value, "Main Hall");
    assert_eq!(params.get("language"), Some("sv"));
}

#[test]
fn language_default_injected_into_text_multi_values() {
    let config = CalendarConfig::new().language("en");
    let mut event = VEvent::with_config(config);
    event.set_comment(Some("first"), Parameters::new(), None).unwrap();
    event
        .set_comment(Some("andra"), Parameters::from([("language", "sv")]), None)
        .unwrap();
    assert_eq!(
        event.create_comment(),
        "COMMENT;LANGUAGE=en:first\r\nCOMMENT;LANGUAGE=sv:andra\r\n"
    );
}

#[test]
fn text_values_are_escaped_at_emission() {
    let mut event = VEvent::new();
    event
        .set_comment(Some("a;b,c\nnext"), Parameters::new(), None)
        .unwrap();
    assert_eq!(
        event.create_comment(),
        "COMMENT:a\\;b\\,c\\nnext\r\n"
    );
    // The stored value itself stays unescaped.
    assert_eq!(event.comment(0), Some("a;b,c\nnext"));
}

#[test]
fn conference_requires_a_value_type_hint() {
    let mut todo = VTodo::new();
    todo.set_conference(
        Some("https://video.example.com/room/1"),
        Parameters::new(),
        None,
    )
    .unwrap();
    assert_eq!(
        todo.create_conference(),
        "CONFERENCE;VALUE=URI:https://video.example.com/room/1\r\n"
    );
}

#[test]
fn url_properties_share_validation() {
    let mut event = VEvent::new();
    assert!(matches!(
        event.set_url(Some("not a url"), Parameters::new()),
        Err(PropertyError::InvalidValue { property: "URL", .. })
    ));
    event
        .set_url(Some("https://example.com/event.ics"), Parameters::new())
        .unwrap();
    assert_eq!(event.create_url(), "URL:https://example.com/event.ics\r\n");

    let mut timezone = VTimeZone::new();
    assert!(matches!(
        timezone.set_tzurl(Some("::"), Parameters::new()),
        Err(PropertyError::InvalidValue {
            property: "TZURL",
            ..
        })
    ));
    timezone
        .set_tzurl(
            Some("https://zones.example.com/Europe/Stockholm.ics"),
            Parameters::new(),
        )
        .unwrap();
    assert_eq!(
        timezone.tzurl(),
        Some("https://zones.example.com/Europe/Stockholm.ics")
    );
}

#[test]
fn singleton_set_overwrites_and_delete_is_idempotent() {
    let mut event = VEvent::new();
    event.set_class(Some("PUBLIC"), Parameters::new()).unwrap();
    event.set_class(Some("CONFIDENTIAL"), Parameters::new()).unwrap();
    assert_eq!(event.class(), Some("CONFIDENTIAL"));

    assert!(event.delete_class());
    assert_eq!(event.class(), None);
    assert!(event.delete_class());
}

#[test]
fn long_lines_fold_at_75_octets() {
    let mut event = VEvent::new();
    let text = "This description of the venue is deliberately long enough to require \
                folding across several physical lines of output text.";
    event.set_location(Some(text), Parameters::new()).unwrap();
    let line = event.create_location();
    for physical in line.trim_end().split("\r\n") {
        assert!(physical.len() <= 75, "{physical:?}");
    }
    let unfolded = line.replace("\r\n ", "").replace("\r\n", "");
    assert_eq!(unfolded, format!("LOCATION:{text}"));
}
