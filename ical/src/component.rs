// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar component types and their property surfaces.
//!
//! Each component kind composes the property handlers it carries per
//! RFC 5545 and exposes chainable accessors delegating to them. Setters
//! return `Result<&mut Self>` so calls can be chained; a failed set leaves
//! the component unchanged.

use std::fmt;
use std::str::FromStr;

use jiff::civil;

use crate::config::CalendarConfig;
use crate::error::PropertyError;
use crate::keyword::{
    KW_TZURL, KW_URL, KW_VALARM, KW_VEVENT, KW_VFREEBUSY, KW_VJOURNAL, KW_VTIMEZONE, KW_VTODO,
};
use crate::parameter::Parameters;
use crate::property::{
    Class, Comment, Conference, DtStart, Duration, DurationInput, Geo, Location, Priority,
    PropertyHandler, Repeat, RequestStatus, Status, Uri,
};
use crate::value::{ValueDuration, ValueGeo, ValueRequestStatus};

/// Kind of calendar component.
///
/// Passed explicitly into context-dependent coercions (STATUS) instead of
/// being looked up dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// VEVENT
    Event,
    /// VTODO
    Todo,
    /// VJOURNAL
    Journal,
    /// VFREEBUSY
    FreeBusy,
    /// VTIMEZONE
    TimeZone,
    /// VALARM
    Alarm,
}

impl AsRef<str> for ComponentKind {
    fn as_ref(&self) -> &str {
        match self {
            Self::Event => KW_VEVENT,
            Self::Todo => KW_VTODO,
            Self::Journal => KW_VJOURNAL,
            Self::FreeBusy => KW_VFREEBUSY,
            Self::TimeZone => KW_VTIMEZONE,
            Self::Alarm => KW_VALARM,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            KW_VEVENT => Ok(Self::Event),
            KW_VTODO => Ok(Self::Todo),
            KW_VJOURNAL => Ok(Self::Journal),
            KW_VFREEBUSY => Ok(Self::FreeBusy),
            KW_VTIMEZONE => Ok(Self::TimeZone),
            KW_VALARM => Ok(Self::Alarm),
            _ => Err(format!("Invalid component kind: {s}")),
        }
    }
}

macro_rules! property_class {
    () => {
        /// Set the CLASS property.
        ///
        /// # Errors
        /// See [`Class::set`].
        pub fn set_class(
            &mut self,
            value: Option<&str>,
            params: Parameters,
        ) -> Result<&mut Self, PropertyError> {
            self.class.set(value, params, &self.config)?;
            Ok(self)
        }

        /// The CLASS value.
        #[must_use]
        pub fn class(&self) -> Option<&str> {
            self.class.get()
        }

        /// The CLASS value with its parameters.
        #[must_use]
        pub fn class_with_params(&self) -> Option<(&str, &Parameters)> {
            self.class.get_with_params()
        }

        /// Emit the CLASS property.
        #[must_use]
        pub fn create_class(&self) -> String {
            self.class.create(&self.config)
        }

        /// Delete the CLASS property.
        pub fn delete_class(&mut self) -> bool {
            self.class.delete()
        }
    };
}

macro_rules! property_comment {
    () => {
        /// Append or replace a COMMENT entry.
        ///
        /// # Errors
        /// See [`Comment::set`].
        pub fn set_comment(
            &mut self,
            value: Option<&str>,
            params: Parameters,
            index: Option<usize>,
        ) -> Result<&mut Self, PropertyError> {
            self.comments.set(value, params, index, &self.config)?;
            Ok(self)
        }

        /// The COMMENT entry at `index`.
        #[must_use]
        pub fn comment(&self, index: usize) -> Option<&str> {
            self.comments.get(index)
        }

        /// The COMMENT entry at `index` with its parameters.
        #[must_use]
        pub fn comment_with_params(&self, index: usize) -> Option<(&str, &Parameters)> {
            self.comments.get_with_params(index)
        }

        /// All COMMENT entries in insertion order.
        #[must_use]
        pub fn comments(&self) -> Vec<&str> {
            self.comments.get_all()
        }

        /// Emit all COMMENT entries.
        #[must_use]
        pub fn create_comment(&self) -> String {
            self.comments.create(&self.config)
        }

        /// Delete the COMMENT entry at `index`, or all entries.
        pub fn delete_comment(&mut self, index: Option<usize>) -> bool {
            self.comments.delete(index)
        }
    };
}

macro_rules! property_conference {
    () => {
        /// Append or replace a CONFERENCE entry.
        ///
        /// # Errors
        /// See [`Conference::set`].
        pub fn set_conference(
            &mut self,
            value: Option<&str>,
            params: Parameters,
            index: Option<usize>,
        ) -> Result<&mut Self, PropertyError> {
            self.conferences.set(value, params, index, &self.config)?;
            Ok(self)
        }

        /// The CONFERENCE entry at `index`.
        #[must_use]
        pub fn conference(&self, index: usize) -> Option<&str> {
            self.conferences.get(index)
        }

        /// The CONFERENCE entry at `index` with its parameters.
        #[must_use]
        pub fn conference_with_params(&self, index: usize) -> Option<(&str, &Parameters)> {
            self.conferences.get_with_params(index)
        }

        /// All CONFERENCE entries in insertion order.
        #[must_use]
        pub fn conferences(&self) -> Vec<&str> {
            self.conferences.get_all()
        }

        /// Emit all CONFERENCE entries.
        #[must_use]
        pub fn create_conference(&self) -> String {
            self.conferences.create(&self.config)
        }

        /// Delete the CONFERENCE entry at `index`, or all entries.
        pub fn delete_conference(&mut self, index: Option<usize>) -> bool {
            self.conferences.delete(index)
        }
    };
}

macro_rules! property_dtstart {
    () => {
        /// Set the DTSTART property.
        ///
        /// # Errors
        /// See [`DtStart::set`].
        pub fn set_dtstart(
            &mut self,
            value: Option<civil::DateTime>,
            params: Parameters,
        ) -> Result<&mut Self, PropertyError> {
            self.dtstart.set(value, params, &self.config)?;
            Ok(self)
        }

        /// The DTSTART value.
        #[must_use]
        pub fn dtstart(&self) -> Option<civil::DateTime> {
            self.dtstart.get()
        }

        /// The DTSTART value with its parameters.
        #[must_use]
        pub fn dtstart_with_params(&self) -> Option<(civil::DateTime, &Parameters)> {
            self.dtstart.get_with_params()
        }

        /// Emit the DTSTART property.
        #[must_use]
        pub fn create_dtstart(&self) -> String {
            self.dtstart.create(&self.config)
        }

        /// Delete the DTSTART property.
        pub fn delete_dtstart(&mut self) -> bool {
            self.dtstart.delete()
        }
    };
}

macro_rules! property_duration {
    () => {
        /// Set the DURATION property.
        ///
        /// # Errors
        /// See [`Duration::set`].
        pub fn set_duration<'a>(
            &mut self,
            value: Option<impl Into<DurationInput<'a>>>,
            params: Parameters,
        ) -> Result<&mut Self, PropertyError> {
            self.duration
                .set(value.map(Into::into), params, &self.config)?;
            Ok(self)
        }

        /// The DURATION value.
        #[must_use]
        pub fn duration(&self) -> Option<ValueDuration> {
            self.duration.get()
        }

        /// The DURATION value with its parameters.
        #[must_use]
        pub fn duration_with_params(&self) -> Option<(ValueDuration, &Parameters)> {
            self.duration.get_with_params()
        }

        /// Emit the DURATION property.
        #[must_use]
        pub fn create_duration(&self) -> String {
            self.duration.create(&self.config)
        }

        /// Delete the DURATION property.
        pub fn delete_duration(&mut self) -> bool {
            self.duration.delete()
        }
    };
}

macro_rules! property_geo {
    () => {
        /// Set the GEO property.
        ///
        /// # Errors
        /// See [`Geo::set`].
        pub fn set_geo(
            &mut self,
            latitude: Option<f64>,
            longitude: Option<f64>,
            params: Parameters,
        ) -> Result<&mut Self, PropertyError> {
            self.geo.set(latitude, longitude, params, &self.config)?;
            Ok(self)
        }

        /// The GEO value.
        #[must_use]
        pub fn geo(&self) -> Option<ValueGeo> {
            self.geo.get()
        }

        /// The GEO value with its parameters.
        #[must_use]
        pub fn geo_with_params(&self) -> Option<(ValueGeo, &Parameters)> {
            self.geo.get_with_params()
        }

        /// Emit the GEO property.
        #[must_use]
        pub fn create_geo(&self) -> String {
            self.geo.create(&self.config)
        }

        /// Delete the GEO property.
        pub fn delete_geo(&mut self) -> bool {
            self.geo.delete()
        }
    };
}

macro_rules! property_location {
    () => {
        /// Set the LOCATION property.
        ///
        /// # Errors
        /// See [`Location::set`].
        pub fn set_location(
            &mut self,
            value: Option<&str>,
            params: Parameters,
        ) -> Result<&mut Self, PropertyError> {
            self.location.set(value, params, &self.config)?;
            Ok(self)
        }

        /// The LOCATION value.
        #[must_use]
        pub fn location(&self) -> Option<&str> {
            self.location.get()
        }

        /// The LOCATION value with its parameters.
        #[must_use]
        pub fn location_with_params(&self) -> Option<(&str, &Parameters)> {
            self.location.get_with_params()
        }

        /// Emit the LOCATION property.
        #[must_use]
        pub fn create_location(&self) -> String {
            self.location.create(&self.config)
        }

        /// Delete the LOCATION property.
        pub fn delete_location(&mut self) -> bool {
            self.location.delete()
        }
    };
}

macro_rules! property_priority {
    () => {
        /// Set the PRIORITY property.
        ///
        /// # Errors
        /// See [`Priority::set`].
        pub fn set_priority(
            &mut self,
            value: Option<i64>,
            params: Parameters,
        ) -> Result<&mut Self, PropertyError> {
            self.priority.set(value, params, &self.config)?;
            Ok(self)
        }

        /// The PRIORITY value.
        #[must_use]
        pub fn priority(&self) -> Option<i64> {
            self.priority.get()
        }

        /// The PRIORITY value with its parameters.
        #[must_use]
        pub fn priority_with_params(&self) -> Option<(i64, &Parameters)> {
            self.priority.get_with_params()
        }

        /// Emit the PRIORITY property.
        #[must_use]
        pub fn create_priority(&self) -> String {
            self.priority.create(&self.config)
        }

        /// Delete the PRIORITY property.
        pub fn delete_priority(&mut self) -> bool {
            self.priority.delete()
        }
    };
}

macro_rules! property_request_status {
    () => {
        /// Append or replace a REQUEST-STATUS entry.
        ///
        /// # Errors
        /// See [`RequestStatus::set`].
        pub fn set_request_status(
            &mut self,
            code: Option<f64>,
            description: Option<&str>,
            ext_data: Option<&str>,
            params: Parameters,
            index: Option<usize>,
        ) -> Result<&mut Self, PropertyError> {
            self.request_status
                .set(code, description, ext_data, params, index, &self.config)?;
            Ok(self)
        }

        /// The REQUEST-STATUS entry at `index`.
        #[must_use]
        pub fn request_status(&self, index: usize) -> Option<&ValueRequestStatus> {
            self.request_status.get(index)
        }

        /// All REQUEST-STATUS entries in insertion order.
        #[must_use]
        pub fn request_statuses(&self) -> Vec<&ValueRequestStatus> {
            self.request_status.get_all()
        }

        /// Emit all REQUEST-STATUS entries.
        #[must_use]
        pub fn create_request_status(&self) -> String {
            self.request_status.create(&self.config)
        }

        /// Delete the REQUEST-STATUS entry at `index`, or all entries.
        pub fn delete_request_status(&mut self, index: Option<usize>) -> bool {
            self.request_status.delete(index)
        }
    };
}

macro_rules! property_status {
    () => {
        /// Set the STATUS property, validated for this component kind.
        ///
        /// # Errors
        /// See [`Status::set`].
        pub fn set_status(
            &mut self,
            value: Option<&str>,
            params: Parameters,
        ) -> Result<&mut Self, PropertyError> {
            self.status.set(value, params, Self::KIND, &self.config)?;
            Ok(self)
        }

        /// The STATUS value.
        #[must_use]
        pub fn status(&self) -> Option<&str> {
            self.status.get()
        }

        /// The STATUS value with its parameters.
        #[must_use]
        pub fn status_with_params(&self) -> Option<(&str, &Parameters)> {
            self.status.get_with_params()
        }

        /// Emit the STATUS property.
        #[must_use]
        pub fn create_status(&self) -> String {
            self.status.create(&self.config)
        }

        /// Delete the STATUS property.
        pub fn delete_status(&mut self) -> bool {
            self.status.delete()
        }
    };
}

macro_rules! property_uri {
    ($field:ident, $set:ident, $get:ident, $get_with:ident, $create:ident, $delete:ident, $doc:literal) => {
        #[doc = concat!("Set the ", $doc, " property.")]
        ///
        /// # Errors
        /// See [`Uri::set`].
        pub fn $set(
            &mut self,
            value: Option<&str>,
            params: Parameters,
        ) -> Result<&mut Self, PropertyError> {
            self.$field.set(value, params, &self.config)?;
            Ok(self)
        }

        #[doc = concat!("The ", $doc, " value.")]
        #[must_use]
        pub fn $get(&self) -> Option<&str> {
            self.$field.get()
        }

        #[doc = concat!("The ", $doc, " value with its parameters.")]
        #[must_use]
        pub fn $get_with(&self) -> Option<(&str, &Parameters)> {
            self.$field.get_with_params()
        }

        #[doc = concat!("Emit the ", $doc, " property.")]
        #[must_use]
        pub fn $create(&self) -> String {
            self.$field.create(&self.config)
        }

        #[doc = concat!("Delete the ", $doc, " property.")]
        pub fn $delete(&mut self) -> bool {
            self.$field.delete()
        }
    };
}

macro_rules! component_common {
    ($kind:expr) => {
        /// The component kind, passed into context-dependent coercions.
        pub const KIND: ComponentKind = $kind;

        /// Create a component with the default config.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a component with the given config.
        #[must_use]
        pub fn with_config(config: CalendarConfig) -> Self {
            Self {
                config,
                ..Self::default()
            }
        }

        /// The component's config.
        #[must_use]
        pub fn config(&self) -> &CalendarConfig {
            &self.config
        }

        /// Emit every stored property of this component, in a fixed
        /// property order.
        #[must_use]
        pub fn create_properties(&self) -> String {
            self.handlers()
                .into_iter()
                .map(|h| h.create(&self.config))
                .collect()
        }
    };
}

/// An event component (VEVENT).
#[derive(Debug, Clone)]
pub struct VEvent {
    config: CalendarConfig,
    class: Class,
    comments: Comment,
    conferences: Conference,
    dtstart: DtStart,
    duration: Duration,
    geo: Geo,
    location: Location,
    priority: Priority,
    request_status: RequestStatus,
    status: Status,
    url: Uri,
}

impl Default for VEvent {
    fn default() -> Self {
        Self {
            config: CalendarConfig::default(),
            class: Class::default(),
            comments: Comment::default(),
            conferences: Conference::default(),
            dtstart: DtStart::default(),
            duration: Duration::default(),
            geo: Geo::default(),
            location: Location::default(),
            priority: Priority::default(),
            request_status: RequestStatus::default(),
            status: Status::default(),
            url: Uri::new(KW_URL),
        }
    }
}

impl VEvent {
    component_common!(ComponentKind::Event);
    property_class!();
    property_comment!();
    property_conference!();
    property_dtstart!();
    property_duration!();
    property_geo!();
    property_location!();
    property_priority!();
    property_request_status!();
    property_status!();
    property_uri!(url, set_url, url, url_with_params, create_url, delete_url, "URL");

    /// The component end derived from DTSTART plus DURATION.
    #[must_use]
    pub fn duration_end(&self) -> Option<civil::DateTime> {
        self.duration.end_for(self.dtstart.get()?)
    }

    /// Combined location and position: `location/latitude longitude`
    /// with the coordinates in the GEO emission format.
    #[must_use]
    pub fn geo_location(&self) -> Option<String> {
        let geo = self.geo.get()?;
        let prefix = self
            .location
            .get()
            .map(|loc| format!("{loc}/"))
            .unwrap_or_default();
        Some(format!(
            "{prefix}{}{}",
            geo.latitude_string(),
            geo.longitude_string()
        ))
    }

    fn handlers(&self) -> [&dyn PropertyHandler; 11] {
        [
            &self.class,
            &self.comments,
            &self.conferences,
            &self.dtstart,
            &self.duration,
            &self.geo,
            &self.location,
            &self.priority,
            &self.request_status,
            &self.status,
            &self.url,
        ]
    }
}

/// A to-do component (VTODO).
#[derive(Debug, Clone)]
pub struct VTodo {
    config: CalendarConfig,
    class: Class,
    comments: Comment,
    conferences: Conference,
    dtstart: DtStart,
    duration: Duration,
    geo: Geo,
    location: Location,
    priority: Priority,
    request_status: RequestStatus,
    status: Status,
    url: Uri,
}

impl Default for VTodo {
    fn default() -> Self {
        Self {
            config: CalendarConfig::default(),
            class: Class::default(),
            comments: Comment::default(),
            conferences: Conference::default(),
            dtstart: DtStart::default(),
            duration: Duration::default(),
            geo: Geo::default(),
            location: Location::default(),
            priority: Priority::default(),
            request_status: RequestStatus::default(),
            status: Status::default(),
            url: Uri::new(KW_URL),
        }
    }
}

impl VTodo {
    component_common!(ComponentKind::Todo);
    property_class!();
    property_comment!();
    property_conference!();
    property_dtstart!();
    property_duration!();
    property_geo!();
    property_location!();
    property_priority!();
    property_request_status!();
    property_status!();
    property_uri!(url, set_url, url, url_with_params, create_url, delete_url, "URL");

    /// The component end derived from DTSTART plus DURATION.
    #[must_use]
    pub fn duration_end(&self) -> Option<civil::DateTime> {
        self.duration.end_for(self.dtstart.get()?)
    }

    fn handlers(&self) -> [&dyn PropertyHandler; 11] {
        [
            &self.class,
            &self.comments,
            &self.conferences,
            &self.dtstart,
            &self.duration,
            &self.geo,
            &self.location,
            &self.priority,
            &self.request_status,
            &self.status,
            &self.url,
        ]
    }
}

/// A journal component (VJOURNAL).
#[derive(Debug, Clone)]
pub struct VJournal {
    config: CalendarConfig,
    class: Class,
    comments: Comment,
    dtstart: DtStart,
    request_status: RequestStatus,
    status: Status,
    url: Uri,
}

impl Default for VJournal {
    fn default() -> Self {
        Self {
            config: CalendarConfig::default(),
            class: Class::default(),
            comments: Comment::default(),
            dtstart: DtStart::default(),
            request_status: RequestStatus::default(),
            status: Status::default(),
            url: Uri::new(KW_URL),
        }
    }
}

impl VJournal {
    component_common!(ComponentKind::Journal);
    property_class!();
    property_comment!();
    property_dtstart!();
    property_request_status!();
    property_status!();
    property_uri!(url, set_url, url, url_with_params, create_url, delete_url, "URL");

    fn handlers(&self) -> [&dyn PropertyHandler; 6] {
        [
            &self.class,
            &self.comments,
            &self.dtstart,
            &self.request_status,
            &self.status,
            &self.url,
        ]
    }
}

/// A free/busy component (VFREEBUSY).
#[derive(Debug, Clone)]
pub struct VFreeBusy {
    config: CalendarConfig,
    comments: Comment,
    request_status: RequestStatus,
    url: Uri,
}

impl Default for VFreeBusy {
    fn default() -> Self {
        Self {
            config: CalendarConfig::default(),
            comments: Comment::default(),
            request_status: RequestStatus::default(),
            url: Uri::new(KW_URL),
        }
    }
}

impl VFreeBusy {
    component_common!(ComponentKind::FreeBusy);
    property_comment!();
    property_request_status!();
    property_uri!(url, set_url, url, url_with_params, create_url, delete_url, "URL");

    fn handlers(&self) -> [&dyn PropertyHandler; 3] {
        [&self.comments, &self.request_status, &self.url]
    }
}

/// A timezone component (VTIMEZONE).
#[derive(Debug, Clone)]
pub struct VTimeZone {
    config: CalendarConfig,
    tzurl: Uri,
}

impl Default for VTimeZone {
    fn default() -> Self {
        Self {
            config: CalendarConfig::default(),
            tzurl: Uri::new(KW_TZURL),
        }
    }
}

impl VTimeZone {
    component_common!(ComponentKind::TimeZone);
    property_uri!(
        tzurl,
        set_tzurl,
        tzurl,
        tzurl_with_params,
        create_tzurl,
        delete_tzurl,
        "TZURL"
    );

    fn handlers(&self) -> [&dyn PropertyHandler; 1] {
        [&self.tzurl]
    }
}

/// An alarm component (VALARM).
#[derive(Debug, Clone, Default)]
pub struct VAlarm {
    config: CalendarConfig,
    duration: Duration,
    repeat: Repeat,
}

impl VAlarm {
    component_common!(ComponentKind::Alarm);
    property_duration!();

    /// Set the REPEAT property.
    ///
    /// # Errors
    /// See [`Repeat::set`].
    pub fn set_repeat(
        &mut self,
        value: Option<i64>,
        params: Parameters,
    ) -> Result<&mut Self, PropertyError> {
        self.repeat.set(value, params, &self.config)?;
        Ok(self)
    }

    /// The REPEAT value.
    #[must_use]
    pub fn repeat(&self) -> Option<i64> {
        self.repeat.get()
    }

    /// The REPEAT value with its parameters.
    #[must_use]
    pub fn repeat_with_params(&self) -> Option<(i64, &Parameters)> {
        self.repeat.get_with_params()
    }

    /// Emit the REPEAT property.
    #[must_use]
    pub fn create_repeat(&self) -> String {
        self.repeat.create(&self.config)
    }

    /// Delete the REPEAT property.
    pub fn delete_repeat(&mut self) -> bool {
        self.repeat.delete()
    }

    fn handlers(&self) -> [&dyn PropertyHandler; 2] {
        [&self.duration, &self.repeat]
    }
}
