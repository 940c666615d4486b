// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545 (and RFC 7986 extensions).

// Section 3.2 - Property Parameters
pub const KW_ALTREP: &str = "ALTREP";
pub const KW_FEATURE: &str = "FEATURE";
pub const KW_LABEL: &str = "LABEL";
pub const KW_LANGUAGE: &str = "LANGUAGE";
pub const KW_TZID: &str = "TZID";
pub const KW_VALUE: &str = "VALUE";

// Section 3.3 - Property Value Data Types
pub const KW_URI: &str = "URI";

// Section 3.8.1 - Descriptive Component Properties
pub const KW_CLASS: &str = "CLASS";
pub const KW_CLASS_PUBLIC: &str = "PUBLIC";
pub const KW_CLASS_PRIVATE: &str = "PRIVATE";
pub const KW_CLASS_CONFIDENTIAL: &str = "CONFIDENTIAL";
pub const KW_COMMENT: &str = "COMMENT";
pub const KW_GEO: &str = "GEO";
pub const KW_LOCATION: &str = "LOCATION";
pub const KW_PRIORITY: &str = "PRIORITY";
pub const KW_STATUS: &str = "STATUS";
pub const KW_STATUS_TENTATIVE: &str = "TENTATIVE";
pub const KW_STATUS_CONFIRMED: &str = "CONFIRMED";
pub const KW_STATUS_CANCELLED: &str = "CANCELLED";
pub const KW_STATUS_COMPLETED: &str = "COMPLETED";
pub const KW_STATUS_IN_PROCESS: &str = "IN-PROCESS";
pub const KW_STATUS_NEEDS_ACTION: &str = "NEEDS-ACTION";
pub const KW_STATUS_DRAFT: &str = "DRAFT";
pub const KW_STATUS_FINAL: &str = "FINAL";

// Section 3.8.2 - Date and Time Component Properties
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_DURATION: &str = "DURATION";

// Section 3.8.3 - Time Zone Component Properties
pub const KW_TZURL: &str = "TZURL";

// Section 3.8.4 - Relationship Component Properties
pub const KW_URL: &str = "URL";

// Section 3.8.6 - Alarm Component Properties
pub const KW_REPEAT: &str = "REPEAT";

// Section 3.8.8 - Miscellaneous Component Properties
pub const KW_REQUEST_STATUS: &str = "REQUEST-STATUS";

// RFC 7986 extensions
pub const KW_CONFERENCE: &str = "CONFERENCE";

// Component names
pub const KW_VEVENT: &str = "VEVENT";
pub const KW_VTODO: &str = "VTODO";
pub const KW_VJOURNAL: &str = "VJOURNAL";
pub const KW_VFREEBUSY: &str = "VFREEBUSY";
pub const KW_VTIMEZONE: &str = "VTIMEZONE";
pub const KW_VALARM: &str = "VALARM";

// Timezone literals
pub const KW_UTC: &str = "UTC";
pub const KW_GMT: &str = "GMT";
pub const KW_Z: &str = "Z";
