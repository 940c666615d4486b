// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Request status value type (RFC 5545 Section 3.8.8.3).

use crate::formatter::escape_text;

/// A structured REQUEST-STATUS value.
///
/// The status code is stored pre-rendered as fixed two-decimal text
/// (`2.00`, `3.70`); the description is mandatory, the extra data optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRequestStatus {
    /// Status code, rendered with two decimals.
    pub code: String,
    /// Status description.
    pub description: String,
    /// Exception data related to the status.
    pub ext_data: Option<String>,
}

impl ValueRequestStatus {
    /// Build from a numeric code and description.
    #[must_use]
    pub fn new(code: f64, description: impl Into<String>, ext_data: Option<String>) -> Self {
        Self {
            code: format!("{code:.2}"),
            description: description.into(),
            ext_data,
        }
    }

    /// Render the semicolon-joined content value, escaping the text fields.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.code.len() + self.description.len() + 1);
        out.push_str(&self.code);
        out.push(';');
        out.push_str(&escape_text(&self.description));
        if let Some(ext) = &self.ext_data {
            out.push(';');
            out.push_str(&escape_text(ext));
        }
        out
    }
}
