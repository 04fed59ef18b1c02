/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{AsRefStr, IntoStaticStr};

/// Fixed trailing path segments used by the resource endpoints
#[derive(Debug, Clone, Copy, AsRefStr, IntoStaticStr)]
pub enum Segment {
    #[strum(serialize = "_all")]
    All,
    #[strum(serialize = "new")]
    New,
    #[strum(serialize = "entire")]
    Entire,
    #[strum(serialize = "edit_primary")]
    EditPrimary,
    #[strum(serialize = "new_name")]
    NewName,
    #[strum(serialize = "invite")]
    Invite,
}

/// Window into a list result. Both values are handed to the server untouched.
#[derive(Debug, Default, Clone)]
pub struct Page {
    pub skip: Option<String>,
    pub limit: Option<String>,
}

impl Page {
    pub fn skip(mut self, skip: impl Into<String>) -> Self {
        self.skip = Some(skip.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }
}

/// Raw query string. Values are appended verbatim, without encoding or validation.
#[derive(Debug, Default, Clone)]
pub struct RawQuery(Vec<String>);

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` when a value is provided
    pub fn opt(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.0.push(format!("{}={}", key, value));
        }
        self
    }

    /// Appends `key=true` when the flag is set
    pub fn flag(mut self, key: &str, on: bool) -> Self {
        if on {
            self.0.push(format!("{}=true", key));
        }
        self
    }

    pub fn page(self, page: &Page) -> Self {
        self.opt("skip", page.skip.as_deref())
            .opt("limit", page.limit.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_query(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join("&"))
        }
    }
}

/// Url encoded form body
#[derive(Debug, Default, Clone)]
pub struct Form(Vec<(String, String)>);

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Like [`Form::field`] but a missing value leaves the field out
    pub fn opt_field(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
