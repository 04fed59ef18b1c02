/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::YadleError;
use crate::v2::{Client, Form, Page, RawQuery};
use reqwest::{Method, Url};
use serde_json::Value;

/// Parameters of a full text search.
///
/// `terms` follows the Yadle search syntax: terms are separated by spaces,
/// multi-word terms are wrapped in double quotes and tags start with `#`,
/// e.g. `"red car" honda #"3d model"`.
///
/// When `quiet` is set only file ids are returned instead of full file objects.
#[derive(Debug, Default, Clone)]
pub struct SearchQuery {
    pub page: Page,
    pub quiet: bool,
    pub terms: Option<String>,
}

impl SearchQuery {
    pub fn new(terms: &str) -> Self {
        Self {
            terms: Some(terms.into()),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn query(&self) -> RawQuery {
        RawQuery::new().page(&self.page).flag("quiet", self.quiet)
    }

    fn form(&self) -> Form {
        Form::new().opt_field("terms", self.terms.as_deref())
    }
}

impl Client {
    const SEARCH_URI: &'static str = "/search";

    /// Url a search will be sent to
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, YadleError> {
        self.api().url(Self::SEARCH_URI, &query.query())
    }

    /// Runs a search and returns the response body
    pub async fn search(&self, query: &SearchQuery) -> Result<Value, YadleError> {
        let req_url = self.search_url(query)?;
        self.api()
            .send_form(Method::POST, req_url, Some(&query.form()))
            .await
    }
}
