/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::YadleError;
use crate::v2::{Client, Form, Page, RawQuery, RawResponse, Segment};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

/// One row of the user list.
///
/// See [Yadle API Docs](https://api.yadle.com/) for the remaining fields.
#[derive(Deserialize, Debug, Clone)]
pub struct UserSummary {
    pub id: String,

    #[serde(default, rename = "firstName")]
    pub first_name: String,

    #[serde(default, rename = "lastName")]
    pub last_name: String,

    #[serde(default)]
    pub status: String,
}

/// Details for a user invitation
#[derive(Debug, Clone)]
pub struct UserInvite {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserInvite {
    fn form(&self) -> Form {
        Form::new()
            .field("firstName", &self.first_name)
            .field("lastName", &self.last_name)
            .field("email", &self.email)
    }
}

impl Client {
    const USER_URI: &'static str = "/user";

    /// Returns the raw user list body for the requested window
    pub async fn users_raw(&self, page: &Page) -> Result<Value, YadleError> {
        let req_url = self.api().url(
            &format!("{}/{}", Self::USER_URI, Segment::All.as_ref()),
            &RawQuery::new().page(page),
        )?;
        self.api().send_form(Method::GET, req_url, None).await
    }

    /// Returns the users in the requested window
    pub async fn users(&self, page: &Page) -> Result<Vec<UserSummary>, YadleError> {
        let mut body = self.users_raw(page).await?;
        let rows = body
            .get_mut("rows")
            .map(Value::take)
            .ok_or(YadleError::ResponseFieldMissing("rows"))?;
        Ok(serde_json::from_value(rows)?)
    }

    /// Invites a new user into the organization
    pub async fn invite_user(&self, invite: &UserInvite) -> Result<RawResponse, YadleError> {
        let req_url = self.api().url(
            &format!("{}/{}", Self::USER_URI, Segment::Invite.as_ref()),
            &RawQuery::new(),
        )?;
        self.api()
            .send_form_raw(Method::POST, req_url, Some(&invite.form()))
            .await
    }
}
