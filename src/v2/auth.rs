/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::YadleError;
use serde::Deserialize;
use std::fmt;

/// Credential attached to every authenticated request as the `Authorization` header.
///
/// The login endpoint hands back a token and a password which are combined into
/// `Bearer <token>:<password>`.
#[derive(Clone, PartialEq, Eq)]
pub struct Bearer(String);

impl Bearer {
    /// Builds the credential from the two fields returned by a login
    pub fn from_parts(token: &str, password: &str) -> Self {
        Self(format!("Bearer {}:{}", token, password))
    }

    /// Parses a login response body into the credential
    pub fn from_login_body(body: &[u8]) -> Result<Self, YadleError> {
        let resp: LoginResponse =
            serde_json::from_slice(body).map_err(YadleError::LoginResponse)?;
        Ok(Self::from_parts(&resp.token, &resp.password))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Bearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Bearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bearer").field(&"xxx").finish()
    }
}

// Expected response from the login request
#[derive(Deserialize, Debug)]
pub(crate) struct LoginResponse {
    token: String,
    password: String,
}

/// Form body for the login request
pub(crate) fn login_form(username: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    )
}
