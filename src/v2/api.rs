/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::auth::login_form;
use crate::v2::errors::YadleError;
use crate::v2::{Bearer, Form, RawQuery};
use log::{debug, warn};
use num_enum::TryFromPrimitive;
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

// Root of every Yadle v2 endpoint, appended to the server url
pub const API_ROOT: &str = "/yadle/v2";

const APP_ID_HEADER: &str = "x-app-id";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Extra headers an endpoint expects on top of the app id and bearer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Plain,
    NoCache,
    Json,
}

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    server: String,
    app_id: String,
    bearer: Bearer,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Logs in to the server and returns a client carrying the resulting bearer
    pub async fn login(
        server: &str,
        username: &str,
        password: &str,
        app_id: &str,
    ) -> Result<Self, YadleError> {
        let https_client = reqwest::Client::new();
        let server = server.trim_end_matches('/').to_string();
        let req_url = Url::parse(&format!("{}{}/auth/login", server, API_ROOT))?;
        debug!("Logging in to {} as {}", req_url, username);

        let resp = https_client
            .post(req_url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(login_form(username, password))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            warn!("Login returned status {}", status);
        }
        let bearer = Bearer::from_login_body(&body)?;

        Ok(Self {
            server,
            app_id: app_id.into(),
            bearer,
            https_client,
        })
    }

    /// Creates a client from a bearer obtained elsewhere
    pub fn with_bearer(server: &str, app_id: &str, bearer: Bearer) -> Self {
        Self {
            server: server.trim_end_matches('/').into(),
            app_id: app_id.into(),
            bearer,
            https_client: reqwest::Client::new(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn bearer(&self) -> &Bearer {
        &self.bearer
    }

    /// Full url for a path below [`API_ROOT`] with an optional raw query string
    pub fn url(&self, path: &str, query: &RawQuery) -> Result<Url, YadleError> {
        let mut req_url = Url::parse(&format!("{}{}{}", self.server, API_ROOT, path))?;
        if let Some(q) = query.as_query() {
            req_url.set_query(Some(&q));
        }
        Ok(req_url)
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        style: HeaderStyle,
    ) -> Result<RequestBuilder, YadleError> {
        let mut headers = HeaderMap::new();
        headers.insert(APP_ID_HEADER, HeaderValue::from_str(&self.app_id)?);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(self.bearer.as_str())?);
        match style {
            HeaderStyle::Plain => {}
            HeaderStyle::NoCache => {
                headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
            }
            HeaderStyle::Json => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            }
        }
        debug!("{} {}", method, url);
        Ok(self.https_client.request(method, url).headers(headers))
    }

    /// Performs a request with an optional JSON body and parses the JSON response
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, YadleError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut req = self.request(method, url, HeaderStyle::Json)?;
        if let Some(body) = body {
            req = req.json(body);
        }
        let (status, body) = send(req).await?;
        parse_body(status, &body)
    }

    /// Performs a get request with the JSON content type header set
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, YadleError> {
        self.send_json::<(), T>(Method::GET, url, None).await
    }

    /// Performs a request with an optional form body and parses the JSON response
    pub async fn send_form<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        form: Option<&Form>,
    ) -> Result<T, YadleError> {
        let resp = self.send_form_raw(method, url, form).await?;
        parse_body(resp.status, resp.body.as_bytes())
    }

    /// Same as [`ApiClient::send_form`] without interpreting the response body
    pub async fn send_form_raw(
        &self,
        method: Method,
        url: Url,
        form: Option<&Form>,
    ) -> Result<RawResponse, YadleError> {
        let mut req = self.request(method, url, HeaderStyle::NoCache)?;
        if let Some(form) = form {
            req = req.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(form.encode());
        }
        let (status, body) = send(req).await?;
        Ok(RawResponse {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }

    /// Performs a get request, returning `None` when the server answers with an error status
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        url: Url,
        style: HeaderStyle,
    ) -> Result<Option<T>, YadleError> {
        let req_url = url.clone();
        let (status, body) = send(self.request(Method::GET, url, style)?).await?;
        if !status.is_success() {
            warn!(
                "{} returned {}: {}",
                req_url,
                status,
                String::from_utf8_lossy(&body)
            );
            return Ok(None);
        }
        parse_body(status, &body).map(Some)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("server", &self.server)
            .field("app_id", &self.app_id)
            .field("bearer", &self.bearer)
            .finish()
    }
}

/// Status and unparsed body of a response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

async fn send(req: RequestBuilder) -> Result<(StatusCode, Vec<u8>), YadleError> {
    let resp = req.send().await?;
    let status = resp.status();
    let body = resp.bytes().await?.to_vec();
    debug!("Response {}: {}", status, String::from_utf8_lossy(&body));
    Ok((status, body))
}

fn parse_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, YadleError> {
    if !status.is_success() {
        warn!("API returned status {}", status);
    }
    serde_json::from_slice(body).map_err(|e| YadleError::ApiResponseMalformed(status.as_u16(), e))
}

/// Whether a response body reports a failure through an `error` key
pub fn has_error(response: &Value) -> bool {
    response.get("error").is_some()
}

/// Codes carried in the `code` field of some API response bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiCode {
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NoContent = 204,

    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    Conflict = 409,
    TooManyRequests = 429,
    InternalServerError = 500,
    ServiceUnavailable = 503,
}

impl ApiCode {
    /// Reads the `code` field of a response body
    pub fn from_response(value: &Value) -> Result<Self, YadleError> {
        let code = value
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|c| u32::try_from(c).ok())
            .ok_or(YadleError::ResponseFieldMissing("code"))?;
        Ok(ApiCode::try_from(code)?)
    }

    pub fn is_success(self) -> bool {
        matches!(
            self,
            ApiCode::Ok | ApiCode::Created | ApiCode::Accepted | ApiCode::NoContent
        )
    }
}
