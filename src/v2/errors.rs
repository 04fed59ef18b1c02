/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v2::ApiCode;
use num_enum::TryFromPrimitiveError;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum YadleError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Invalid header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Login response is missing the token or password: {0:?}")]
    LoginResponse(serde_json::Error),

    #[error("API Response error code is invalid")]
    ApiResponseCode(#[from] TryFromPrimitiveError<ApiCode>),

    #[error("API Response field `{0}` is missing")]
    ResponseFieldMissing(&'static str),

    #[error("API Response is malformed (status {0}): {1:?}")]
    ApiResponseMalformed(u16, serde_json::Error),
}
