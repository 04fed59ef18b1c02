/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use httpmock::prelude::*;
use serde_json::json;
use yadle::v2::Client;

pub(crate) const APP_ID: &str = "api_test_app";
pub(crate) const BEARER: &str = "Bearer T:P";

/// Mocks the login endpoint and logs in against it
#[allow(dead_code)]
pub(crate) async fn logged_in_client(server: &MockServer) -> anyhow::Result<Client> {
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/yadle/v2/auth/login")
                .header("content-type", "application/x-www-form-urlencoded")
                .body("username=tester&password=secret");
            then.status(200)
                .json_body(json!({"token": "T", "password": "P"}));
        })
        .await;
    let client = Client::login(&server.base_url(), "tester", "secret", APP_ID).await?;
    login.assert_async().await;
    Ok(client)
}
