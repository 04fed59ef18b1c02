/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use httpmock::prelude::*;
    use serde_json::json;
    use yadle::v2::{Page, UserInvite, YadleError};

    #[tokio::test]
    async fn users_with_skip_and_limit() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        let users = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/yadle/v2/user/_all")
                    .query_param("skip", "10")
                    .query_param("limit", "20")
                    .header("x-app-id", helpers::APP_ID)
                    .header("authorization", helpers::BEARER)
                    .header("cache-control", "no-cache");
                then.status(200).json_body(json!({
                    "total_rows": 2,
                    "rows": [
                        {"id": "u1", "firstName": "Jean", "lastName": "Picard", "status": "active"},
                        {"id": "u2", "firstName": "Will", "lastName": "Riker", "status": "invited"}
                    ]
                }));
            })
            .await;

        let page = Page::default().skip("10").limit("20");
        let rows = client.users(&page).await.unwrap();
        users.assert_async().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "u1");
        assert_eq!(rows[1].last_name, "Riker");
        assert_eq!(rows[1].status, "invited");
    }

    #[tokio::test]
    async fn users_body_without_rows() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        server
            .mock_async(|when, then| {
                when.method(GET).path("/yadle/v2/user/_all");
                then.status(403).json_body(json!({"error": "forbidden"}));
            })
            .await;

        let raw = client.users_raw(&Page::default()).await.unwrap();
        assert_eq!(raw["error"], "forbidden");
        let err = client.users(&Page::default()).await.unwrap_err();
        assert!(matches!(err, YadleError::ResponseFieldMissing("rows")));
    }

    #[tokio::test]
    async fn invite_user_posts_form() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        let invite = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/yadle/v2/user/invite")
                    .header("x-app-id", helpers::APP_ID)
                    .header("authorization", helpers::BEARER)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body("firstName=Some&lastName=One&email=someone%40domain.com");
                then.status(200).body("OK");
            })
            .await;

        let resp = client
            .invite_user(&UserInvite {
                email: "someone@domain.com".into(),
                first_name: "Some".into(),
                last_name: "One".into(),
            })
            .await
            .unwrap();
        invite.assert_async().await;
        assert!(resp.status.is_success());
        assert_eq!(resp.body, "OK");
    }
}
