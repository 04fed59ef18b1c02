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
    use yadle::v2::{Page, SearchQuery, YadleError};

    #[tokio::test]
    async fn search_passes_params_and_terms() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        let search = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/yadle/v2/search")
                    .query_param("skip", "80")
                    .query_param("limit", "20")
                    .query_param("quiet", "true")
                    .header("x-app-id", helpers::APP_ID)
                    .header("authorization", helpers::BEARER)
                    .body("terms=%22star%20trek%22%20%23%223d%20model%22");
                then.status(200).json_body(json!({"total_rows": 2, "rows": ["f1", "f2"]}));
            })
            .await;

        let query = SearchQuery::new(r#""star trek" #"3d model""#)
            .page(Page::default().skip("80").limit("20"))
            .quiet(true);
        assert_eq!(
            client.search_url(&query).unwrap().as_str(),
            format!("{}/yadle/v2/search?skip=80&limit=20&quiet=true", server.base_url())
        );

        let res = client.search(&query).await.unwrap();
        search.assert_async().await;
        assert_eq!(res["rows"], json!(["f1", "f2"]));
    }

    #[tokio::test]
    async fn search_without_params_has_no_query() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        let query = SearchQuery::default();
        assert_eq!(
            client.search_url(&query).unwrap().as_str(),
            format!("{}/yadle/v2/search", server.base_url())
        );
    }

    #[tokio::test]
    async fn search_non_json_response() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        server
            .mock_async(|when, then| {
                when.method(POST).path("/yadle/v2/search");
                then.status(502).body("<html>Bad Gateway</html>");
            })
            .await;

        let err = client.search(&SearchQuery::new("honda")).await.unwrap_err();
        assert!(matches!(err, YadleError::ApiResponseMalformed(502, _)));
    }
}
