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
    use httpmock::Method::PATCH;
    use httpmock::prelude::*;
    use serde_json::json;
    use yadle::v2::CollectionMembers;

    fn members() -> CollectionMembers {
        let mut members = CollectionMembers::new();
        members.insert("file_id1", "device_id1", "path_id1");
        members.insert("file_id2", "device_id1", "path_id2");
        members.insert("file_id2", "device_id2", "path_id4");
        members
    }

    #[tokio::test]
    async fn create_then_get_collection() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        let body = serde_json::to_value(members()).unwrap();

        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/yadle/v2/collection/my_test_collection2")
                    .header("x-app-id", helpers::APP_ID)
                    .header("authorization", helpers::BEARER)
                    .header("content-type", "application/json")
                    .json_body(body.clone());
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/yadle/v2/collection/my_test_collection2")
                    .header("x-app-id", helpers::APP_ID)
                    .header("authorization", helpers::BEARER);
                then.status(200).json_body(body.clone());
            })
            .await;

        let created = client
            .create_collection("my_test_collection2", &members())
            .await
            .unwrap();
        assert!(created.get("error").is_none());
        let fetched = client.collection("my_test_collection2").await.unwrap();
        create.assert_async().await;
        get.assert_async().await;

        let fetched: CollectionMembers = serde_json::from_value(fetched).unwrap();
        assert_eq!(fetched, members());
    }

    #[tokio::test]
    async fn remove_add_rename_delete() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        let subset = members().subset(&["file_id2"]);

        let remove = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/yadle/v2/collection/c1")
                    .json_body(json!({"file_id2": {"device_id1": ["path_id2"], "device_id2": ["path_id4"]}}));
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;
        let add = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/yadle/v2/collection/c1")
                    .json_body(json!({"file_id2": {"device_id1": ["path_id2"], "device_id2": ["path_id4"]}}));
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;
        let rename = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/yadle/v2/collection/c1/new_name/c2");
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/yadle/v2/collection/c2/entire")
                    .header("x-app-id", helpers::APP_ID)
                    .header("authorization", helpers::BEARER);
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;
        let all = server
            .mock_async(|when, then| {
                when.method(GET).path("/yadle/v2/collection/_all");
                then.status(200).json_body(json!({"rows": [{"name": "c1"}]}));
            })
            .await;

        client.remove_collection_members("c1", &subset).await.unwrap();
        client.add_collection_members("c1", &subset).await.unwrap();
        client.rename_collection("c1", "c2").await.unwrap();
        client.delete_collection("c2").await.unwrap();
        let collections = client.collections().await.unwrap();
        assert_eq!(collections["rows"][0]["name"], "c1");

        remove.assert_async().await;
        add.assert_async().await;
        rename.assert_async().await;
        delete.assert_async().await;
        all.assert_async().await;
    }

    #[tokio::test]
    async fn create_error_is_returned_as_is() {
        let server = MockServer::start_async().await;
        let client = helpers::logged_in_client(&server).await.unwrap();
        server
            .mock_async(|when, then| {
                when.method(POST).path("/yadle/v2/collection/dup");
                then.status(409).json_body(json!({"error": "collection exists"}));
            })
            .await;

        let created = client.create_collection("dup", &members()).await.unwrap();
        assert_eq!(created["error"], "collection exists");
    }
}
