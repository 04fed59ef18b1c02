/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::YadleError;
use crate::v2::{Client, RawQuery, Segment};
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body used when creating or updating a collection.
///
/// ```json
/// {
///     "{file_id1}": { "{device_id1}": ["{path_id1}"] },
///     "{file_id2}": {
///         "{device_id1}": ["{path_id2}", "{path_id3}"],
///         "{device_id2}": ["{path_id4}"]
///     }
/// }
/// ```
///
/// Files keep the order they were inserted in.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct CollectionMembers(Map<String, Value>);

impl CollectionMembers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path of a file on a device
    pub fn insert(&mut self, file_id: &str, device_id: &str, path_id: &str) {
        let devices = self
            .0
            .entry(file_id)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(devices) = devices {
            let paths = devices
                .entry(device_id)
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(paths) = paths {
                paths.push(Value::String(path_id.into()));
            }
        }
    }

    /// Copies the entries of the listed files into a new set of members
    pub fn subset(&self, file_ids: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(id, _)| file_ids.contains(&id.as_str()))
                .map(|(id, devices)| (id.clone(), devices.clone()))
                .collect(),
        )
    }

    pub fn file_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Client {
    const COLLECTION_URI: &'static str = "/collection";

    fn collection_url(&self, name: &str, tail: &[&str]) -> Result<Url, YadleError> {
        let mut path = format!("{}/{}", Self::COLLECTION_URI, name);
        for segment in tail {
            path.push('/');
            path.push_str(segment);
        }
        self.api().url(&path, &RawQuery::new())
    }

    /// Creates a collection holding the given members
    pub async fn create_collection(
        &self,
        name: &str,
        members: &CollectionMembers,
    ) -> Result<Value, YadleError> {
        let req_url = self.collection_url(name, &[])?;
        self.api()
            .send_json(Method::POST, req_url, Some(members))
            .await
    }

    /// Returns the documents of a collection
    pub async fn collection(&self, name: &str) -> Result<Value, YadleError> {
        let req_url = self.collection_url(name, &[])?;
        self.api().get_json(req_url).await
    }

    /// Returns all of the collections
    pub async fn collections(&self) -> Result<Value, YadleError> {
        let req_url = self.collection_url(Segment::All.as_ref(), &[])?;
        self.api().get_json(req_url).await
    }

    /// Adds members to an existing collection
    pub async fn add_collection_members(
        &self,
        name: &str,
        members: &CollectionMembers,
    ) -> Result<Value, YadleError> {
        let req_url = self.collection_url(name, &[])?;
        self.api()
            .send_json(Method::PATCH, req_url, Some(members))
            .await
    }

    /// Removes members from a collection
    pub async fn remove_collection_members(
        &self,
        name: &str,
        members: &CollectionMembers,
    ) -> Result<Value, YadleError> {
        let req_url = self.collection_url(name, &[])?;
        self.api()
            .send_json(Method::DELETE, req_url, Some(members))
            .await
    }

    pub async fn rename_collection(&self, name: &str, new_name: &str) -> Result<Value, YadleError> {
        let req_url = self.collection_url(name, &[Segment::NewName.as_ref(), new_name])?;
        self.api()
            .send_json::<(), _>(Method::PATCH, req_url, None)
            .await
    }

    /// Deletes an entire collection
    pub async fn delete_collection(&self, name: &str) -> Result<Value, YadleError> {
        let req_url = self.collection_url(name, &[Segment::Entire.as_ref()])?;
        self.api()
            .send_json::<(), _>(Method::DELETE, req_url, None)
            .await
    }
}
