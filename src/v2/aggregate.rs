/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::YadleError;
use crate::v2::{ApiCode, Client, RawQuery, Segment};
use reqwest::{Method, Url};
use serde_json::Value;

/// Returns the `aggregate_id` field of a create aggregate response
pub fn aggregate_id(response: &Value) -> Result<&str, YadleError> {
    response
        .get("aggregate_id")
        .and_then(Value::as_str)
        .ok_or(YadleError::ResponseFieldMissing("aggregate_id"))
}

/// Primary file of an aggregate after an edit primary call.
///
/// The primary only moves to `candidate` when the response code is 200.
pub fn primary_after_edit(head: &str, candidate: &str, response: &Value) -> String {
    match ApiCode::from_response(response) {
        Ok(ApiCode::Ok) => candidate.to_string(),
        _ => head.to_string(),
    }
}

// Aggregates are reached through their primary file
impl Client {
    fn aggregate_url(&self, file_id: &str, tail: &[&str]) -> Result<Url, YadleError> {
        let mut path = format!("/file/{}/aggregate", file_id);
        for segment in tail {
            path.push('/');
            path.push_str(segment);
        }
        self.api().url(&path, &RawQuery::new())
    }

    /// Creates an aggregate with `file_id` as the primary file
    pub async fn create_aggregate<S: AsRef<str>>(
        &self,
        file_id: &str,
        members: &[S],
    ) -> Result<Value, YadleError> {
        let req_url = self.aggregate_url(file_id, &[Segment::New.as_ref()])?;
        let members: Vec<&str> = members.iter().map(AsRef::as_ref).collect();
        self.api()
            .send_json(Method::POST, req_url, Some(&members))
            .await
    }

    pub async fn aggregate(&self, file_id: &str, aggregate_id: &str) -> Result<Value, YadleError> {
        let req_url = self.aggregate_url(file_id, &[aggregate_id])?;
        self.api().get_json(req_url).await
    }

    /// Returns all aggregates associated with a file
    pub async fn aggregates(&self, file_id: &str) -> Result<Value, YadleError> {
        let req_url = self.aggregate_url(file_id, &[Segment::All.as_ref()])?;
        self.api().get_json(req_url).await
    }

    pub async fn add_aggregate_members<S: AsRef<str>>(
        &self,
        file_id: &str,
        aggregate_id: &str,
        files: &[S],
    ) -> Result<Value, YadleError> {
        let req_url = self.aggregate_url(file_id, &[aggregate_id])?;
        let files: Vec<&str> = files.iter().map(AsRef::as_ref).collect();
        self.api()
            .send_json(Method::PATCH, req_url, Some(&files))
            .await
    }

    pub async fn remove_aggregate_members<S: AsRef<str>>(
        &self,
        file_id: &str,
        aggregate_id: &str,
        files: &[S],
    ) -> Result<Value, YadleError> {
        let req_url = self.aggregate_url(file_id, &[aggregate_id])?;
        let files: Vec<&str> = files.iter().map(AsRef::as_ref).collect();
        self.api()
            .send_json(Method::DELETE, req_url, Some(&files))
            .await
    }

    /// Changes the primary file of an aggregate.
    ///
    /// The new primary file must already be a member of the aggregate.
    pub async fn edit_aggregate_primary(
        &self,
        file_id: &str,
        aggregate_id: &str,
        new_primary: &str,
    ) -> Result<Value, YadleError> {
        let req_url = self.aggregate_url(file_id, &[aggregate_id, Segment::EditPrimary.as_ref()])?;
        self.api()
            .send_json(Method::PATCH, req_url, Some(&[new_primary]))
            .await
    }

    /// Deletes an entire aggregate. The member files themselves are untouched.
    pub async fn delete_aggregate(
        &self,
        file_id: &str,
        aggregate_id: &str,
    ) -> Result<Value, YadleError> {
        let req_url = self.aggregate_url(file_id, &[aggregate_id, Segment::Entire.as_ref()])?;
        self.api()
            .send_json::<(), _>(Method::DELETE, req_url, None)
            .await
    }
}
