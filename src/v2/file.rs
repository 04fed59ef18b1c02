/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::YadleError;
use crate::v2::{Client, CollectionMembers, HeaderStyle, RawQuery};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The part of a file document describing where copies of the file live.
///
/// Yadle tracks every copy of a file, keyed by device id and then by path id.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct FileDocument {
    #[serde(default)]
    pub device: BTreeMap<String, DeviceFiles>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct DeviceFiles {
    #[serde(default)]
    pub files: BTreeMap<String, FileInstance>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FileInstance {
    pub dir: String,
}

impl FileDocument {
    /// `(device id, path id)` of every copy stored directly in `dir`
    pub fn instances_in<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.device.iter().flat_map(move |(device_id, device)| {
            device
                .files
                .iter()
                .filter(move |(_, instance)| instance.dir == dir)
                .map(move |(path_id, _)| (device_id.as_str(), path_id.as_str()))
        })
    }
}

/// A file found by a directory listing
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: String,
}

// The directory view answers either with a bare list or a view body holding `rows`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum DirectoryListing {
    Entries(Vec<DirectoryEntry>),
    View { rows: Vec<DirectoryEntry> },
}

impl From<DirectoryListing> for Vec<DirectoryEntry> {
    fn from(listing: DirectoryListing) -> Self {
        match listing {
            DirectoryListing::Entries(entries) => entries,
            DirectoryListing::View { rows } => rows,
        }
    }
}

impl Client {
    const FILE_URI: &'static str = "/file";

    /// Returns the file document, or `None` when the server answers with an error status
    pub async fn file_info(&self, file_id: &str) -> Result<Option<Value>, YadleError> {
        let req_url = self
            .api()
            .url(&format!("{}/{}", Self::FILE_URI, file_id), &RawQuery::new())?;
        self.api().get_optional(req_url, HeaderStyle::NoCache).await
    }

    /// Lists the files within the first level of a directory on a device.
    ///
    /// `dir` must end with a slash. Returns `None` when the server answers with an error status.
    pub async fn files_in_directory(
        &self,
        org: &str,
        device_id: &str,
        dir: &str,
    ) -> Result<Option<Vec<DirectoryEntry>>, YadleError> {
        let key = format!("{}_{}", device_id, dir);
        let query = RawQuery::new()
            .opt("key", Some(urlencoding::encode(&key).as_ref()))
            .opt("reduce", Some("false"));
        let req_url = self.api().url(
            &format!(
                "/utility/view/{}_catalog/_design/path_to_id/_view/path_to_id3",
                org
            ),
            &query,
        )?;
        debug!("Listing directory {} on device {}", dir, device_id);
        Ok(self
            .api()
            .get_optional::<DirectoryListing>(req_url, HeaderStyle::Plain)
            .await?
            .map(Into::into))
    }

    /// Collects the copies of the given files that live directly in `dir`.
    ///
    /// Yadle tracks all copies of a file, so only the instances within `dir` are kept.
    /// Files whose document can't be retrieved are skipped.
    pub async fn matching_file_instances(
        &self,
        files: &[DirectoryEntry],
        dir: &str,
    ) -> Result<CollectionMembers, YadleError> {
        let mut members = CollectionMembers::new();
        for file in files {
            let Some(doc) = self.file_info(&file.id).await? else {
                warn!("Skipping {}, no file document", file.id);
                continue;
            };
            let doc: FileDocument = serde_json::from_value(doc)?;
            for (device_id, path_id) in doc.instances_in(dir) {
                members.insert(&file.id, device_id, path_id);
            }
        }
        Ok(members)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn instances_in_directory() {
        let doc: FileDocument = serde_json::from_value(json!({
            "_id": "f1",
            "device": {
                "d1": { "files": {
                    "p1": { "dir": "/data/" },
                    "p2": { "dir": "/other/" }
                }},
                "d2": { "files": { "p3": { "dir": "/data/" } } }
            }
        }))
        .unwrap();
        let found: Vec<_> = doc.instances_in("/data/").collect();
        assert_eq!(found, vec![("d1", "p1"), ("d2", "p3")]);
    }

    #[test]
    fn directory_listing_shapes() {
        let bare: DirectoryListing = serde_json::from_value(json!([{"id": "a"}])).unwrap();
        let view: DirectoryListing =
            serde_json::from_value(json!({"total_rows": 1, "rows": [{"id": "a", "key": "k"}]}))
                .unwrap();
        let expected = vec![DirectoryEntry { id: "a".into() }];
        assert_eq!(Vec::<DirectoryEntry>::from(bare), expected);
        assert_eq!(Vec::<DirectoryEntry>::from(view), expected);
    }
}
