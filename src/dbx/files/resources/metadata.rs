use std::fmt::Display;

use chrono::{DateTime, Utc};

use crate::dbx::{ApiResult, Error};

/// One file-or-folder record returned by the metadata and listing endpoints,
/// discriminated by the `.tag` field on the wire.
#[derive(Debug, PartialEq, Clone, serde::Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum Metadata {
    File(FileMetadata),
    Folder(FolderMetadata),
    Deleted(DeletedMetadata),
}

#[derive(Debug, PartialEq, Clone, serde::Deserialize)]
pub struct FileMetadata {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub path_lower: Option<String>,
    #[serde(default)]
    pub path_display: Option<String>,
    pub client_modified: DateTime<Utc>,
    #[serde(default)]
    pub server_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rev: Option<String>,
    pub size: i64,
}

#[derive(Debug, PartialEq, Clone, serde::Deserialize)]
pub struct FolderMetadata {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub path_lower: Option<String>,
    #[serde(default)]
    pub path_display: Option<String>,
}

#[derive(Debug, PartialEq, Clone, serde::Deserialize)]
pub struct DeletedMetadata {
    pub name: String,
    #[serde(default)]
    pub path_lower: Option<String>,
    #[serde(default)]
    pub path_display: Option<String>,
}

/// One page of a folder listing. The cursor is an opaque continuation token
/// consumed exactly once by `list_folder_continue`.
#[derive(Debug, PartialEq, Clone, serde::Deserialize)]
pub struct ListFolderResult {
    #[serde(default = "Vec::new")]
    pub entries: Vec<Metadata>,
    pub cursor: String,
    pub has_more: bool,
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct GetMetadataRequest {
    pub path: String,
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct ListFolderRequest {
    pub path: String,
    pub recursive: bool,
    pub include_deleted: bool,
}

impl ListFolderRequest {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            recursive: false,
            include_deleted: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct ListFolderContinueRequest {
    pub cursor: String,
}

/// A remote namespace path. The account root is the empty string; everything
/// else is slash-rooted with no empty segment.
///
/// References: `<https://www.dropbox.com/developers/documentation/http/documentation#path-formats>`
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DbxPath(String);

impl DbxPath {
    pub fn new(path: &str) -> ApiResult<Self> {
        if path.is_empty() {
            return Ok(Self(String::new()));
        }

        if path == "/" {
            return Err(Error::invalid_path(
                path,
                "the root folder is addressed as the empty string",
            ));
        }

        if !path.starts_with('/') {
            return Err(Error::invalid_path(
                path,
                "path must be empty or start with '/'",
            ));
        }

        if path.split('/').skip(1).any(str::is_empty) {
            return Err(Error::invalid_path(path, "path contains an empty segment"));
        }

        Ok(Self(path.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for DbxPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
