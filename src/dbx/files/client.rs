use async_trait::async_trait;

use crate::dbx::{client::ApiClient, ApiResult, Client};

use super::{
    walk::FolderSource,
    DbxPath, GetMetadataRequest, ListFolderContinueRequest, ListFolderRequest, ListFolderResult,
    Metadata,
};

const BASE_URL: &str = "https://api.dropboxapi.com/2/files";

/// Endpoint client for the `/2/files` namespace. Paths are validated here,
/// before any request goes out, so a malformed path never costs a round-trip.
pub struct FilesClient {
    api: ApiClient,
}

impl FilesClient {
    pub fn new(client: Client, access_token: &str) -> Self {
        Self {
            api: ApiClient::new(client, access_token),
        }
    }

    pub async fn get_metadata(&self, path: &str) -> ApiResult<Metadata> {
        let path = DbxPath::new(path)?;
        let url = format!("{}/get_metadata", BASE_URL);
        self.api
            .post_rpc(
                &url,
                &GetMetadataRequest {
                    path: path.as_str().to_owned(),
                },
            )
            .await
    }

    pub async fn list_folder(&self, path: &str) -> ApiResult<ListFolderResult> {
        let path = DbxPath::new(path)?;
        let url = format!("{}/list_folder", BASE_URL);
        self.api
            .post_rpc(&url, &ListFolderRequest::new(path.as_str()))
            .await
    }

    pub async fn list_folder_continue(&self, cursor: &str) -> ApiResult<ListFolderResult> {
        let url = format!("{}/list_folder/continue", BASE_URL);
        self.api
            .post_rpc(
                &url,
                &ListFolderContinueRequest {
                    cursor: cursor.to_owned(),
                },
            )
            .await
    }
}

#[async_trait]
impl FolderSource for FilesClient {
    async fn get_metadata(&self, path: &str) -> ApiResult<Metadata> {
        FilesClient::get_metadata(self, path).await
    }

    async fn list_folder(&self, path: &str) -> ApiResult<ListFolderResult> {
        FilesClient::list_folder(self, path).await
    }

    async fn list_folder_continue(&self, cursor: &str) -> ApiResult<ListFolderResult> {
        FilesClient::list_folder_continue(self, cursor).await
    }
}
