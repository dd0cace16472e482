use serde::{de::DeserializeOwned, Serialize};

use super::{ApiResult, Client, DeserializedResponse, Error};

pub(crate) type AccessToken = String;

const USER_LOCALE_HEADER: &str = "Dropbox-API-User-Locale";

/// RPC transport shared by the files and users endpoint clients. Every
/// endpoint is a POST with a JSON body and a bearer token.
pub(crate) struct ApiClient {
    client: Client,
    token: AccessToken,
}

impl ApiClient {
    pub(crate) fn new(client: Client, access_token: &str) -> Self {
        Self {
            client,
            token: access_token.to_owned(),
        }
    }

    async fn success_response(
        url: &str,
        response: reqwest::Response,
    ) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let summary = response.text().await.map_err(Error::DbxHttpError)?;
        Err(Error::api_error(url, status.as_u16(), summary))
    }

    pub(crate) async fn post_rpc<R, B>(&self, url: &str, body: &B) -> ApiResult<R>
    where
        R: DeserializeOwned,
        B: Serialize,
    {
        let mut request = self.client.http.post(url).bearer_auth(&self.token).json(body);
        if let Some(user_locale) = &self.client.user_locale {
            request = request.header(USER_LOCALE_HEADER, user_locale);
        }
        let response = request.send().await.map_err(Error::DbxHttpError)?;
        let r: DeserializedResponse<R> = Self::success_response(url, response)
            .await?
            .json()
            .await
            .map_err(Error::DbxHttpError)?;
        r.into_result()
            .map_err(|json| Error::unexpected_json::<R>(url, json))
    }
}
