use crate::dbx::{Client, DeserializedResponse};

use super::{Error, TokenResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;

const AUTHORIZE_URL: &str = "https://www.dropbox.com/oauth2/authorize";
const TOKEN_URL: &str = "https://api.dropboxapi.com/oauth2/token";

#[derive(Deserialize, Debug, Clone)]
pub struct Token {
    access_token: String,
    #[allow(dead_code)]
    token_type: String,
    #[serde(
        default,
        deserialize_with = "from_expires_in",
        rename(deserialize = "expires_in")
    )]
    expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    account_id: Option<String>,
    #[serde(default)]
    uid: Option<String>,
}

/// Long-lived tokens come without `expires_in` and never expire.
fn from_expires_in<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let expires_in: Option<i64> = Deserialize::deserialize(deserializer)?;
    Ok(expires_in.map(|seconds| Utc::now() + chrono::Duration::seconds(seconds)))
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.expiry {
            None => write!(f, "Valid Token without expiry"),
            Some(expiry) if self.is_valid() => write!(f, "Valid Token expires at {}", expiry),
            Some(expiry) => write!(f, "Invalid Token expired at {}", expiry),
        }
    }
}

impl Token {
    pub fn access_token(&self) -> String {
        self.access_token.to_owned()
    }

    pub fn is_valid(&self) -> bool {
        match self.expiry {
            None => true,
            Some(expiry) => expiry - chrono::Duration::seconds(30) > Utc::now(),
        }
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }
}

/// App key/secret pair registered in the Dropbox app console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCredentials {
    app_key: String,
    app_secret: String,
}

impl AppCredentials {
    pub fn new(app_key: &str, app_secret: &str) -> Self {
        Self {
            app_key: app_key.to_owned(),
            app_secret: app_secret.to_owned(),
        }
    }

    /// No-redirect flow: the user approves in the browser and copies the
    /// authorization code back into the terminal.
    pub fn authorize_url(&self) -> String {
        format!(
            "{}?client_id={}&response_type=code",
            AUTHORIZE_URL,
            urlencoding::encode(&self.app_key)
        )
    }

    /// The code is sent as-is; an empty or garbage code is rejected by the
    /// token endpoint, not here.
    pub async fn exchange_code(&self, client: &Client, code: &str) -> TokenResult<Token> {
        let form = [
            ("code", code),
            ("grant_type", "authorization_code"),
            ("client_id", self.app_key.as_str()),
            ("client_secret", self.app_secret.as_str()),
        ];
        let token: DeserializedResponse<Token> = client
            .http
            .post(TOKEN_URL)
            .form(&form)
            .send()
            .await
            .map_err(Error::HttpError)?
            .json()
            .await
            .map_err(Error::HttpError)?;
        token
            .into_result()
            .map_err(Error::unexpected_api_response::<Token>)
    }
}
