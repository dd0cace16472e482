pub(crate) mod client;
pub mod files;
pub mod oauth2;
pub mod users;

/// Request configuration built once at process start and passed by reference
/// into every client constructor.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub client_identifier: String,
    pub user_locale: Option<String>,
}

impl RequestConfig {
    pub fn new(client_identifier: &str) -> Self {
        Self {
            client_identifier: client_identifier.to_owned(),
            user_locale: None,
        }
    }

    /// An empty locale means "server default" and is not sent at all.
    pub fn with_user_locale(mut self, user_locale: &str) -> Self {
        self.user_locale = if user_locale.is_empty() {
            None
        } else {
            Some(user_locale.to_owned())
        };
        self
    }
}

pub struct Client {
    pub(self) http: reqwest::Client,
    pub(self) user_locale: Option<String>,
}

impl Client {
    pub fn new(config: &RequestConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.client_identifier.to_owned())
            .build()
            .map_err(Error::DbxHttpError)?;
        Ok(Self {
            http,
            user_locale: config.user_locale.to_owned(),
        })
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum DeserializedResponse<T> {
    Success(T),
    Error(serde_json::Value),
}

impl<T> DeserializedResponse<T> {
    pub fn into_result(self) -> Result<T, serde_json::Value> {
        match self {
            DeserializedResponse::Success(x) => Ok(x),
            DeserializedResponse::Error(e) => Err(e),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    DbxHttpError(reqwest::Error),
    DbxApiError {
        url: String,
        status: u16,
        summary: String,
    },
    DbxUnexpectedJson {
        url: String,
        expected_type: String,
        json: serde_json::Value,
    },
    DbxInvalidPath {
        path: String,
        message: String,
    },
    DbxIoError(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl std::error::Error for Error {}

impl Error {
    fn api_error<T, U>(url: T, status: u16, summary: U) -> Self
    where
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self::DbxApiError {
            url: url.as_ref().to_owned(),
            status,
            summary: summary.as_ref().to_owned(),
        }
    }

    fn unexpected_json<T>(url: &str, json: serde_json::Value) -> Self {
        let expected_type = std::any::type_name::<T>().to_owned();
        Self::DbxUnexpectedJson {
            url: url.to_owned(),
            expected_type,
            json,
        }
    }

    fn invalid_path<T, U>(path: T, message: U) -> Self
    where
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self::DbxInvalidPath {
            path: path.as_ref().to_owned(),
            message: message.as_ref().to_owned(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, Error>;
