pub mod token;

#[derive(Debug)]
pub enum Error {
    HttpError(reqwest::Error),
    UnexpectedApiResponse {
        expected_type: String,
        json: serde_json::Value,
    },
}

impl Error {
    pub fn unexpected_api_response<T>(json: serde_json::Value) -> Error {
        let expected_type = std::any::type_name::<T>().to_owned();
        Error::UnexpectedApiResponse {
            expected_type,
            json,
        }
    }
}

type TokenResult<T> = std::result::Result<T, Error>;
