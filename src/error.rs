use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClearError {
    #[error("request to the drive API failed")]
    Request(#[from] reqwest::Error),

    #[error("response body (status {status}) is not valid JSON")]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("response body (status {0}) is not a JSON object")]
    NotAnObject(u16),

    #[error("response is missing the '{0}' field")]
    MissingField(&'static str),

    #[error("response field '{0}' has an unexpected type")]
    WrongFieldType(&'static str),
}

pub type Result<T> = std::result::Result<T, ClearError>;
