#[derive(thiserror::Error, Debug)]
#[error("...")]
pub enum Error {
    #[error("{0}")]
    BadRequest(#[from] BadRequest),

    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Eyre(#[from] eyre::Error),
}

impl Error {
    pub fn bad_request(message: &str) -> Self {
        Error::BadRequest(BadRequest {
            message: message.to_string(),
        })
    }
}

#[derive(thiserror::Error, Debug)]
#[error("Bad request: {message}")]
pub struct BadRequest {
    pub message: String,
}
