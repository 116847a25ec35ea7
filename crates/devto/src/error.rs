use devto_core::payload::ArgumentError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Dev.to API error [{status}]: {body}")]
    UpstreamHttp { status: u16, body: String },

    #[error("Dev.to API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Unexpected response from Dev.to API: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("DEV_TO_API_KEY is not set; an API key is required to create or update articles")]
    MissingApiKey,
}

impl Error {
    /// Status code of an upstream HTTP error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ArgumentError> for Error {
    fn from(err: ArgumentError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}
