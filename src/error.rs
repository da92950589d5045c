use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No usable API token was available, so no request was sent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be sent or the server answered with a non-success status.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid {context} payload: {source}")]
    Shape {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected object `{expected}`, got `{found}`")]
    UnexpectedObject {
        expected: &'static str,
        found: String,
    },

    #[error("unknown subject kind `{0}`")]
    UnknownSubjectKind(String),

    /// A page link pointed away from the API host the client is bound to.
    #[error("page URL `{0}` is not on the API host")]
    ForeignPageUrl(String),
}

impl ValidationError {
    pub(crate) fn shape(context: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| ValidationError::Shape { context, source }
    }
}
