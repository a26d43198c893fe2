use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt::{Display, Formatter};

use wc_core::error::Error as CoreError;

/// Errors that the callback API can reply with.
///
/// These can be turned into an [`HttpResponse`].
#[derive(Debug)]
pub enum Error {
    Core(CoreError),
    Prometheus(prometheus::Error),
    MissingEchoStr,
    Unexpected,
}

/// Errors that can occur during setup/running of the callback service.
pub enum CallbackError {
    /// Error during setup, e.g., reading the secrets.
    Setup(String),

    /// IO error.
    StdIO(std::io::Error),
}

impl From<std::io::Error> for CallbackError {
    fn from(e: std::io::Error) -> Self {
        CallbackError::StdIO(e)
    }
}

impl std::fmt::Debug for CallbackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CallbackError::Setup(s) => write!(f, "error during setup: {s}"),
            CallbackError::StdIO(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl From<CoreError> for Error {
    fn from(e: CoreError) -> Self {
        Error::Core(e)
    }
}

/// Show the error as an HTTP response for Actix-web.
impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": true,
            "message": format!("{}", self),
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::Core(CoreError::SignatureMismatch | CoreError::ReceiverMismatch) => {
                StatusCode::UNAUTHORIZED
            }
            Error::Core(CoreError::KeyDecodeError) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Core(_) => StatusCode::BAD_REQUEST,
            Error::MissingEchoStr => StatusCode::BAD_REQUEST,
            Error::Prometheus(_) | Error::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Error::Core(e) => write!(f, "{e}"),
            Error::Prometheus(e) => write!(f, "prometheus error: {e}"),
            Error::MissingEchoStr => write!(f, "no echostr given"),
            Error::Unexpected => write!(f, "unexpected"),
        }
    }
}
