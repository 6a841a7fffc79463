#[macro_use]
extern crate log;

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use diesel::result::{DatabaseErrorKind, Error as DBError};
use r2d2::Error as PoolError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    BadRequest(String),
    InternalServerError(String),
    #[display(fmt = "Method not allowed")]
    MethodNotAllowed,
    NotFound(String),
    PoolError(String),
    UnprocessableEntity(String),
    #[display(fmt = "{:?}", _0)]
    ValidationError(Vec<String>),
    BlockingError(String),
}

/// Body returned for every failed request. The message is fixed per status
/// code, the detail carried by `Error` only goes to the log.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::NOT_FOUND => "Resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable entity",
            _ => "Internal server error",
        };

        ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::UnprocessableEntity(_) | Error::ValidationError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{:?}", self);
        } else {
            warn!("{}: {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(ErrorResponse::new(status))
    }
}

// Convert DBErrors to our Error type
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::DatabaseError(kind, info) => {
                let message = info.details().unwrap_or_else(|| info.message()).to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => Error::BadRequest(message),
                    DatabaseErrorKind::ForeignKeyViolation => Error::UnprocessableEntity(message),
                    _ => Error::InternalServerError(message),
                }
            }
            DBError::NotFound => Error::NotFound("Record not found".into()),
            _ => Error::InternalServerError("Unknown database error".into()),
        }
    }
}

// Convert PoolError to our Error type
impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(error: BlockingError) -> Error {
        Error::BlockingError(error.to_string())
    }
}
