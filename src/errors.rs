use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Db(rusqlite::Error),
    Pool(r2d2::Error),
    UnknownDialogue(i64),
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Pool(e) => write!(f, "Pool error: {e}"),
            // Message wording (including the "int" typo) is part of the API
            // contract; clients match on it.
            AppError::UnknownDialogue(id) => {
                write!(f, "Dialogue id {id} does not exist int the current session!")
            }
            AppError::Validation(e) => write!(f, "Validation error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::UnknownDialogue(_) => HttpResponse::NotFound()
                .json(serde_json::json!({ "error": self.to_string() })),
            AppError::Validation(_) => HttpResponse::UnprocessableEntity()
                .json(serde_json::json!({ "error": self.to_string() })),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e)
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Pool(e)
    }
}
