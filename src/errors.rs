use crate::day::DayKey;
use crate::editor::EditError;
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("{day} has no exercise at position {exercise}")]
    UnknownExercise { day: DayKey, exercise: usize },

    #[error("exercise {exercise} on {day} has no set {set}")]
    UnknownSet {
        day: DayKey,
        exercise: usize,
        set: usize,
    },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let message = err.to_string();
        match err {
            SessionError::Edit(EditError::EmptyName) => Self::bad_request(message),
            SessionError::Edit(EditError::EditModeInactive | EditError::Cancelled(_)) => {
                Self::conflict(message)
            }
            SessionError::Edit(EditError::NotFound(_))
            | SessionError::UnknownExercise { .. }
            | SessionError::UnknownSet { .. } => Self::not_found(message),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
