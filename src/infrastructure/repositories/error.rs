use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const POSTS_SLUG_COLUMN: &str = "posts.slug";
const USERS_USERNAME_COLUMN: &str = "users.username";

/// Maps SQLite failures onto domain errors. SQLite reports unique violations
/// as `UNIQUE constraint failed: <table>.<column>`, so the column is matched
/// in the message.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            let kind = db_err.kind();
            let unique = matches!(kind, ErrorKind::UniqueViolation)
                || message.contains("UNIQUE constraint failed");

            if unique {
                return if message.contains(POSTS_SLUG_COLUMN) {
                    DomainError::SlugTaken("slug already exists".into())
                } else if message.contains(USERS_USERNAME_COLUMN) {
                    DomainError::Conflict("username already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            match kind {
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("author not found".into())
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    DomainError::Validation(message.to_string())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
