// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("title '{0}' contains nothing usable for a slug")]
    UnsluggableTitle(String),
    #[error("no free slug for '{base}' after {probes} suffixed candidates")]
    SlugSpaceExhausted { base: String, probes: u32 },
    #[error("slug already taken: {0}")]
    SlugTaken(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
