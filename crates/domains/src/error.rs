//! # DomainError
//!
//! Centralized error handling for the forum domain.
//! Every failure a use case can report is one of these variants; the HTTP
//! layer maps them to status codes.

use thiserror::Error;

/// Which shape rule a payload broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// A required property is absent, `null`, or an empty string.
    MissingProperty,
    /// A property is present but holds the wrong JSON type.
    WrongType,
}

impl ValidationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            ValidationKind::WrongType => "NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

/// A payload failed an entity's shape check.
///
/// Renders as `<ENTITY>.<KIND>`, e.g. `ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity}.{}", .kind.as_str())]
pub struct ValidationError {
    pub entity: &'static str,
    pub kind: ValidationKind,
    /// The first property that broke the rule.
    pub property: String,
}

impl ValidationError {
    pub fn missing(entity: &'static str, property: impl Into<String>) -> Self {
        Self { entity, kind: ValidationKind::MissingProperty, property: property.into() }
    }

    pub fn wrong_type(entity: &'static str, property: impl Into<String>) -> Self {
        Self { entity, kind: ValidationKind::WrongType, property: property.into() }
    }

    /// Stable machine-readable code used for message translation.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

/// The primary error type for all domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or incomplete input, detected before it is persisted.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Referenced thread or comment does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Caller is not the owner of the resource.
    #[error("{0}")]
    Authorization(String),

    /// No verified caller identity (missing or rejected access token).
    #[error("{0}")]
    Unauthenticated(String),

    /// Infrastructure failure (e.g., DB down, broken row).
    #[error("internal service error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        DomainError::Authorization(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        DomainError::Unauthenticated(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal(message.into())
    }
}

/// A specialized Result type for forum domain logic.
pub type Result<T> = std::result::Result<T, DomainError>;
