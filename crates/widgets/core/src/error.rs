//! Error types for component registration and document operations.
//!
//! Rendering itself has no error type: missing or malformed attributes are
//! recovered locally and produce empty slots.
use crate::dom::HostId;

/// Errors raised while registering a component definition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("'{tag}' has already been defined as a custom element")]
    AlreadyDefined { tag: String },

    #[error("'{tag}' is not a valid custom element name")]
    InvalidTagName { tag: String },
}

/// Errors raised when attaching an encapsulated scope.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShadowError {
    #[error("<{tag}> already has a shadow root")]
    AlreadyAttached { tag: String },
}

/// Errors raised by document-level operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("{0} is not attached to this document")]
    UnknownHost(HostId),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
