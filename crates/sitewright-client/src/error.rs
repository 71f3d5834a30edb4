//! Client error types
//!
//! Error definitions with transient/permanent classification.

use thiserror::Error;

use crate::ids::{ContentTypeId, FieldId};

/// Error that can occur during remote site operations.
#[derive(Debug, Error)]
pub enum ClientError {
    // Connection errors (usually transient)
    /// Failed to establish a connection to the remote site.
    #[error("connection failed: {message}")]
    ConnectionFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// Remote site is temporarily unavailable.
    #[error("remote site unavailable: {message}")]
    SiteUnavailable { message: String },

    // Authorization errors (permanent)
    /// Caller lacks permission for the operation.
    #[error("authorization failed: insufficient permissions for {operation}")]
    AuthorizationFailed { operation: String },

    // Lookup errors
    /// No list with the given title exists.
    #[error("list not found: {title}")]
    ListNotFound { title: String },

    /// No field with the given id exists on the list.
    #[error("field not found: {field_id}")]
    FieldNotFound { field_id: FieldId },

    /// No view with the given title exists on the list.
    #[error("view '{title}' not found on list {list}")]
    ViewNotFound { list: String, title: String },

    /// Content type is not associated with the list.
    #[error("content type not found: {content_type_id}")]
    ContentTypeNotFound { content_type_id: ContentTypeId },

    // Mutation errors
    /// An object with the same identity already exists.
    #[error("object already exists: {identifier}")]
    AlreadyExists { identifier: String },

    /// The remote site rejected a field definition.
    #[error("field definition rejected: {message}")]
    FieldMarkupRejected { message: String },

    /// A create/update/delete call failed on the remote side.
    #[error("operation failed: {message}")]
    OperationFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal client error.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ClientError {
    /// Create a connection failure without an underlying source.
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a timeout error.
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Create a site-unavailable error.
    pub fn site_unavailable(message: impl Into<String>) -> Self {
        Self::SiteUnavailable {
            message: message.into(),
        }
    }

    /// Create an authorization failure.
    pub fn authorization_failed(operation: impl Into<String>) -> Self {
        Self::AuthorizationFailed {
            operation: operation.into(),
        }
    }

    /// Create a list-not-found error.
    pub fn list_not_found(title: impl Into<String>) -> Self {
        Self::ListNotFound {
            title: title.into(),
        }
    }

    /// Create a view-not-found error.
    pub fn view_not_found(list: impl Into<String>, title: impl Into<String>) -> Self {
        Self::ViewNotFound {
            list: list.into(),
            title: title.into(),
        }
    }

    /// Create an already-exists error.
    pub fn already_exists(identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            identifier: identifier.into(),
        }
    }

    /// Create a rejected-field-definition error.
    pub fn field_markup_rejected(message: impl Into<String>) -> Self {
        Self::FieldMarkupRejected {
            message: message.into(),
        }
    }

    /// Create an operation failure without an underlying source.
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error is transient and the operation may succeed on a
    /// later run.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ClientError::ConnectionFailed { .. }
                | ClientError::Timeout { .. }
                | ClientError::SiteUnavailable { .. }
        )
    }

    /// Check if this error reports a missing object rather than a failed
    /// call.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClientError::ListNotFound { .. }
                | ClientError::FieldNotFound { .. }
                | ClientError::ViewNotFound { .. }
                | ClientError::ContentTypeNotFound { .. }
        )
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
