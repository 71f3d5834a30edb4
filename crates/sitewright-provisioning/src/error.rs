//! Provisioning error types.

use thiserror::Error;

use sitewright_client::error::ClientError;

/// Errors that can occur while applying a schema to a site.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// A remote operation against the target site failed.
    #[error("remote operation failed for {object}: {source}")]
    Remote {
        /// Which object the engine was working on.
        object: String,
        #[source]
        source: ClientError,
    },

    /// A field definition could not be parsed into structured form.
    #[error("malformed field definition on list '{list}': {message}")]
    MalformedFieldMarkup { list: String, message: String },

    /// Two list declarations share a title.
    #[error("duplicate list title in schema: '{title}'")]
    DuplicateListTitle { title: String },

    /// A later phase ran for a list whose identity was never recorded.
    #[error("list '{title}' has no recorded identity in this run")]
    ListNotProvisioned { title: String },
}

impl ProvisioningError {
    /// Create a remote-operation error.
    pub fn remote(object: impl Into<String>, source: ClientError) -> Self {
        Self::Remote {
            object: object.into(),
            source,
        }
    }

    /// Create a malformed-field-definition error.
    pub fn malformed_field_markup(list: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedFieldMarkup {
            list: list.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate-list-title error.
    pub fn duplicate_list_title(title: impl Into<String>) -> Self {
        Self::DuplicateListTitle {
            title: title.into(),
        }
    }

    /// Create a missing-list-identity error.
    pub fn list_not_provisioned(title: impl Into<String>) -> Self {
        Self::ListNotProvisioned {
            title: title.into(),
        }
    }

    /// Check if re-running the schema may succeed without changes.
    pub fn is_transient(&self) -> bool {
        matches!(self, ProvisioningError::Remote { source, .. } if source.is_transient())
    }
}

/// Result type for provisioning operations.
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;
