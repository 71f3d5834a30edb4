//! # Provisioning Engine
//!
//! Reconciles a remote collaboration site's structural objects against a
//! declarative schema document: lists with their content-type bindings,
//! fields, field-reference overrides and views, plus site theming,
//! navigation, custom actions, web settings, features and pages.
//!
//! The engine inspects the target, creates what is missing, updates what
//! exists and prunes bindings no longer declared. Runs are idempotent by
//! construction: re-applying the same schema to the same site is the
//! recovery path after a partial failure, not a hazard.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐      ┌──────────────────────────┐
//! │    Schema     │─────►│ ProvisioningOrchestrator │
//! └───────────────┘      └─────────────┬────────────┘
//!                                      │ per object group
//!                        ┌─────────────▼────────────┐
//!                        │      object handlers     │
//!                        │  (lists is the core; the │
//!                        │  rest are pass-throughs) │
//!                        └─────────────┬────────────┘
//!                                      │ capability traits
//!                        ┌─────────────▼────────────┐
//!                        │     site client impl     │
//!                        └──────────────────────────┘
//! ```
//!
//! The lists handler runs four phases over the declared list sequence,
//! every list completing one phase before any list enters the next:
//! ensure-list (with content-type bindings), fields, field refs, views.
//! Field definitions may embed `{listid:Title}` placeholders resolved
//! against the identities of lists ensured earlier in the same run.
//!
//! ## Crate Organization
//!
//! - [`schema`] - Data model of the declarative document
//! - [`orchestrator`] - Full-schema runs over the object handlers
//! - [`handlers`] - One handler per object group
//! - [`registry`] - Run-scoped record of provisioned list identities
//! - [`token`] - `{kind:value}` placeholder resolution
//! - [`markup`] - Field-definition markup preparation
//! - [`error`] - Error types

pub mod error;
pub mod handlers;
pub mod markup;
pub mod orchestrator;
pub mod registry;
pub mod schema;
pub mod token;

// Re-exports for convenience
pub use error::{ProvisioningError, ProvisioningResult};
pub use handlers::lists::ListReconciler;
pub use markup::{prepare_field_markup, MarkupError, PreparedField};
pub use orchestrator::{ProvisioningOrchestrator, RunSummary};
pub use registry::ProvisionedListRegistry;
pub use schema::{
    ComposedLookSpec, ContentTypeBinding, CustomActionSpec, FeatureSpec, FieldRefSpec, ListSpec,
    NavigationNodeSpec, NavigationSpec, PageSpec, Schema, ViewSpec,
};
pub use token::TokenResolver;
