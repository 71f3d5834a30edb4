//! # Site Client Boundary
//!
//! Core abstractions for talking to a remote collaboration site.
//!
//! This crate defines the capability surface a provisioning engine needs
//! from the site's object-management service: looking lists up and
//! creating them, associating content types, creating fields from markup
//! definitions, managing views and their field sets, and the simpler
//! site-level operations (theme, navigation, settings, custom actions,
//! features, pages).
//!
//! The wire protocol belongs to the concrete client implementation, not
//! to this crate; everything here is shape, identifiers and errors.
//!
//! ## Architecture
//!
//! The surface is split into capability traits so a client only
//! implements what its target service supports:
//!
//! - [`SiteClient`] - Base trait all clients implement
//! - [`ListOps`], [`ContentTypeOps`], [`FieldOps`], [`ViewOps`] - the list
//!   provisioning surface
//! - [`ThemeOps`], [`NavigationOps`], [`WebSettingsOps`],
//!   [`CustomActionOps`], [`FeatureOps`], [`PageOps`] - site-level
//!   operations
//! - [`FullSiteClient`] - marker for clients implementing all of the above
//!
//! ## Crate Organization
//!
//! - [`ids`] - Type-safe identifiers (`ListId`, `FieldId`, `ViewId`,
//!   `ContentTypeId`)
//! - [`types`] - Value types (`SettingValue`, info records, partial
//!   updates)
//! - [`error`] - Error types with transient/permanent classification
//! - [`traits`] - Client capability traits

pub mod error;
pub mod ids;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
///
/// ```
/// use sitewright_client::prelude::*;
/// ```
pub mod prelude {
    // IDs
    pub use crate::ids::{ContentTypeId, FieldId, ListId, NavigationNodeId, ViewId};

    // Error handling
    pub use crate::error::{ClientError, ClientResult};

    // Traits
    pub use crate::traits::{
        ContentTypeOps, CustomActionOps, FeatureOps, FieldOps, FullSiteClient, ListOps,
        NavigationOps, PageOps, SiteClient, ThemeOps, ViewOps, WebSettingsOps,
    };

    // Value types
    pub use crate::types::{
        ContentTypeInfo, CustomActionDefinition, EnsuredList, FieldInfo, FieldUpdate, ListInfo,
        NavigationMenu, PageInfo, SettingValue, SettingsMap, ViewInfo, ViewSettings,
    };
}

// Re-export async_trait for client implementors
pub use async_trait::async_trait;
