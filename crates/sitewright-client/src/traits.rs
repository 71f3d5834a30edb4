//! Site client traits
//!
//! Capability-based trait definitions for remote collaboration-site
//! clients. Implementations only provide the capabilities the target
//! service supports; consumers requiring the whole surface bound on
//! [`FullSiteClient`].

use async_trait::async_trait;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::ClientResult;
use crate::ids::{ContentTypeId, FieldId, ListId, NavigationNodeId, ViewId};
use crate::types::{
    ContentTypeInfo, CustomActionDefinition, EnsuredList, FieldInfo, FieldUpdate, ListInfo,
    NavigationMenu, PageInfo, SettingsMap, ViewInfo, ViewSettings,
};

/// Base trait for all site clients.
#[async_trait]
pub trait SiteClient: Send + Sync {
    /// Absolute url of the site this client targets.
    fn site_url(&self) -> &str;

    /// Test the connection to the remote site.
    ///
    /// Returns `Ok(())` if the site is reachable with the client's
    /// credentials, or an error describing what went wrong.
    async fn test_connection(&self) -> ClientResult<()>;
}

/// Capability for list-level operations.
#[async_trait]
pub trait ListOps: SiteClient {
    /// Ensure a list with the given title exists.
    ///
    /// When absent, the list is created with the supplied description,
    /// template and settings. When present, the existing list is left
    /// structurally unchanged.
    ///
    /// # Returns
    /// The list identity plus whether this call created it.
    async fn ensure_list(
        &self,
        title: &str,
        description: &str,
        template: u32,
        content_types_enabled: bool,
        settings: &SettingsMap,
    ) -> ClientResult<EnsuredList>;

    /// Look up a list by title.
    async fn list_by_title(&self, title: &str) -> ClientResult<Option<ListInfo>>;
}

/// Capability for managing the content types associated with a list.
#[async_trait]
pub trait ContentTypeOps: SiteClient {
    /// Get the full set of content types currently associated with a list.
    async fn content_types(&self, list: &ListId) -> ClientResult<Vec<ContentTypeInfo>>;

    /// Associate an available content type with a list.
    ///
    /// Associating an already-associated content type is a no-op, not an
    /// error.
    async fn add_available_content_type(
        &self,
        list: &ListId,
        content_type_id: &ContentTypeId,
    ) -> ClientResult<ContentTypeInfo>;

    /// Remove a content type association from a list.
    async fn remove_content_type(
        &self,
        list: &ListId,
        content_type_id: &ContentTypeId,
    ) -> ClientResult<()>;
}

/// Capability for field operations on a list.
#[async_trait]
pub trait FieldOps: SiteClient {
    /// Create a field on a list from its raw markup definition.
    ///
    /// When a field with the same internal name already exists on the
    /// list, its definition is replaced and its id retained, so repeated
    /// provisioning runs do not accumulate duplicates.
    ///
    /// # Returns
    /// The field's identity, including the remote-assigned id.
    async fn create_field_from_markup(&self, list: &ListId, markup: &str)
        -> ClientResult<FieldInfo>;

    /// Apply a partial update to an existing field.
    async fn update_field(
        &self,
        list: &ListId,
        field: &FieldId,
        update: &FieldUpdate,
    ) -> ClientResult<()>;
}

/// Capability for view operations on a list.
#[async_trait]
pub trait ViewOps: SiteClient {
    /// Look up a view by title.
    async fn view_by_title(&self, list: &ListId, title: &str) -> ClientResult<Option<ViewInfo>>;

    /// Create a new view on a list.
    async fn add_view(
        &self,
        list: &ListId,
        title: &str,
        personal_view: bool,
        settings: &ViewSettings,
    ) -> ClientResult<ViewInfo>;

    /// Update an existing view's settings, preserving its identity.
    async fn update_view(
        &self,
        list: &ListId,
        view: &ViewId,
        settings: &ViewSettings,
    ) -> ClientResult<()>;

    /// Remove every field from a view.
    async fn remove_all_view_fields(&self, list: &ListId, view: &ViewId) -> ClientResult<()>;

    /// Append a field to a view.
    ///
    /// Order of addition determines the view's display order.
    async fn add_view_field(
        &self,
        list: &ListId,
        view: &ViewId,
        internal_name: &str,
    ) -> ClientResult<()>;
}

/// Capability for applying a site theme.
#[async_trait]
pub trait ThemeOps: SiteClient {
    /// Apply a theme described by its resource locators.
    async fn apply_theme(
        &self,
        color_palette_url: &str,
        font_scheme_url: &str,
        background_image_url: &str,
        share_generated: bool,
    ) -> ClientResult<()>;
}

/// Capability for rebuilding site navigation menus.
#[async_trait]
pub trait NavigationOps: SiteClient {
    /// Remove every node from a navigation menu.
    async fn clear_navigation(&self, menu: NavigationMenu) -> ClientResult<()>;

    /// Add a node to a navigation menu.
    ///
    /// With `parent` set, the node is nested under that node; otherwise it
    /// is appended at the top level. Order of addition determines menu
    /// order.
    async fn add_navigation_node(
        &self,
        menu: NavigationMenu,
        parent: Option<NavigationNodeId>,
        title: &str,
        url: &str,
    ) -> ClientResult<NavigationNodeId>;
}

/// Capability for site-level settings.
#[async_trait]
pub trait WebSettingsOps: SiteClient {
    /// Apply a settings map to the site, verbatim.
    async fn update_web_settings(&self, settings: &SettingsMap) -> ClientResult<()>;
}

/// Capability for site custom actions.
#[async_trait]
pub trait CustomActionOps: SiteClient {
    /// Names of the custom actions currently registered on the site.
    async fn custom_action_names(&self) -> ClientResult<Vec<String>>;

    /// Register a custom action on the site.
    async fn add_custom_action(&self, action: &CustomActionDefinition) -> ClientResult<()>;
}

/// Capability for site feature activation.
#[async_trait]
pub trait FeatureOps: SiteClient {
    /// Activate a feature by id.
    async fn activate_feature(&self, feature_id: Uuid, force: bool) -> ClientResult<()>;

    /// Deactivate a feature by id.
    async fn deactivate_feature(&self, feature_id: Uuid, force: bool) -> ClientResult<()>;
}

/// Capability for page provisioning.
#[async_trait]
pub trait PageOps: SiteClient {
    /// Ensure a page exists at the given url inside a folder.
    async fn ensure_page(&self, folder: &str, url: &str) -> ClientResult<PageInfo>;

    /// Set field values on an existing page.
    async fn update_page_fields(
        &self,
        url: &str,
        fields: &BTreeMap<String, String>,
    ) -> ClientResult<()>;
}

/// Marker trait for clients that support the full provisioning surface.
pub trait FullSiteClient:
    ListOps
    + ContentTypeOps
    + FieldOps
    + ViewOps
    + ThemeOps
    + NavigationOps
    + WebSettingsOps
    + CustomActionOps
    + FeatureOps
    + PageOps
{
}

// Blanket implementation for any client that implements every capability
impl<T> FullSiteClient for T where
    T: ListOps
        + ContentTypeOps
        + FieldOps
        + ViewOps
        + ThemeOps
        + NavigationOps
        + WebSettingsOps
        + CustomActionOps
        + FeatureOps
        + PageOps
{
}
