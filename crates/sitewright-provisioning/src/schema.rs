//! Declarative schema data model.
//!
//! The schema document maps object-group names to ordered declaration
//! sequences. Field names serialize exactly as the document format spells
//! them, so a schema file deserializes without a mapping layer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

use sitewright_client::ids::{ContentTypeId, FieldId};
use sitewright_client::types::{CustomActionDefinition, SettingsMap, ViewSettings};

use crate::error::{ProvisioningError, ProvisioningResult};

/// Root schema document for one provisioning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Declared lists, in processing order.
    #[serde(rename = "Lists", skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<ListSpec>>,

    /// Declared navigation menus.
    #[serde(rename = "Navigation", skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationSpec>,

    /// Declared site theme.
    #[serde(rename = "ComposedLook", skip_serializing_if = "Option::is_none")]
    pub composed_look: Option<ComposedLookSpec>,

    /// Declared site custom actions.
    #[serde(rename = "CustomActions", skip_serializing_if = "Option::is_none")]
    pub custom_actions: Option<Vec<CustomActionSpec>>,

    /// Declared site-level settings, applied verbatim.
    #[serde(rename = "WebSettings", skip_serializing_if = "Option::is_none")]
    pub web_settings: Option<SettingsMap>,

    /// Declared feature activations and deactivations.
    #[serde(rename = "Features", skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<FeatureSpec>>,

    /// Declared pages.
    #[serde(rename = "Pages", skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<PageSpec>>,
}

impl Schema {
    /// Validate the document before any remote call is made.
    ///
    /// List titles are the natural key for both remote lookup and token
    /// resolution, so a duplicate makes the whole run ambiguous and is
    /// rejected outright.
    pub fn validate(&self) -> ProvisioningResult<()> {
        if let Some(lists) = &self.lists {
            let mut seen = HashSet::new();
            for list in lists {
                if !seen.insert(list.title.as_str()) {
                    return Err(ProvisioningError::duplicate_list_title(&list.title));
                }
            }
        }
        Ok(())
    }
}

/// Declaration of one list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSpec {
    /// List title; unique within the schema.
    #[serde(rename = "Title")]
    pub title: String,

    /// List description.
    #[serde(rename = "Description", default)]
    pub description: String,

    /// Numeric list-template identifier.
    #[serde(rename = "Template")]
    pub template: u32,

    /// Whether content-type management is enabled on the list.
    #[serde(rename = "ContentTypesEnabled", default)]
    pub content_types_enabled: bool,

    /// Whether undeclared content types are pruned after the declared
    /// bindings are applied.
    #[serde(rename = "RemoveExistingContentTypes", default)]
    pub remove_existing_content_types: bool,

    /// Content types to associate with the list.
    #[serde(
        rename = "ContentTypeBindings",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub content_type_bindings: Vec<ContentTypeBinding>,

    /// Raw field-definition markup strings, in creation order.
    #[serde(rename = "Fields", default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,

    /// Overrides for fields already present on the list.
    #[serde(rename = "FieldRefs", default, skip_serializing_if = "Vec::is_empty")]
    pub field_refs: Vec<FieldRefSpec>,

    /// Views to reconcile on the list.
    #[serde(rename = "Views", default, skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<ViewSpec>,

    /// Additional list settings, applied verbatim.
    #[serde(
        rename = "AdditionalSettings",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub additional_settings: SettingsMap,
}

/// Declares that a content type must be associated with a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeBinding {
    /// Hierarchical content-type identifier.
    #[serde(rename = "ContentTypeID")]
    pub content_type_id: ContentTypeId,

    /// Optional display name.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Override record for a field that already exists on a list.
///
/// Field refs update display state only; they never create fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRefSpec {
    /// Remote identifier of the existing field.
    #[serde(rename = "ID")]
    pub id: FieldId,

    /// New hidden flag.
    #[serde(rename = "Hidden", default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// New required flag.
    #[serde(rename = "Required", default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// New displayed title.
    #[serde(
        rename = "DisplayName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name: Option<String>,
}

/// Declaration of one view on a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewSpec {
    /// View title; unique within the list.
    #[serde(rename = "Title")]
    pub title: String,

    /// Whether the view is personal rather than shared.
    #[serde(rename = "PersonalView", default)]
    pub personal_view: bool,

    /// Internal field names in display order. The remote view's field
    /// order must end up exactly equal.
    #[serde(rename = "ViewFields", default, skip_serializing_if = "Vec::is_empty")]
    pub view_fields: Vec<String>,

    /// View settings (query, row limit, paging).
    #[serde(rename = "AdditionalSettings", default)]
    pub additional_settings: ViewSettings,
}

/// Declared navigation menus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSpec {
    /// Quick launch nodes, in display order.
    #[serde(rename = "QuickLaunch", skip_serializing_if = "Option::is_none")]
    pub quick_launch: Option<Vec<NavigationNodeSpec>>,

    /// Top navigation bar nodes, in display order.
    #[serde(rename = "TopNavigationBar", skip_serializing_if = "Option::is_none")]
    pub top_navigation_bar: Option<Vec<NavigationNodeSpec>>,
}

/// One node of a navigation menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationNodeSpec {
    /// Displayed title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Target url.
    #[serde(rename = "Url")]
    pub url: String,

    /// Child nodes, nested under this one.
    #[serde(rename = "Children", default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationNodeSpec>,
}

/// Declared site theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedLookSpec {
    /// Color palette resource locator.
    #[serde(rename = "ColorPaletteUrl")]
    pub color_palette_url: String,

    /// Font scheme resource locator.
    #[serde(rename = "FontSchemeUrl")]
    pub font_scheme_url: String,

    /// Background image resource locator.
    #[serde(rename = "BackgroundImageUrl")]
    pub background_image_url: String,
}

/// Declaration of one site custom action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomActionSpec {
    /// Unique action name within the site.
    #[serde(rename = "Name")]
    pub name: String,

    /// Displayed title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Optional description.
    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Location identifier the action attaches to.
    #[serde(rename = "Location")]
    pub location: String,

    /// Target url of the action.
    #[serde(rename = "Url")]
    pub url: String,

    /// Additional settings, applied verbatim.
    #[serde(
        rename = "AdditionalSettings",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub additional_settings: SettingsMap,
}

impl CustomActionSpec {
    /// Convert to the client-side definition record.
    pub fn to_definition(&self) -> CustomActionDefinition {
        CustomActionDefinition {
            name: self.name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            url: self.url.clone(),
            settings: self.additional_settings.clone(),
        }
    }
}

/// Declaration of one feature activation or deactivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Feature identifier.
    pub id: Uuid,

    /// Deactivate instead of activate.
    #[serde(default)]
    pub deactivate: bool,

    /// Force the operation even when the feature is already in the
    /// requested state.
    #[serde(default)]
    pub force: bool,
}

/// Declaration of one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpec {
    /// Folder the page lives in.
    #[serde(rename = "Folder")]
    pub folder: String,

    /// Site-relative url of the page.
    #[serde(rename = "Url")]
    pub url: String,

    /// Field values to set on the page after it exists.
    #[serde(rename = "Fields", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}
