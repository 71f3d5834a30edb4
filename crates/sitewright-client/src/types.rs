//! Client value types
//!
//! Records exchanged with the remote site: setting values, object info
//! snapshots, and partial-update payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ids::{ContentTypeId, FieldId, ListId, ViewId};

/// A single setting value accepted by the remote site.
///
/// The declarative document allows arbitrary per-object settings, but the
/// values themselves are restricted to this closed set of primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean setting.
    Bool(bool),
    /// Integer setting.
    Int(i64),
    /// String setting.
    String(String),
    /// Explicit null, used to clear a setting.
    Null,
}

impl SettingValue {
    /// Get the value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Whether this is the explicit null value.
    pub fn is_null(&self) -> bool {
        matches!(self, SettingValue::Null)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Int(i) => write!(f, "{i}"),
            SettingValue::String(s) => write!(f, "{s}"),
            SettingValue::Null => write!(f, "null"),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<i64> for SettingValue {
    fn from(i: i64) -> Self {
        SettingValue::Int(i)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::String(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::String(s)
    }
}

/// Ordered map of setting name to value, applied verbatim to a remote
/// object.
pub type SettingsMap = BTreeMap<String, SettingValue>;

/// Identity snapshot of a list on the remote site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    /// Remote-assigned identifier.
    pub id: ListId,
    /// List title.
    pub title: String,
}

/// Outcome of an ensure-list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredList {
    /// True when the list was created by this call, false when it already
    /// existed.
    pub created: bool,
    /// The list's identity.
    pub list: ListInfo,
}

/// A content type associated with a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeInfo {
    /// Hierarchical identifier.
    pub id: ContentTypeId,
    /// Display name, when the remote site reports one.
    pub name: Option<String>,
}

/// A field present on a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Remote-assigned identifier.
    pub id: FieldId,
    /// Stable internal name.
    pub internal_name: String,
    /// Current displayed title.
    pub title: String,
}

/// A view defined on a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewInfo {
    /// Remote-assigned identifier.
    pub id: ViewId,
    /// View title.
    pub title: String,
    /// Whether the view is personal rather than shared.
    pub personal_view: bool,
}

/// Settings applied to a view on create or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Filter/sort query for the view.
    #[serde(rename = "ViewQuery", skip_serializing_if = "Option::is_none")]
    pub view_query: Option<String>,
    /// Maximum rows per page.
    #[serde(rename = "RowLimit", skip_serializing_if = "Option::is_none")]
    pub row_limit: Option<u32>,
    /// Whether the row limit pages rather than truncates.
    #[serde(rename = "Paged", skip_serializing_if = "Option::is_none")]
    pub paged: Option<bool>,
}

/// Partial update for a field. Only the set members are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    /// New displayed title.
    pub title: Option<String>,
    /// New hidden flag.
    pub hidden: Option<bool>,
    /// New required flag.
    pub required: Option<bool>,
}

impl FieldUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the hidden flag.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Set the required flag.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Whether the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.hidden.is_none() && self.required.is_none()
    }
}

/// The two navigation menus a site exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationMenu {
    /// Left-hand quick launch menu.
    QuickLaunch,
    /// Horizontal top navigation bar.
    TopNavigationBar,
}

impl fmt::Display for NavigationMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationMenu::QuickLaunch => write!(f, "quick_launch"),
            NavigationMenu::TopNavigationBar => write!(f, "top_navigation_bar"),
        }
    }
}

/// Definition of a site-level custom action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomActionDefinition {
    /// Unique action name within the site.
    pub name: String,
    /// Displayed title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Location identifier the action attaches to.
    pub location: String,
    /// Target url of the action.
    pub url: String,
    /// Additional settings applied verbatim.
    pub settings: SettingsMap,
}

/// Outcome of an ensure-page call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// True when the page was created by this call.
    pub created: bool,
    /// Site-relative url of the page.
    pub url: String,
}
