//! In-memory mock site client shared by the integration tests.
//!
//! Implements every capability trait over a single locked state record,
//! keeps an ordered call log for sequencing assertions, and supports
//! targeted failure injection.

// Each test binary compiles its own copy and uses a different subset.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use sitewright_client::prelude::*;

/// A list as the mock site stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct MockList {
    pub info: ListInfo,
    pub description: String,
    pub template: u32,
    pub content_types_enabled: bool,
    pub settings: SettingsMap,
    pub content_types: Vec<ContentTypeInfo>,
    pub fields: Vec<MockField>,
    pub views: Vec<MockView>,
}

impl MockList {
    pub fn new(title: &str) -> Self {
        Self {
            info: ListInfo {
                id: ListId::new(),
                title: title.to_string(),
            },
            description: String::new(),
            template: 100,
            content_types_enabled: false,
            settings: SettingsMap::new(),
            content_types: Vec::new(),
            fields: Vec::new(),
            views: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockField {
    pub id: FieldId,
    pub internal_name: String,
    pub title: String,
    pub hidden: bool,
    pub required: bool,
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockView {
    pub id: ViewId,
    pub title: String,
    pub personal_view: bool,
    pub settings: ViewSettings,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockNavNode {
    pub id: NavigationNodeId,
    pub parent: Option<NavigationNodeId>,
    pub menu: NavigationMenu,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockPage {
    pub folder: String,
    pub url: String,
    pub fields: BTreeMap<String, String>,
}

/// Everything the mock site remembers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteState {
    pub lists: Vec<MockList>,
    pub themes_applied: Vec<(String, String, String, bool)>,
    pub nav_nodes: Vec<MockNavNode>,
    pub web_settings: SettingsMap,
    pub custom_actions: Vec<CustomActionDefinition>,
    pub features_activated: Vec<(Uuid, bool)>,
    pub features_deactivated: Vec<(Uuid, bool)>,
    pub pages: Vec<MockPage>,
}

/// In-memory site client.
pub struct MockSite {
    url: String,
    pub state: Mutex<SiteState>,
    pub calls: Mutex<Vec<String>>,
    /// When set, adding or updating a view with this title fails.
    pub fail_view_titled: Mutex<Option<String>>,
    next_nav_id: AtomicI64,
}

impl MockSite {
    pub fn new() -> Self {
        Self {
            url: "https://contoso.example/sites/projects".to_string(),
            state: Mutex::new(SiteState::default()),
            calls: Mutex::new(Vec::new()),
            fail_view_titled: Mutex::new(None),
            next_nav_id: AtomicI64::new(1),
        }
    }

    /// Make view creation and updates fail for the given title.
    pub fn fail_view(self, title: &str) -> Self {
        *self.fail_view_titled.lock().unwrap() = Some(title.to_string());
        self
    }

    /// Seed a pre-existing list and return its id.
    pub fn seed_list(&self, list: MockList) -> ListId {
        let id = list.info.id;
        self.state.lock().unwrap().lists.push(list);
        id
    }

    /// Snapshot the current state for before/after comparisons.
    pub fn snapshot(&self) -> SiteState {
        self.state.lock().unwrap().clone()
    }

    /// The ordered call log.
    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Index of the first log entry starting with `prefix`, if any.
    pub fn first_call_index(&self, prefix: &str) -> Option<usize> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .position(|c| c.starts_with(prefix))
    }

    fn log(&self, entry: String) {
        self.calls.lock().unwrap().push(entry);
    }

    fn list_title(state: &SiteState, list: &ListId) -> String {
        state
            .lists
            .iter()
            .find(|l| &l.info.id == list)
            .map(|l| l.info.title.clone())
            .unwrap_or_else(|| list.to_string())
    }
}

/// Pull an attribute value out of field markup.
fn attr(markup: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=\"");
    let start = markup.find(&needle)? + needle.len();
    let end = markup[start..].find('"')? + start;
    Some(markup[start..end].to_string())
}

#[async_trait]
impl SiteClient for MockSite {
    fn site_url(&self) -> &str {
        &self.url
    }

    async fn test_connection(&self) -> ClientResult<()> {
        Ok(())
    }
}

#[async_trait]
impl ListOps for MockSite {
    async fn ensure_list(
        &self,
        title: &str,
        description: &str,
        template: u32,
        content_types_enabled: bool,
        settings: &SettingsMap,
    ) -> ClientResult<EnsuredList> {
        self.log(format!("ensure_list:{title}"));
        let mut state = self.state.lock().unwrap();

        if let Some(existing) = state.lists.iter().find(|l| l.info.title == title) {
            return Ok(EnsuredList {
                created: false,
                list: existing.info.clone(),
            });
        }

        let mut list = MockList::new(title);
        list.description = description.to_string();
        list.template = template;
        list.content_types_enabled = content_types_enabled;
        list.settings = settings.clone();
        let info = list.info.clone();
        state.lists.push(list);

        Ok(EnsuredList {
            created: true,
            list: info,
        })
    }

    async fn list_by_title(&self, title: &str) -> ClientResult<Option<ListInfo>> {
        self.log(format!("list_by_title:{title}"));
        let state = self.state.lock().unwrap();
        Ok(state
            .lists
            .iter()
            .find(|l| l.info.title == title)
            .map(|l| l.info.clone()))
    }
}

#[async_trait]
impl ContentTypeOps for MockSite {
    async fn content_types(&self, list: &ListId) -> ClientResult<Vec<ContentTypeInfo>> {
        let state = self.state.lock().unwrap();
        self.log(format!("content_types:{}", Self::list_title(&state, list)));
        state
            .lists
            .iter()
            .find(|l| &l.info.id == list)
            .map(|l| l.content_types.clone())
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))
    }

    async fn add_available_content_type(
        &self,
        list: &ListId,
        content_type_id: &ContentTypeId,
    ) -> ClientResult<ContentTypeInfo> {
        let mut state = self.state.lock().unwrap();
        let title = Self::list_title(&state, list);
        self.log(format!("add_content_type:{content_type_id}@{title}"));

        let entry = state
            .lists
            .iter_mut()
            .find(|l| &l.info.id == list)
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))?;

        if let Some(existing) = entry
            .content_types
            .iter()
            .find(|ct| &ct.id == content_type_id)
        {
            return Ok(existing.clone());
        }

        let info = ContentTypeInfo {
            id: content_type_id.clone(),
            name: None,
        };
        entry.content_types.push(info.clone());
        Ok(info)
    }

    async fn remove_content_type(
        &self,
        list: &ListId,
        content_type_id: &ContentTypeId,
    ) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        let title = Self::list_title(&state, list);
        self.log(format!("remove_content_type:{content_type_id}@{title}"));

        let entry = state
            .lists
            .iter_mut()
            .find(|l| &l.info.id == list)
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))?;

        let before = entry.content_types.len();
        entry.content_types.retain(|ct| &ct.id != content_type_id);
        if entry.content_types.len() == before {
            return Err(ClientError::ContentTypeNotFound {
                content_type_id: content_type_id.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FieldOps for MockSite {
    async fn create_field_from_markup(
        &self,
        list: &ListId,
        markup: &str,
    ) -> ClientResult<FieldInfo> {
        let mut state = self.state.lock().unwrap();
        let title = Self::list_title(&state, list);

        let internal_name = attr(markup, "InternalName")
            .or_else(|| attr(markup, "Name"))
            .ok_or_else(|| ClientError::field_markup_rejected("no internal name"))?;
        let display = attr(markup, "DisplayName").unwrap_or_else(|| internal_name.clone());
        self.log(format!("create_field:{internal_name}@{title}"));

        let entry = state
            .lists
            .iter_mut()
            .find(|l| &l.info.id == list)
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))?;

        if let Some(existing) = entry
            .fields
            .iter_mut()
            .find(|f| f.internal_name == internal_name)
        {
            existing.markup = markup.to_string();
            existing.title = display.clone();
            return Ok(FieldInfo {
                id: existing.id,
                internal_name,
                title: display,
            });
        }

        let field = MockField {
            id: FieldId::new(),
            internal_name: internal_name.clone(),
            title: display.clone(),
            hidden: false,
            required: false,
            markup: markup.to_string(),
        };
        let info = FieldInfo {
            id: field.id,
            internal_name,
            title: display,
        };
        entry.fields.push(field);
        Ok(info)
    }

    async fn update_field(
        &self,
        list: &ListId,
        field: &FieldId,
        update: &FieldUpdate,
    ) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        let title = Self::list_title(&state, list);
        self.log(format!("update_field:{field}@{title}"));

        let entry = state
            .lists
            .iter_mut()
            .find(|l| &l.info.id == list)
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))?;

        let target = entry
            .fields
            .iter_mut()
            .find(|f| &f.id == field)
            .ok_or(ClientError::FieldNotFound { field_id: *field })?;

        if let Some(new_title) = &update.title {
            target.title = new_title.clone();
        }
        if let Some(hidden) = update.hidden {
            target.hidden = hidden;
        }
        if let Some(required) = update.required {
            target.required = required;
        }
        Ok(())
    }
}

#[async_trait]
impl ViewOps for MockSite {
    async fn view_by_title(&self, list: &ListId, title: &str) -> ClientResult<Option<ViewInfo>> {
        let state = self.state.lock().unwrap();
        let list_title = Self::list_title(&state, list);
        self.log(format!("view_lookup:{title}@{list_title}"));
        Ok(state
            .lists
            .iter()
            .find(|l| &l.info.id == list)
            .and_then(|l| l.views.iter().find(|v| v.title == title))
            .map(|v| ViewInfo {
                id: v.id,
                title: v.title.clone(),
                personal_view: v.personal_view,
            }))
    }

    async fn add_view(
        &self,
        list: &ListId,
        title: &str,
        personal_view: bool,
        settings: &ViewSettings,
    ) -> ClientResult<ViewInfo> {
        if self.fail_view_titled.lock().unwrap().as_deref() == Some(title) {
            return Err(ClientError::operation_failed(format!(
                "injected failure adding view '{title}'"
            )));
        }
        let mut state = self.state.lock().unwrap();
        let list_title = Self::list_title(&state, list);
        self.log(format!("add_view:{title}@{list_title}"));

        let entry = state
            .lists
            .iter_mut()
            .find(|l| &l.info.id == list)
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))?;

        let view = MockView {
            id: ViewId::new(),
            title: title.to_string(),
            personal_view,
            settings: settings.clone(),
            fields: Vec::new(),
        };
        let info = ViewInfo {
            id: view.id,
            title: view.title.clone(),
            personal_view,
        };
        entry.views.push(view);
        Ok(info)
    }

    async fn update_view(
        &self,
        list: &ListId,
        view: &ViewId,
        settings: &ViewSettings,
    ) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        let list_title = Self::list_title(&state, list);

        let entry = state
            .lists
            .iter_mut()
            .find(|l| &l.info.id == list)
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))?;

        let target = entry
            .views
            .iter_mut()
            .find(|v| &v.id == view)
            .ok_or_else(|| ClientError::view_not_found(&list_title, view.to_string()))?;

        if self.fail_view_titled.lock().unwrap().as_deref() == Some(target.title.as_str()) {
            return Err(ClientError::operation_failed(format!(
                "injected failure updating view '{}'",
                target.title
            )));
        }
        self.log(format!("update_view:{}@{list_title}", target.title));
        target.settings = settings.clone();
        Ok(())
    }

    async fn remove_all_view_fields(&self, list: &ListId, view: &ViewId) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        let list_title = Self::list_title(&state, list);

        let entry = state
            .lists
            .iter_mut()
            .find(|l| &l.info.id == list)
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))?;
        let target = entry
            .views
            .iter_mut()
            .find(|v| &v.id == view)
            .ok_or_else(|| ClientError::view_not_found(&list_title, view.to_string()))?;

        self.log(format!("clear_view_fields:{}@{list_title}", target.title));
        target.fields.clear();
        Ok(())
    }

    async fn add_view_field(
        &self,
        list: &ListId,
        view: &ViewId,
        internal_name: &str,
    ) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        let list_title = Self::list_title(&state, list);

        let entry = state
            .lists
            .iter_mut()
            .find(|l| &l.info.id == list)
            .ok_or_else(|| ClientError::list_not_found(list.to_string()))?;
        let target = entry
            .views
            .iter_mut()
            .find(|v| &v.id == view)
            .ok_or_else(|| ClientError::view_not_found(&list_title, view.to_string()))?;

        self.log(format!(
            "add_view_field:{internal_name}@{}@{list_title}",
            target.title
        ));
        target.fields.push(internal_name.to_string());
        Ok(())
    }
}

#[async_trait]
impl ThemeOps for MockSite {
    async fn apply_theme(
        &self,
        color_palette_url: &str,
        font_scheme_url: &str,
        background_image_url: &str,
        share_generated: bool,
    ) -> ClientResult<()> {
        self.log("apply_theme".to_string());
        self.state.lock().unwrap().themes_applied.push((
            color_palette_url.to_string(),
            font_scheme_url.to_string(),
            background_image_url.to_string(),
            share_generated,
        ));
        Ok(())
    }
}

#[async_trait]
impl NavigationOps for MockSite {
    async fn clear_navigation(&self, menu: NavigationMenu) -> ClientResult<()> {
        self.log(format!("clear_navigation:{menu}"));
        self.state
            .lock()
            .unwrap()
            .nav_nodes
            .retain(|n| n.menu != menu);
        Ok(())
    }

    async fn add_navigation_node(
        &self,
        menu: NavigationMenu,
        parent: Option<NavigationNodeId>,
        title: &str,
        url: &str,
    ) -> ClientResult<NavigationNodeId> {
        self.log(format!("add_nav_node:{title}"));
        let id = NavigationNodeId::new(self.next_nav_id.fetch_add(1, Ordering::SeqCst));
        self.state.lock().unwrap().nav_nodes.push(MockNavNode {
            id,
            parent,
            menu,
            title: title.to_string(),
            url: url.to_string(),
        });
        Ok(id)
    }
}

#[async_trait]
impl WebSettingsOps for MockSite {
    async fn update_web_settings(&self, settings: &SettingsMap) -> ClientResult<()> {
        self.log("update_web_settings".to_string());
        let mut state = self.state.lock().unwrap();
        for (key, value) in settings {
            state.web_settings.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl CustomActionOps for MockSite {
    async fn custom_action_names(&self) -> ClientResult<Vec<String>> {
        self.log("custom_action_names".to_string());
        Ok(self
            .state
            .lock()
            .unwrap()
            .custom_actions
            .iter()
            .map(|a| a.name.clone())
            .collect())
    }

    async fn add_custom_action(&self, action: &CustomActionDefinition) -> ClientResult<()> {
        self.log(format!("add_custom_action:{}", action.name));
        self.state.lock().unwrap().custom_actions.push(action.clone());
        Ok(())
    }
}

#[async_trait]
impl FeatureOps for MockSite {
    async fn activate_feature(&self, feature_id: Uuid, force: bool) -> ClientResult<()> {
        self.log(format!("activate_feature:{feature_id}"));
        self.state
            .lock()
            .unwrap()
            .features_activated
            .push((feature_id, force));
        Ok(())
    }

    async fn deactivate_feature(&self, feature_id: Uuid, force: bool) -> ClientResult<()> {
        self.log(format!("deactivate_feature:{feature_id}"));
        self.state
            .lock()
            .unwrap()
            .features_deactivated
            .push((feature_id, force));
        Ok(())
    }
}

#[async_trait]
impl PageOps for MockSite {
    async fn ensure_page(&self, folder: &str, url: &str) -> ClientResult<PageInfo> {
        self.log(format!("ensure_page:{url}"));
        let mut state = self.state.lock().unwrap();

        if state.pages.iter().any(|p| p.url == url) {
            return Ok(PageInfo {
                created: false,
                url: url.to_string(),
            });
        }

        state.pages.push(MockPage {
            folder: folder.to_string(),
            url: url.to_string(),
            fields: BTreeMap::new(),
        });
        Ok(PageInfo {
            created: true,
            url: url.to_string(),
        })
    }

    async fn update_page_fields(
        &self,
        url: &str,
        fields: &BTreeMap<String, String>,
    ) -> ClientResult<()> {
        self.log(format!("update_page_fields:{url}"));
        let mut state = self.state.lock().unwrap();
        let page = state
            .pages
            .iter_mut()
            .find(|p| p.url == url)
            .ok_or_else(|| ClientError::operation_failed(format!("no page at {url}")))?;
        for (key, value) in fields {
            page.fields.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}
