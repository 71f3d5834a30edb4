//! Lists object handler.
//!
//! The core of the engine: reconciles declared lists against the remote
//! site in four ordered phases. Every declared list completes a phase
//! before any list enters the next one, because a field definition may
//! reference the identity of a list ensured earlier in the same run, and
//! the later phases read identities the ensure phase records.

use futures::future::try_join_all;
use tracing::info;

use sitewright_client::error::ClientResult;
use sitewright_client::traits::{ContentTypeOps, FieldOps, ListOps, ViewOps};
use sitewright_client::types::{FieldUpdate, ListInfo};

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::handlers::scoped;
use crate::markup;
use crate::registry::ProvisionedListRegistry;
use crate::schema::{ListSpec, ViewSpec};
use crate::token::TokenResolver;

/// Reconciliation phases for the list group, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    EnsureLists,
    Fields,
    FieldRefs,
    Views,
}

impl Phase {
    const ALL: [Phase; 4] = [
        Phase::EnsureLists,
        Phase::Fields,
        Phase::FieldRefs,
        Phase::Views,
    ];
}

/// Handler for the `Lists` group of a schema.
///
/// Holds the run-scoped registry of provisioned list identities. Create a
/// fresh reconciler per run; the registry never outlives one
/// [`provision`](ListReconciler::provision) call.
#[derive(Debug, Default)]
pub struct ListReconciler {
    registry: ProvisionedListRegistry,
}

impl ListReconciler {
    /// Create a reconciler with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: ProvisionedListRegistry::new(),
        }
    }

    /// Reconcile every declared list against the site.
    ///
    /// Phases run strictly in order and each phase covers all lists
    /// before the next begins. The first failure aborts the remaining
    /// work; everything already applied stays applied, and re-running the
    /// schema is the recovery path.
    pub async fn provision<C>(&mut self, client: &C, lists: &[ListSpec]) -> ProvisioningResult<()>
    where
        C: ListOps + ContentTypeOps + FieldOps + ViewOps + ?Sized,
    {
        self.registry = ProvisionedListRegistry::new();
        scoped("Lists", async {
            for phase in Phase::ALL {
                for spec in lists {
                    self.run_phase(phase, client, spec).await?;
                }
            }
            Ok(())
        })
        .await
    }

    async fn run_phase<C>(
        &mut self,
        phase: Phase,
        client: &C,
        spec: &ListSpec,
    ) -> ProvisioningResult<()>
    where
        C: ListOps + ContentTypeOps + FieldOps + ViewOps + ?Sized,
    {
        match phase {
            Phase::EnsureLists => self.ensure_list(client, spec).await,
            Phase::Fields => self.provision_fields(client, spec).await,
            Phase::FieldRefs => self.provision_field_refs(client, spec).await,
            Phase::Views => self.provision_views(client, spec).await,
        }
    }

    /// Ensure the list exists, record its identity, then reconcile its
    /// content-type bindings.
    ///
    /// Content types have no cross-list dependency, so they are handled
    /// here rather than in a later phase.
    async fn ensure_list<C>(&mut self, client: &C, spec: &ListSpec) -> ProvisioningResult<()>
    where
        C: ListOps + ContentTypeOps + ?Sized,
    {
        let ensured = client
            .ensure_list(
                &spec.title,
                &spec.description,
                spec.template,
                spec.content_types_enabled,
                &spec.additional_settings,
            )
            .await
            .map_err(|e| ProvisioningError::remote(format!("list '{}'", spec.title), e))?;

        if ensured.created {
            info!(list = %spec.title, id = %ensured.list.id, "list created");
        }

        let list = ensured.list;
        self.registry.record(list.clone());
        self.reconcile_content_types(client, spec, &list).await
    }

    /// Bring the list's associated content types in line with the
    /// declared bindings.
    async fn reconcile_content_types<C>(
        &self,
        client: &C,
        spec: &ListSpec,
        list: &ListInfo,
    ) -> ProvisioningResult<()>
    where
        C: ContentTypeOps + ?Sized,
    {
        if spec.content_type_bindings.is_empty() {
            return Ok(());
        }

        for binding in &spec.content_type_bindings {
            client
                .add_available_content_type(&list.id, &binding.content_type_id)
                .await
                .map_err(|e| {
                    ProvisioningError::remote(
                        format!(
                            "content type {} on list '{}'",
                            binding.content_type_id, spec.title
                        ),
                        e,
                    )
                })?;
            info!(
                list = %spec.title,
                content_type = %binding.content_type_id,
                "content type associated"
            );
        }

        if spec.remove_existing_content_types {
            self.prune_content_types(client, spec, list).await?;
        }

        Ok(())
    }

    /// Remove every associated content type that is neither declared nor
    /// part of the built-in folder hierarchy.
    ///
    /// Independent deletions run concurrently and are awaited together;
    /// one failed deletion fails the whole binding step.
    async fn prune_content_types<C>(
        &self,
        client: &C,
        spec: &ListSpec,
        list: &ListInfo,
    ) -> ProvisioningResult<()>
    where
        C: ContentTypeOps + ?Sized,
    {
        let current = client.content_types(&list.id).await.map_err(|e| {
            ProvisioningError::remote(format!("content types of list '{}'", spec.title), e)
        })?;

        let removals: Vec<_> = current
            .iter()
            .filter(|ct| {
                !ct.id.is_folder_kind()
                    && !spec
                        .content_type_bindings
                        .iter()
                        .any(|binding| ct.id.is_in_family_of(&binding.content_type_id))
            })
            .map(|ct| {
                info!(list = %spec.title, content_type = %ct.id, "removing content type");
                client.remove_content_type(&list.id, &ct.id)
            })
            .collect();

        let joined: ClientResult<Vec<()>> = try_join_all(removals).await;
        joined.map_err(|e| {
            ProvisioningError::remote(format!("content types of list '{}'", spec.title), e)
        })?;

        Ok(())
    }

    /// Create the declared fields on the list, strictly in order.
    async fn provision_fields<C>(&self, client: &C, spec: &ListSpec) -> ProvisioningResult<()>
    where
        C: FieldOps + ?Sized,
    {
        if spec.fields.is_empty() {
            return Ok(());
        }

        let list = self.list_identity(&spec.title)?;
        let resolver = TokenResolver::new(&self.registry);

        for raw in &spec.fields {
            self.provision_field(client, spec, &list, &resolver, raw)
                .await?;
        }
        Ok(())
    }

    /// Create one field: prepare the markup, resolve tokens, submit, then
    /// restore the declared display name.
    ///
    /// The field is created under its internal name and renamed in a
    /// second update; creating directly under the display name makes the
    /// remote service derive internals from it that a rename cannot undo.
    async fn provision_field<C>(
        &self,
        client: &C,
        spec: &ListSpec,
        list: &ListInfo,
        resolver: &TokenResolver<'_>,
        raw: &str,
    ) -> ProvisioningResult<()>
    where
        C: FieldOps + ?Sized,
    {
        let prepared = markup::prepare_field_markup(raw)
            .map_err(|e| ProvisioningError::malformed_field_markup(&spec.title, e.to_string()))?;
        let resolved = resolver.resolve(&prepared.markup);

        let field = client
            .create_field_from_markup(&list.id, &resolved)
            .await
            .map_err(|e| {
                ProvisioningError::remote(
                    format!(
                        "field '{}' on list '{}'",
                        prepared.internal_name, spec.title
                    ),
                    e,
                )
            })?;

        client
            .update_field(
                &list.id,
                &field.id,
                &FieldUpdate::new().with_title(prepared.display_name.as_str()),
            )
            .await
            .map_err(|e| {
                ProvisioningError::remote(
                    format!(
                        "field '{}' on list '{}'",
                        prepared.internal_name, spec.title
                    ),
                    e,
                )
            })?;

        info!(list = %spec.title, field = %prepared.display_name, "field added");
        Ok(())
    }

    /// Apply the declared overrides to fields already on the list.
    async fn provision_field_refs<C>(&self, client: &C, spec: &ListSpec) -> ProvisioningResult<()>
    where
        C: FieldOps + ?Sized,
    {
        if spec.field_refs.is_empty() {
            return Ok(());
        }

        let list = self.list_identity(&spec.title)?;

        for field_ref in &spec.field_refs {
            let mut update = FieldUpdate::new();
            if let Some(hidden) = field_ref.hidden {
                update = update.with_hidden(hidden);
            }
            if let Some(required) = field_ref.required {
                update = update.with_required(required);
            }
            if let Some(display_name) = &field_ref.display_name {
                update = update.with_title(display_name.as_str());
            }

            client
                .update_field(&list.id, &field_ref.id, &update)
                .await
                .map_err(|e| {
                    ProvisioningError::remote(
                        format!("field {} on list '{}'", field_ref.id, spec.title),
                        e,
                    )
                })?;
            info!(list = %spec.title, field = %field_ref.id, "field reference updated");
        }
        Ok(())
    }

    /// Reconcile the declared views on the list.
    async fn provision_views<C>(&self, client: &C, spec: &ListSpec) -> ProvisioningResult<()>
    where
        C: ViewOps + ?Sized,
    {
        if spec.views.is_empty() {
            return Ok(());
        }

        let list = self.list_identity(&spec.title)?;

        for view in &spec.views {
            self.provision_view(client, spec, &list, view).await?;
        }
        Ok(())
    }

    /// Ensure one view exists with the declared settings and exactly the
    /// declared field order.
    ///
    /// The field set is cleared and rewritten rather than diffed; that is
    /// the only way to guarantee the declared order exactly. Additions
    /// are sequential because order of addition is display order.
    async fn provision_view<C>(
        &self,
        client: &C,
        spec: &ListSpec,
        list: &ListInfo,
        view: &ViewSpec,
    ) -> ProvisioningResult<()>
    where
        C: ViewOps + ?Sized,
    {
        let object = format!("view '{}' on list '{}'", view.title, spec.title);

        let existing = client
            .view_by_title(&list.id, &view.title)
            .await
            .map_err(|e| ProvisioningError::remote(object.clone(), e))?;

        let view_id = match existing {
            Some(info) => {
                client
                    .update_view(&list.id, &info.id, &view.additional_settings)
                    .await
                    .map_err(|e| ProvisioningError::remote(object.clone(), e))?;
                info!(list = %spec.title, view = %view.title, "view updated");
                info.id
            }
            None => {
                let info = client
                    .add_view(
                        &list.id,
                        &view.title,
                        view.personal_view,
                        &view.additional_settings,
                    )
                    .await
                    .map_err(|e| ProvisioningError::remote(object.clone(), e))?;
                info!(list = %spec.title, view = %view.title, "view added");
                info.id
            }
        };

        client
            .remove_all_view_fields(&list.id, &view_id)
            .await
            .map_err(|e| ProvisioningError::remote(object.clone(), e))?;

        for internal_name in &view.view_fields {
            client
                .add_view_field(&list.id, &view_id, internal_name)
                .await
                .map_err(|e| ProvisioningError::remote(object.clone(), e))?;
        }

        Ok(())
    }

    /// Look up the identity the ensure phase recorded for a list.
    fn list_identity(&self, title: &str) -> ProvisioningResult<ListInfo> {
        self.registry
            .resolve_unique(title)
            .cloned()
            .ok_or_else(|| ProvisioningError::list_not_provisioned(title))
    }
}
