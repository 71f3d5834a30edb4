//! Navigation object handler.
//!
//! Rebuilds each declared navigation menu: the existing nodes are cleared
//! and the declared tree is added depth-first, so menu order ends up
//! exactly as declared.

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::info;

use sitewright_client::ids::NavigationNodeId;
use sitewright_client::traits::NavigationOps;
use sitewright_client::types::NavigationMenu;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::handlers::scoped;
use crate::schema::{NavigationNodeSpec, NavigationSpec};

/// Rebuild the declared navigation menus.
pub async fn provision<C>(client: &C, spec: &NavigationSpec) -> ProvisioningResult<()>
where
    C: NavigationOps + ?Sized,
{
    scoped("Navigation", async {
        if let Some(nodes) = &spec.quick_launch {
            rebuild_menu(client, NavigationMenu::QuickLaunch, nodes).await?;
        }
        if let Some(nodes) = &spec.top_navigation_bar {
            rebuild_menu(client, NavigationMenu::TopNavigationBar, nodes).await?;
        }
        Ok(())
    })
    .await
}

async fn rebuild_menu<C>(
    client: &C,
    menu: NavigationMenu,
    nodes: &[NavigationNodeSpec],
) -> ProvisioningResult<()>
where
    C: NavigationOps + ?Sized,
{
    client
        .clear_navigation(menu)
        .await
        .map_err(|e| ProvisioningError::remote(format!("navigation menu {menu}"), e))?;
    add_nodes(client, menu, None, nodes).await?;
    info!(menu = %menu, nodes = nodes.len(), "navigation menu rebuilt");
    Ok(())
}

fn add_nodes<'a, C>(
    client: &'a C,
    menu: NavigationMenu,
    parent: Option<NavigationNodeId>,
    nodes: &'a [NavigationNodeSpec],
) -> BoxFuture<'a, ProvisioningResult<()>>
where
    C: NavigationOps + ?Sized,
{
    async move {
        for node in nodes {
            let id = client
                .add_navigation_node(menu, parent, &node.title, &node.url)
                .await
                .map_err(|e| {
                    ProvisioningError::remote(format!("navigation node '{}'", node.title), e)
                })?;
            if !node.children.is_empty() {
                add_nodes(client, menu, Some(id), &node.children).await?;
            }
        }
        Ok(())
    }
    .boxed()
}
