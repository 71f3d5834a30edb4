//! Custom actions object handler.
//!
//! Registers the declared custom actions. Actions are keyed by name;
//! names already present on the site are skipped, so re-running a schema
//! does not stack duplicates.

use tracing::info;

use sitewright_client::traits::CustomActionOps;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::handlers::scoped;
use crate::schema::CustomActionSpec;

/// Ensure the declared custom actions exist on the site.
pub async fn provision<C>(client: &C, actions: &[CustomActionSpec]) -> ProvisioningResult<()>
where
    C: CustomActionOps + ?Sized,
{
    scoped("CustomActions", async {
        let existing = client
            .custom_action_names()
            .await
            .map_err(|e| ProvisioningError::remote("custom actions", e))?;

        for action in actions {
            if existing.iter().any(|name| name == &action.name) {
                info!(action = %action.name, "custom action already present");
                continue;
            }
            client
                .add_custom_action(&action.to_definition())
                .await
                .map_err(|e| {
                    ProvisioningError::remote(format!("custom action '{}'", action.name), e)
                })?;
            info!(action = %action.name, "custom action added");
        }
        Ok(())
    })
    .await
}
