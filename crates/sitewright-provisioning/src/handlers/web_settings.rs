//! Web settings object handler.
//!
//! Applies the declared site-level settings map verbatim.

use tracing::info;

use sitewright_client::traits::WebSettingsOps;
use sitewright_client::types::SettingsMap;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::handlers::scoped;

/// Apply the declared web settings.
pub async fn provision<C>(client: &C, settings: &SettingsMap) -> ProvisioningResult<()>
where
    C: WebSettingsOps + ?Sized,
{
    scoped("WebSettings", async {
        client
            .update_web_settings(settings)
            .await
            .map_err(|e| ProvisioningError::remote("web settings", e))?;
        info!(count = settings.len(), "web settings applied");
        Ok(())
    })
    .await
}
