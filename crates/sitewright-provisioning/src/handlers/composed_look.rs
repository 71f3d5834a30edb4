//! Composed look object handler.
//!
//! Applies the declared theme to the site. No reconciliation logic: the
//! remote theme call is a pass-through and already idempotent.

use tracing::info;

use sitewright_client::traits::ThemeOps;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::handlers::scoped;
use crate::schema::ComposedLookSpec;

/// Apply the declared composed look.
///
/// Generated theme artifacts are always shared across subsites.
pub async fn provision<C>(client: &C, spec: &ComposedLookSpec) -> ProvisioningResult<()>
where
    C: ThemeOps + ?Sized,
{
    scoped("ComposedLook", async {
        client
            .apply_theme(
                &spec.color_palette_url,
                &spec.font_scheme_url,
                &spec.background_image_url,
                true,
            )
            .await
            .map_err(|e| ProvisioningError::remote("composed look", e))?;
        info!(palette = %spec.color_palette_url, "composed look applied");
        Ok(())
    })
    .await
}
