//! Features object handler.
//!
//! Activates or deactivates the declared site features, in declared
//! order.

use tracing::info;

use sitewright_client::traits::FeatureOps;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::handlers::scoped;
use crate::schema::FeatureSpec;

/// Bring the declared features into their requested state.
pub async fn provision<C>(client: &C, features: &[FeatureSpec]) -> ProvisioningResult<()>
where
    C: FeatureOps + ?Sized,
{
    scoped("Features", async {
        for feature in features {
            if feature.deactivate {
                client
                    .deactivate_feature(feature.id, feature.force)
                    .await
                    .map_err(|e| {
                        ProvisioningError::remote(format!("feature {}", feature.id), e)
                    })?;
                info!(feature = %feature.id, "feature deactivated");
            } else {
                client
                    .activate_feature(feature.id, feature.force)
                    .await
                    .map_err(|e| {
                        ProvisioningError::remote(format!("feature {}", feature.id), e)
                    })?;
                info!(feature = %feature.id, "feature activated");
            }
        }
        Ok(())
    })
    .await
}
