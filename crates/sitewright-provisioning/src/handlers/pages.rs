//! Pages object handler.
//!
//! Ensures each declared page exists and carries its declared field
//! values. Runs after the lists group so pages can live in libraries the
//! same schema creates.

use tracing::info;

use sitewright_client::traits::PageOps;

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::handlers::scoped;
use crate::schema::PageSpec;

/// Ensure the declared pages exist with their declared field values.
pub async fn provision<C>(client: &C, pages: &[PageSpec]) -> ProvisioningResult<()>
where
    C: PageOps + ?Sized,
{
    scoped("Pages", async {
        for page in pages {
            let ensured = client
                .ensure_page(&page.folder, &page.url)
                .await
                .map_err(|e| ProvisioningError::remote(format!("page '{}'", page.url), e))?;
            if ensured.created {
                info!(page = %page.url, "page created");
            }

            if !page.fields.is_empty() {
                client
                    .update_page_fields(&page.url, &page.fields)
                    .await
                    .map_err(|e| {
                        ProvisioningError::remote(format!("page '{}'", page.url), e)
                    })?;
            }
        }
        Ok(())
    })
    .await
}
