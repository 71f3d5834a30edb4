//! Object handlers.
//!
//! One handler per schema object group. Every handler follows the same
//! contract: apply its group's declarations to the target site, bracketed
//! by scope lifecycle events, returning the first error encountered.

pub mod composed_look;
pub mod custom_actions;
pub mod features;
pub mod lists;
pub mod navigation;
pub mod pages;
pub mod web_settings;

use std::future::Future;

use crate::error::ProvisioningResult;

/// Run an object-handler future bracketed by scope lifecycle events.
///
/// The end event fires on the failure path as well, before the error
/// propagates, so audit trails always see matched pairs.
pub(crate) async fn scoped<T, F>(name: &'static str, fut: F) -> ProvisioningResult<T>
where
    F: Future<Output = ProvisioningResult<T>>,
{
    tracing::info!(scope = name, "provisioning scope started");
    let result = fut.await;
    tracing::info!(scope = name, ok = result.is_ok(), "provisioning scope ended");
    result
}
