//! ListSets handler.

use crate::config::SetHierarchyPolicy;
use crate::error::{OaiError, OaiResult};
use crate::provider::{RepositoryProvider, SetDescriptor};
use crate::verb_handler::core::{OaiVerbHandler, RequestContext};
use crate::verb_handler::errors;
use crate::verb_handler::payload::ListSetsPayload;
use log::warn;
use std::collections::HashSet;

/// Return the provider's set catalog.
///
/// An empty catalog is answered per the configured [`SetHierarchyPolicy`].
pub async fn handle_list_sets<P: RepositoryProvider + Sync>(
    handler: &OaiVerbHandler<P>,
    context: &RequestContext,
) -> OaiResult<ListSetsPayload> {
    let catalog = handler
        .provider()
        .sets_list()
        .await
        .map_err(OaiError::provider_error)?;

    if catalog.is_empty() && handler.config().empty_set_policy == SetHierarchyPolicy::NoSetHierarchy
    {
        return Err(OaiError::no_set_hierarchy(errors::NO_SET_HIERARCHY));
    }

    Ok(ListSetsPayload {
        sets: unique_specs(catalog, &context.request_id),
    })
}

/// Keep the first descriptor for each spec, preserving catalog order.
fn unique_specs(catalog: Vec<SetDescriptor>, request_id: &str) -> Vec<SetDescriptor> {
    let mut seen = HashSet::new();
    catalog
        .into_iter()
        .filter(|set| {
            let first = seen.insert(set.spec.clone());
            if !first {
                warn!(
                    "Dropping duplicate set spec '{}' from ListSets (request: '{}')",
                    set.spec, request_id
                );
            }
            first
        })
        .collect()
}
