//! ListIdentifiers handler and the item harvest shared with ListRecords.

use crate::error::{OaiError, OaiResult};
use crate::provider::RepositoryProvider;
use crate::verb_handler::core::{OaiRequest, OaiVerbHandler, RequestContext};
use crate::verb_handler::errors;
use crate::verb_handler::handlers::arguments::{HarvestFilter, metadata_prefix};
use crate::verb_handler::payload::{ListIdentifiersPayload, RecordHeader};
use log::debug;

/// Headers for every matching item, in provider order.
pub async fn handle_list_identifiers<P: RepositoryProvider + Sync>(
    handler: &OaiVerbHandler<P>,
    request: &OaiRequest,
    context: &RequestContext,
) -> OaiResult<ListIdentifiersPayload> {
    let (metadata_prefix, harvested) = harvest(handler, request, context).await?;

    Ok(ListIdentifiersPayload {
        metadata_prefix,
        headers: harvested.into_iter().map(|(_, header)| header).collect(),
    })
}

/// Enumerate the provider's items that match the request.
///
/// Order follows `RepositoryProvider::items`. An empty repository yields an
/// empty list; `noRecordsMatch` is only reported when items existed or
/// selective arguments were given and nothing survived the filters.
pub(crate) async fn harvest<P: RepositoryProvider + Sync>(
    handler: &OaiVerbHandler<P>,
    request: &OaiRequest,
    context: &RequestContext,
) -> OaiResult<(String, Vec<(P::Item, RecordHeader)>)> {
    let prefix = metadata_prefix(
        request,
        &handler.config().default_metadata_prefix,
        handler.formats(),
    )?;
    let filter = HarvestFilter::from_request(request, handler.config().granularity)?;
    let provider = handler.provider();

    if filter.set.is_some() {
        let catalog = provider.sets_list().await.map_err(OaiError::provider_error)?;
        if catalog.is_empty() {
            return Err(OaiError::no_set_hierarchy(errors::NO_SET_HIERARCHY));
        }
    }

    let items = provider.items().await.map_err(OaiError::provider_error)?;
    let total = items.len();

    let harvested: Vec<(P::Item, RecordHeader)> = items
        .into_iter()
        .filter(|item| {
            filter.matches(&provider.last_modified(item), &provider.sets(item))
                && provider
                    .metadata_formats(item, handler.formats())
                    .iter()
                    .any(|f| f.metadata_prefix == prefix)
        })
        .map(|item| {
            let header = handler.record_header(&item);
            (item, header)
        })
        .collect();

    debug!(
        "Harvested {} of {} items for prefix '{}' (request: '{}')",
        harvested.len(),
        total,
        prefix,
        context.request_id
    );

    if harvested.is_empty() && (total > 0 || filter.is_selective()) {
        return Err(OaiError::no_records_match(errors::NO_RECORDS_MATCH));
    }

    Ok((prefix, harvested))
}
