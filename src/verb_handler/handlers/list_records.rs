//! ListRecords handler.

use crate::error::OaiResult;
use crate::provider::RepositoryProvider;
use crate::verb_handler::core::{OaiRequest, OaiVerbHandler, RequestContext};
use crate::verb_handler::handlers::list_identifiers::harvest;
use crate::verb_handler::payload::{ListRecordsPayload, Record};

/// Full records for every matching item, in provider order.
pub async fn handle_list_records<P: RepositoryProvider + Sync>(
    handler: &OaiVerbHandler<P>,
    request: &OaiRequest,
    context: &RequestContext,
) -> OaiResult<ListRecordsPayload<P::Item>> {
    let (metadata_prefix, harvested) = harvest(handler, request, context).await?;

    let records = harvested
        .into_iter()
        .map(|(item, header)| Record {
            record_identifier: handler
                .codec()
                .record_url(&handler.provider().local_path(&item)),
            header,
            item,
        })
        .collect();

    Ok(ListRecordsPayload {
        metadata_prefix,
        records,
    })
}
