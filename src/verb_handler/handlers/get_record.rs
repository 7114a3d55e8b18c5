//! GetRecord handler and single-item resolution.

use crate::error::{OaiError, OaiResult};
use crate::provider::RepositoryProvider;
use crate::verb_handler::core::{OaiRequest, OaiVerbHandler, RequestContext};
use crate::verb_handler::errors;
use crate::verb_handler::handlers::arguments::metadata_prefix;
use crate::verb_handler::payload::{GetRecordPayload, Record};
use log::warn;

/// Resolve one record by its OAI identifier.
pub async fn handle_get_record<P: RepositoryProvider + Sync>(
    handler: &OaiVerbHandler<P>,
    request: &OaiRequest,
    context: &RequestContext,
) -> OaiResult<GetRecordPayload<P::Item>> {
    let identifier = request
        .params
        .get("identifier")
        .ok_or_else(|| OaiError::bad_argument(errors::BAD_ARGUMENT))?;

    let prefix = metadata_prefix(
        request,
        &handler.config().default_metadata_prefix,
        handler.formats(),
    )?;

    let item = resolve_item(handler, identifier, context).await?;

    let available = handler
        .provider()
        .metadata_formats(&item, handler.formats());
    if !available.iter().any(|f| f.metadata_prefix == prefix) {
        return Err(OaiError::cannot_disseminate_format(
            errors::cannot_disseminate(&prefix),
        ));
    }

    let header = handler.record_header(&item);
    let record_identifier = handler
        .codec()
        .record_url(&handler.provider().local_path(&item));

    Ok(GetRecordPayload {
        metadata_prefix: prefix,
        record: Record {
            header,
            record_identifier,
            item,
        },
    })
}

/// Decode an OAI identifier and fetch the item from the provider.
///
/// Malformed identifiers and every provider lookup failure are reported as
/// `idDoesNotExist`; the specific cause is only logged.
pub(crate) async fn resolve_item<P: RepositoryProvider + Sync>(
    handler: &OaiVerbHandler<P>,
    identifier: &str,
    context: &RequestContext,
) -> OaiResult<P::Item> {
    let local_path = handler.codec().decode(identifier).map_err(|e| {
        warn!(
            "Malformed identifier '{}': {} (request: '{}')",
            identifier, e, context.request_id
        );
        OaiError::id_does_not_exist(errors::ID_DOES_NOT_EXIST)
    })?;

    handler.provider().item(&local_path).await.map_err(|e| {
        warn!(
            "Lookup of '{}' failed: {} (request: '{}')",
            local_path, e, context.request_id
        );
        OaiError::id_does_not_exist(errors::ID_DOES_NOT_EXIST)
    })
}
