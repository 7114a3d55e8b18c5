//! ListMetadataFormats handler.

use crate::error::{OaiError, OaiResult};
use crate::provider::RepositoryProvider;
use crate::verb_handler::core::{OaiRequest, OaiVerbHandler, RequestContext};
use crate::verb_handler::errors;
use crate::verb_handler::handlers::get_record::resolve_item;
use crate::verb_handler::payload::ListMetadataFormatsPayload;

/// List the formats of the repository, or of one item when `identifier`
/// is given.
pub async fn handle_list_metadata_formats<P: RepositoryProvider + Sync>(
    handler: &OaiVerbHandler<P>,
    request: &OaiRequest,
    context: &RequestContext,
) -> OaiResult<ListMetadataFormatsPayload> {
    let identifier = request.params.get("identifier").cloned();

    let formats = match &identifier {
        Some(identifier) => {
            let item = resolve_item(handler, identifier, context).await?;
            handler
                .provider()
                .metadata_formats(&item, handler.formats())
        }
        None => handler.formats().formats().to_vec(),
    };

    if formats.is_empty() {
        return Err(OaiError::no_metadata_formats(errors::NO_METADATA_FORMATS));
    }

    Ok(ListMetadataFormatsPayload {
        identifier,
        formats,
    })
}
