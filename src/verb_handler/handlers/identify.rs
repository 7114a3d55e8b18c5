//! Identify handler.

use crate::provider::RepositoryProvider;
use crate::verb_handler::core::OaiVerbHandler;
use crate::verb_handler::payload::{IdentifyPayload, PROTOCOL_VERSION};

/// Echo the repository configuration. Never fails and never touches the
/// provider.
pub fn handle_identify<P: RepositoryProvider + Sync>(
    handler: &OaiVerbHandler<P>,
) -> IdentifyPayload {
    let config = handler.config();
    IdentifyPayload {
        repository_name: config.repository_name.clone(),
        base_url: config.endpoint_url(),
        protocol_version: PROTOCOL_VERSION,
        admin_emails: config.admin_emails(),
        earliest_datestamp: config.granularity.format(&config.earliest_datestamp),
        deleted_record: config.deleted_record,
        granularity: config.granularity,
        compression: config.compression.clone(),
        identifier_scheme: config.identifier_scheme.clone(),
        repository_identifier: config.repository_identifier.clone(),
        identifier_delimiter: config.identifier_delimiter.clone(),
        sample_identifier: config.sample_identifier.clone(),
    }
}
