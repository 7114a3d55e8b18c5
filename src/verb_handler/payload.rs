//! Structured response payloads, one per verb.
//!
//! Payloads are data shapes ready for a serializer; rendering them to the
//! OAI-PMH XML schema (and mapping item fields into `oai_dc`) is the job of
//! the host's serializer.

use crate::config::DeletedRecordPolicy;
use crate::datestamp::Granularity;
use crate::identifier::OaiIdentifier;
use crate::metadata_format::MetadataFormat;
use crate::provider::SetDescriptor;
use serde::Serialize;

pub const PROTOCOL_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentifyPayload {
    pub repository_name: String,
    pub base_url: String,
    pub protocol_version: &'static str,
    pub admin_emails: Vec<String>,
    pub earliest_datestamp: String,
    pub deleted_record: DeletedRecordPolicy,
    pub granularity: Granularity,
    pub compression: Vec<String>,
    pub identifier_scheme: String,
    pub repository_identifier: String,
    pub identifier_delimiter: String,
    pub sample_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSetsPayload {
    pub sets: Vec<SetDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListMetadataFormatsPayload {
    /// The `identifier` argument, when formats were listed for one item.
    pub identifier: Option<String>,
    pub formats: Vec<MetadataFormat>,
}

/// The header every record carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordHeader {
    pub identifier: OaiIdentifier,
    pub datestamp: String,
    pub set_specs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListIdentifiersPayload {
    pub metadata_prefix: String,
    pub headers: Vec<RecordHeader>,
}

/// A provider item decorated with everything a record response needs.
///
/// The item itself is passed through untouched so the serializer can
/// render its metadata in the requested format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<I> {
    pub header: RecordHeader,
    /// Dereferenceable URL of the item.
    pub record_identifier: String,
    pub item: I,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRecordsPayload<I> {
    pub metadata_prefix: String,
    pub records: Vec<Record<I>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetRecordPayload<I> {
    pub metadata_prefix: String,
    pub record: Record<I>,
}
