//! Integration tests for the OAI-PMH verb dispatcher.
//!
//! Every test drives [`oai_pmh_server::OaiVerbHandler::handle`] with a
//! request built the way a host would build it, then inspects the
//! structured response.

pub mod concurrency;
pub mod identify;
pub mod sets_and_formats;
