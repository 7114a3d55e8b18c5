//! Verb handler modules
//!
//! One module per verb, plus the argument validation they share. Handlers
//! are called directly by the dispatcher in `core`.

pub(crate) mod arguments;
pub mod get_record;
pub mod identify;
pub mod list_identifiers;
pub mod list_metadata_formats;
pub mod list_records;
pub mod list_sets;

pub(crate) use arguments::check_arguments;
