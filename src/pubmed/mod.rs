//! PubMed search, fetch and record extraction
//!
//! - `client` - ESearch and EFetch requests
//! - `parser` - EFetch XML into a [`MetadataDocument`]
//! - `extract` - one [`ExtractedRecord`] per article
//! - `models` - the report row and its column layout

pub mod client;
pub mod extract;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use extract::extract_info;
pub use models::{COLUMNS, ExtractedRecord, LIST_SEPARATOR};
pub use parser::{ArticleEntry, AuthorEntry, MetadataDocument, parse_metadata_document};
