//! # PubMed Paper Fetcher
//!
//! Finds PubMed articles with at least one author at a commercial
//! organization. A query runs through ESearch, the returned PMIDs through
//! EFetch, and every article is reduced to one [`ExtractedRecord`]: its
//! identifier, title, publication date, company-affiliated authors, their
//! affiliations and the first email found among the affiliations.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_paper_fetcher::{ClientConfig, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::with_config(ClientConfig::new().with_email("me@example.org"))?;
//!
//!     for record in client.search_and_extract("cancer immunotherapy").await? {
//!         if record.has_company_authors() {
//!             println!("{} {}", record.pubmed_id, record.company_affiliations);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Classification
//!
//! Affiliations are classified by case-insensitive substring match against
//! [`affiliation::COMPANY_KEYWORDS`] and [`affiliation::ACADEMIC_KEYWORDS`].
//! Only the company match feeds the report.

pub mod affiliation;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod pubmed;
pub mod report;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{FetcherError, Result};
pub use pipeline::{Output, run};
pub use pubmed::{ExtractedRecord, MetadataDocument, PubMedClient, extract_info};
