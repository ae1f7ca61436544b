//! PubMed EFetch XML parser
//!
//! - `deserializers` - lenient text fields
//! - `preprocessing` - inline markup removal
//! - `xml_types` - the [`MetadataDocument`] tree and its accessors

mod deserializers;
mod preprocessing;
mod xml_types;

pub use xml_types::{ArticleEntry, AuthorEntry, MetadataDocument};

use crate::error::{FetcherError, Result};
use preprocessing::strip_inline_html_tags;
use quick_xml::de::from_str;
use tracing::{debug, instrument};

/// Parse an EFetch `retmode=xml` body into a [`MetadataDocument`]
///
/// Entries keep document order. A well-formed document without any
/// `<PubmedArticle>` yields an empty document rather than an error.
///
/// # Errors
///
/// Returns [`FetcherError::XmlError`] when the body is not well-formed XML or
/// an element the extractor reads has an unexpected shape.
///
/// # Example
///
/// ```
/// use pubmed_paper_fetcher::pubmed::parse_metadata_document;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID Version="1">12345678</PMID>
///       <Article><ArticleTitle>Example</ArticleTitle></Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let document = parse_metadata_document(xml)?;
/// assert_eq!(document.pmids(), vec!["12345678"]);
/// # Ok::<(), pubmed_paper_fetcher::FetcherError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_metadata_document(xml: &str) -> Result<MetadataDocument> {
    let cleaned_xml = strip_inline_html_tags(xml);

    let document: MetadataDocument = from_str(&cleaned_xml)
        .map_err(|e| FetcherError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    debug!(articles = document.len(), "Parsed EFetch document");
    Ok(document)
}
