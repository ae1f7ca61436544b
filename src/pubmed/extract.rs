//! Flatten one parsed article into an [`ExtractedRecord`]

use tracing::trace;

use crate::affiliation::{classify, extract_email};
use crate::pubmed::models::{ExtractedRecord, LIST_SEPARATOR};
use crate::pubmed::parser::{ArticleEntry, MetadataDocument};

/// Build the report row for one article
///
/// Missing identifier, title or date become empty strings. Authors without an
/// affiliation are skipped. An author whose affiliation hits a company keyword
/// contributes their name and the raw affiliation. The corresponding email is
/// the first email found in any affiliation, in author order.
///
/// The academic keyword test is evaluated for every affiliation but does not
/// change the result: an affiliation naming both a university and a company
/// still counts as commercial.
pub fn extract_info(article: &ArticleEntry) -> ExtractedRecord {
    let mut non_academic_authors = Vec::new();
    let mut company_affiliations = Vec::new();
    let mut corresponding_email = None;

    for author in article.authors() {
        let Some(affiliation) = author.affiliation().filter(|a| !a.is_empty()) else {
            continue;
        };

        let class = classify(affiliation);
        trace!(
            is_company = class.is_company,
            is_academic = class.is_academic,
            "Classified affiliation"
        );

        if class.is_company {
            company_affiliations.push(affiliation);
            non_academic_authors.push(author.display_name());
        }

        if corresponding_email.is_none() {
            corresponding_email = extract_email(affiliation);
        }
    }

    ExtractedRecord {
        pubmed_id: article.pmid().unwrap_or_default().to_string(),
        title: article.title().unwrap_or_default().to_string(),
        publication_date: article.pub_date().unwrap_or_default().to_string(),
        non_academic_authors: non_academic_authors.join(LIST_SEPARATOR),
        company_affiliations: company_affiliations.join(LIST_SEPARATOR),
        corresponding_author_email: corresponding_email.unwrap_or_default().to_string(),
    }
}

impl MetadataDocument {
    /// One record per `<PubmedArticle>`, in document order
    pub fn records(&self) -> Vec<ExtractedRecord> {
        self.articles.iter().map(extract_info).collect()
    }
}
