use serde::{Deserialize, Serialize};

/// Report column headers, in output order
pub const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Separator used when joining author and affiliation lists
pub const LIST_SEPARATOR: &str = "; ";

/// One report row summarizing a single PubMed article
///
/// Serde names match [`COLUMNS`], so a CSV written with `csv::Writer::serialize`
/// reads back into the same struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// Year, or the free-text MedlineDate when no year is given
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Names of authors with a company affiliation, `"; "`-joined
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    /// Raw company affiliation strings, `"; "`-joined
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl ExtractedRecord {
    /// Field values paired with their column header, in column order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            (COLUMNS[0], &self.pubmed_id),
            (COLUMNS[1], &self.title),
            (COLUMNS[2], &self.publication_date),
            (COLUMNS[3], &self.non_academic_authors),
            (COLUMNS[4], &self.company_affiliations),
            (COLUMNS[5], &self.corresponding_author_email),
        ]
    }

    /// True when at least one author was classified as commercial
    pub fn has_company_authors(&self) -> bool {
        !self.company_affiliations.is_empty()
    }
}
