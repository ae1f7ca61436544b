//! Keyword classification of free-text author affiliations

use std::sync::OnceLock;

use regex::Regex;

/// Lowercase substrings that mark an affiliation as commercial
pub const COMPANY_KEYWORDS: &[&str] = &[
    "pharma",
    "biotech",
    "inc",
    "ltd",
    "llc",
    "gmbh",
    "therapeutics",
    "laboratories",
    "corporation",
];

/// Lowercase substrings that mark an affiliation as academic
pub const ACADEMIC_KEYWORDS: &[&str] = &["university", "institute", "college", "school", "hospital"];

/// Result of running both keyword tests over one affiliation
///
/// The two flags are independent; an affiliation can be both. Record
/// extraction only acts on `is_company`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AffiliationClass {
    pub is_company: bool,
    pub is_academic: bool,
}

/// Classify an affiliation by case-insensitive substring match
///
/// Matching is naive: `"inc"` also hits words such as "Lincoln" or "Princeton".
///
/// ```
/// use pubmed_paper_fetcher::affiliation::classify;
///
/// let class = classify("Genentech Inc., South San Francisco");
/// assert!(class.is_company);
/// assert!(!class.is_academic);
/// ```
pub fn classify(affiliation: &str) -> AffiliationClass {
    let lower = affiliation.to_lowercase();

    AffiliationClass {
        is_company: COMPANY_KEYWORDS.iter().any(|kw| lower.contains(kw)),
        is_academic: ACADEMIC_KEYWORDS.iter().any(|kw| lower.contains(kw)),
    }
}

/// Return the first email-shaped substring of `text`
///
/// ```
/// use pubmed_paper_fetcher::affiliation::extract_email;
///
/// assert_eq!(
///     extract_email("Dept. of X, Boston, USA. j.doe@example.org"),
///     Some("j.doe@example.org")
/// );
/// assert_eq!(extract_email("no contact given"), None);
/// ```
pub fn extract_email(text: &str) -> Option<&str> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("Failed to compile email regex"));

    re.find(text).map(|m| m.as_str())
}
