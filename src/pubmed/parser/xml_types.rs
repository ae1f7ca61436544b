//! Serde mirror of the EFetch `PubmedArticleSet` schema
//!
//! Only the paths the record extractor reads are modelled; every other element
//! is skipped by the deserializer.

use serde::Deserialize;

use super::deserializers::deserialize_lenient_text;

/// Parsed EFetch response: the ordered `<PubmedArticle>` entries
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "PubmedArticleSet")]
pub struct MetadataDocument {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<ArticleEntry>,
}

impl MetadataDocument {
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// PMIDs of all entries, in document order; entries without one are skipped
    pub fn pmids(&self) -> Vec<&str> {
        self.articles.iter().filter_map(|a| a.pmid()).collect()
    }
}

/// One `<PubmedArticle>` node
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleEntry {
    #[serde(rename = "MedlineCitation")]
    medline_citation: Option<MedlineCitation>,
}

impl ArticleEntry {
    fn article(&self) -> Option<&ArticleXml> {
        self.medline_citation.as_ref()?.article.as_ref()
    }

    /// `MedlineCitation/PMID`
    pub fn pmid(&self) -> Option<&str> {
        self.medline_citation
            .as_ref()?
            .pmid
            .as_ref()
            .map(|p| p.value.as_str())
    }

    /// `MedlineCitation/Article/ArticleTitle`
    pub fn title(&self) -> Option<&str> {
        self.article()?.article_title.as_deref()
    }

    /// Journal issue `PubDate/Year`, falling back to `PubDate/MedlineDate`
    pub fn pub_date(&self) -> Option<&str> {
        let pub_date = self
            .article()?
            .journal
            .as_ref()?
            .journal_issue
            .as_ref()?
            .pub_date
            .as_ref()?;

        non_empty(pub_date.year.as_deref()).or(non_empty(pub_date.medline_date.as_deref()))
    }

    /// Authors in `AuthorList` order
    pub fn authors(&self) -> &[AuthorEntry] {
        self.article()
            .and_then(|a| a.author_list.as_ref())
            .map(|list| list.authors.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MedlineCitation {
    #[serde(rename = "PMID")]
    pmid: Option<PmidXml>,
    #[serde(rename = "Article")]
    article: Option<ArticleXml>,
}

#[derive(Debug, Clone, Deserialize)]
struct PmidXml {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ArticleXml {
    #[serde(rename = "Journal")]
    journal: Option<Journal>,
    #[serde(rename = "ArticleTitle", default, deserialize_with = "deserialize_lenient_text")]
    article_title: Option<String>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorList>,
}

#[derive(Debug, Clone, Deserialize)]
struct Journal {
    #[serde(rename = "JournalIssue")]
    journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Clone, Deserialize)]
struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub_date: Option<PubDate>,
}

#[derive(Debug, Clone, Deserialize)]
struct PubDate {
    #[serde(rename = "Year", default, deserialize_with = "deserialize_lenient_text")]
    year: Option<String>,
    #[serde(rename = "MedlineDate", default, deserialize_with = "deserialize_lenient_text")]
    medline_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AuthorList {
    #[serde(rename = "Author", default)]
    authors: Vec<AuthorEntry>,
}

/// One `<Author>` of an article
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorEntry {
    #[serde(rename = "ForeName", default, deserialize_with = "deserialize_lenient_text")]
    fore_name: Option<String>,
    #[serde(rename = "LastName", default, deserialize_with = "deserialize_lenient_text")]
    last_name: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    affiliation_info: Vec<AffiliationInfo>,
}

impl AuthorEntry {
    pub fn fore_name(&self) -> Option<&str> {
        self.fore_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Text of the first `AffiliationInfo/Affiliation`, possibly empty
    pub fn affiliation(&self) -> Option<&str> {
        self.affiliation_info
            .iter()
            .find_map(|info| info.affiliation.as_deref())
    }

    /// `"ForeName LastName"` with missing or empty parts dropped
    pub fn display_name(&self) -> String {
        [self.fore_name(), self.last_name()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AffiliationInfo {
    #[serde(rename = "Affiliation", default, deserialize_with = "deserialize_lenient_text")]
    affiliation: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
