//! Cleanup applied to EFetch XML before deserialization

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Formatting tags NCBI leaves inline in titles, abstracts and affiliations
const INLINE_TAGS: &[&str] = &["i", "b", "u", "sup", "sub", "em", "strong", "italic", "bold"];

/// Remove inline formatting tags, keeping their text content
///
/// Opening tags may carry attributes (`<sup id="a1">`); both halves of the pair
/// are removed so the document stays balanced.
///
/// `<ArticleTitle>CO<sup>2</sup> uptake</ArticleTitle>` deserializes as a map
/// rather than a string, so the markup is dropped up front.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        let pattern = format!(r"</?(?:{})(?:\s[^>]*)?>", INLINE_TAGS.join("|"));
        Regex::new(&pattern).expect("Failed to compile inline tag regex")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            removed_bytes = xml.len() - cleaned.len(),
            "Stripped inline formatting tags"
        );
    }

    cleaned.into_owned()
}
