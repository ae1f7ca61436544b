//! Custom serde deserializers for EFetch text fields

use serde::Deserializer;
use std::fmt;
use std::result;

/// Deserialize a leaf text element, tolerating child elements
///
/// Inline tags that survive preprocessing (MathML, `<sup id="..">`) turn the
/// element into a map of `$text` runs and child keys. Text runs are trimmed
/// and joined with a single space; children and attributes are skipped.
pub(super) fn deserialize_lenient_text<'de, D>(
    deserializer: D,
) -> result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, Visitor};

    struct LenientTextVisitor;

    impl<'de> Visitor<'de> for LenientTextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("element text content")
        }

        fn visit_str<E>(self, value: &str) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_unit<E>(self) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_map<M>(self, mut map: M) -> result::Result<String, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut text_parts = Vec::new();
            while let Some(key) = map.next_key::<String>()? {
                if key == "$text" || key == "$value" {
                    let value: String = map.next_value()?;
                    let value = value.trim();
                    if !value.is_empty() {
                        text_parts.push(value.to_string());
                    }
                } else {
                    let _: IgnoredAny = map.next_value()?;
                }
            }
            Ok(text_parts.join(" "))
        }
    }

    deserializer.deserialize_any(LenientTextVisitor).map(Some)
}
