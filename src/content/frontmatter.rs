//! Front-matter parsing

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Layout of the `PubDate` field
pub const PUB_DATE_FORMAT: &str = "%Y-%m-%d";

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut tags = Vec::new();
            while let Some(tag) = seq.next_element::<String>()? {
                tags.push(tag);
            }
            Ok(tags)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// A present-but-empty key (`title:`) reads as an empty string
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Metadata block at the top of a content file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(rename = "PubDate", deserialize_with = "nullable_string")]
    pub pub_date: String,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "nullable_string")]
    pub author: String,
}

impl FrontMatter {
    /// Decode the YAML segment between the two delimiters.
    ///
    /// An empty segment yields all-default metadata. Unknown keys are ignored.
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Parse `PubDate` as midnight UTC, `None` when it is not a `YYYY-MM-DD` date
    pub fn parse_date(&self) -> Option<DateTime<Utc>> {
        parse_pub_date(&self.pub_date)
    }
}

/// Strict `YYYY-MM-DD` parse; the fixed width rejects `2024-1-5` style dates
pub fn parse_pub_date(s: &str) -> Option<DateTime<Utc>> {
    if s.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(s, PUB_DATE_FORMAT).ok()?;
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}
