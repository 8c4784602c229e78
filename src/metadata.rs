use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Front matter of a blog post.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BlogPostData {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub created_at: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub updated_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub published_at: Option<NaiveDate>,
    pub hero_image: Option<String>,
}

impl BlogPostData {
    pub fn from_front_matter(front_matter: Option<&str>) -> anyhow::Result<Self> {
        serde_yaml_ng::from_str(front_matter.unwrap_or_default())
            .context("Failed to parse YAML front matter")
    }

    /// The date a post is ordered by: publication if known, creation otherwise.
    pub fn sort_date(&self) -> NaiveDate {
        self.published_at.unwrap_or(self.created_at)
    }

    pub fn last_modified(&self) -> NaiveDate {
        self.updated_at.unwrap_or_else(|| self.sort_date())
    }
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse_date(&value).map_err(de::Error::custom)
}

fn deserialize_optional_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|value| parse_date(&value).map_err(de::Error::custom))
        .transpose()
}

/// Splits a leading `---` block from the body.
/// Content without such a block is returned whole, with no front matter.
pub(crate) fn split_front_matter(content: &str) -> anyhow::Result<(Option<String>, String)> {
    let header_pattern =
        regex::RegexBuilder::new(r"\A---\r?\n(.*?)^---[ \t]*\r?(?:\n|\z)(.*)\z")
            .dot_matches_new_line(true)
            .multi_line(true)
            .build()?;

    Ok(match header_pattern.captures(content) {
        Some(caps) => (Some(caps[1].to_string()), caps[2].to_string()),
        None => (None, content.to_string()),
    })
}

/// Accepts `YYYY-MM-DD` or a timestamp, keeping only the calendar date.
pub(crate) fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .with_context(|| format!("Invalid date format: {value}"))
}
