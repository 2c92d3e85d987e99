use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{deserialize_nullable_string, deserialize_nullable_vec};

/// Category applied when a new post does not name one.
pub const DEFAULT_CATEGORY: &str = "FINANCE";

/// Cover image stamped onto every new post.
pub const DEFAULT_COVER_IMAGE: &str =
    "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg";

/// Reading speed used for the read-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Server-assigned post identifier.
///
/// Serialized as a JSON number. Deserialization also accepts a numeric
/// string, which is what json-server v1 emits for generated ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PostId)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        PostId(id)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PostIdVisitor;

        impl<'de> Visitor<'de> for PostIdVisitor {
            type Value = PostId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative integer or numeric string")
            }

            fn visit_u64<E>(self, value: u64) -> Result<PostId, E>
            where
                E: de::Error,
            {
                Ok(PostId(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<PostId, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map(PostId)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_str<E>(self, value: &str) -> Result<PostId, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(PostIdVisitor)
    }
}

/// A blog post as stored by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub category: Vec<String>,
    /// ISO-8601 timestamp as sent by the server
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub cover_image: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub content: String,
}

impl Post {
    /// First category tag, shown as the post's label.
    pub fn primary_category(&self) -> Option<&str> {
        self.category.first().map(String::as_str)
    }

    /// All category tags joined for the metadata row.
    pub fn categories_label(&self) -> String {
        self.category.join(" & ")
    }

    /// Parsed publication date, if the server sent a valid RFC 3339 timestamp.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.date).ok()
    }

    /// Date formatted like `Oct 16, 2026`. Falls back to the raw string.
    pub fn formatted_date(&self) -> String {
        match self.published_at() {
            Some(dt) => dt.format("%b %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    /// Estimated reading time in whole minutes, never less than one.
    pub fn read_time_minutes(&self) -> usize {
        let words = self.content.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }
}

/// The partial record collected by the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: content.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: Vec<String>) -> Self {
        self.category = Some(category);
        self
    }

    /// Merge in the defaults the client stamps onto every submission.
    ///
    /// An explicitly provided category is kept as-is, even when empty.
    pub fn into_payload(self, now: DateTime<Utc>) -> CreatePostPayload {
        CreatePostPayload {
            title: self.title,
            description: self.description,
            content: self.content,
            category: self
                .category
                .unwrap_or_else(|| vec![DEFAULT_CATEGORY.to_string()]),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            cover_image: DEFAULT_COVER_IMAGE.to_string(),
        }
    }
}

/// The body sent to `POST /blogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostPayload {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Vec<String>,
    pub date: String,
    pub cover_image: String,
}
