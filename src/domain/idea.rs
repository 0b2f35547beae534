use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One image variant attached to an idea.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IdeaImage {
    pub url: String,
}

/// A content item returned by the remote API. Read-only on our side; the
/// application holds an immutable snapshot per fetch cycle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Idea {
    pub id: i64,
    pub title: String,
    #[serde(with = "published_at_format")]
    pub published_at: NaiveDateTime,
    #[serde(default)]
    pub small_image: Option<IdeaImage>,
    #[serde(default)]
    pub medium_image: Option<IdeaImage>,
}

/// The remote service reports timestamps as `2023-01-05 10:45:00`; some
/// deployments emit RFC 3339 instead. Serialization uses the `T`-separated
/// form that template date filters understand.
mod published_at_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const SERIALIZED: &str = "%Y-%m-%dT%H:%M:%S";
    const WIRE: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(SERIALIZED).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, WIRE)
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, SERIALIZED))
            .or_else(|_| chrono::DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_utc()))
            .map_err(de::Error::custom)
    }
}
