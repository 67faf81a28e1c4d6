use crate::helpers::generate_slug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = u64;
pub type AuthorId = u64;

/// A raw post as returned by the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    // The remote API calls this `userId`
    #[serde(rename = "userId", alias = "authorId")]
    pub author_id: AuthorId,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, author_id: AuthorId, title: &str, body: &str) -> Self {
        Self {
            id,
            author_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
    pub username: String,
}

impl Author {
    pub fn new(id: AuthorId, name: &str, email: &str, username: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            username: username.to_string(),
        }
    }

    /// First character of the name, uppercased. Used for avatar badges.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// A post plus the metadata derived when it was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: Post,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub tags: Vec<String>,
    pub read_time: u32,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl EnrichedPost {
    pub fn id(&self) -> PostId {
        self.post.id
    }

    pub fn title(&self) -> &str {
        &self.post.title
    }

    pub fn body(&self) -> &str {
        &self.post.body
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("Anonymous")
    }

    /// Read time as shown to readers; very short posts still read as one minute.
    pub fn display_read_time(&self) -> u32 {
        if self.read_time == 0 {
            1
        } else {
            self.read_time
        }
    }

    pub fn slug(&self) -> String {
        generate_slug(&self.post.title)
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> EnrichedPost {
        EnrichedPost {
            post: Post::new(7, 3, "Hello, World!", "Test content"),
            author: None,
            tags: vec!["React".to_string()],
            read_time: 0,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn post_reads_user_id_from_wire() {
        let json = r#"{"userId": 1, "id": 2, "title": "t", "body": "b"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author_id, 1);
        assert_eq!(post.id, 2);
    }

    #[test]
    fn post_accepts_author_id_alias() {
        let json = r#"{"authorId": 4, "id": 2, "title": "t", "body": "b"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author_id, 4);
    }

    #[test]
    fn author_ignores_extra_fields() {
        let json = r#"{"id": 1, "name": "Leanne Graham", "username": "Bret",
            "email": "Sincere@april.biz", "phone": "1-770", "address": {"city": "Gwenborough"}}"#;
        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author.username, "Bret");
        assert_eq!(author.initial(), "L");
    }

    #[test]
    fn enriched_post_presentation_defaults() {
        let post = sample();
        assert_eq!(post.author_name(), "Anonymous");
        assert_eq!(post.display_read_time(), 1);
        assert_eq!(post.slug(), "hello-world");
    }

    #[test]
    fn enriched_post_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["userId"], 3);
        assert_eq!(value["readTime"], 0);
        assert_eq!(value["createdAt"], "2024-01-15T00:00:00.000Z");
        assert!(value.get("author").is_none());

        let back: EnrichedPost = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample());
    }
}
