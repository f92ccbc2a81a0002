use serde::{Deserialize, Serialize};

/// Numeric identifier of a blog post.
///
/// Posts are addressed by their explicit `id` field, never by the
/// store-native document identifier.
pub type PostId = i64;

/// A single blog post as stored in the post collection and returned by the API.
///
/// Field names on the wire (and in the persisted documents) use the
/// fixture's camel-case spelling, e.g. `commentsCount`. Extra fields that a
/// backend attaches to stored documents are ignored on deserialization, and
/// every field except `id` reads as empty or zero when a document lacks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Unique post identifier.
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: PostId,
    /// Publication date, kept verbatim as supplied by the fixture.
    #[cfg_attr(feature = "openapi", schema(example = "2024-03-01"))]
    #[serde(default)]
    pub date: String,
    /// Post title.
    #[serde(default)]
    pub title: String,
    /// Post body.
    #[serde(default)]
    pub content: String,
    /// Author display name.
    #[serde(default)]
    pub author: String,
    /// Number of comments on the post.
    #[serde(default)]
    pub comments_count: i64,
    /// Number of likes on the post.
    #[serde(default)]
    pub likes: i64,
    /// Category the post is filed under. Matched exactly and case-sensitively.
    #[cfg_attr(feature = "openapi", schema(example = "tech"))]
    #[serde(default)]
    pub category: String,
}

impl BlogPost {
    /// Returns `true` if this post is filed under exactly `category`.
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

/// Parse a raw path segment into a [`PostId`].
///
/// Returns `None` for anything that is not a base-10 64-bit integer. Callers
/// treat `None` the same as a lookup miss.
pub fn parse_post_id(raw: &str) -> Option<PostId> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost {
            id: 7,
            date: "2024-03-01".into(),
            title: "Hello".into(),
            content: "First post".into(),
            author: "Ada".into(),
            comments_count: 3,
            likes: 12,
            category: "tech".into(),
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["commentsCount"], 3);
        assert_eq!(json["likes"], 12);
        assert!(json.get("comments_count").is_none());
    }

    #[test]
    fn deserialize_ignores_store_metadata() {
        let json = serde_json::json!({
            "_id": "65f1c0ffee",
            "__v": 0,
            "id": 7,
            "date": "2024-03-01",
            "title": "Hello",
            "content": "First post",
            "author": "Ada",
            "commentsCount": 3,
            "likes": 12,
            "category": "tech"
        });
        let post: BlogPost = serde_json::from_value(json).unwrap();
        assert_eq!(post, sample());
    }

    #[test]
    fn counters_default_to_zero() {
        let json = serde_json::json!({
            "id": 1,
            "date": "2024-01-01",
            "title": "t",
            "content": "c",
            "author": "a",
            "category": "misc"
        });
        let post: BlogPost = serde_json::from_value(json).unwrap();
        assert_eq!(post.comments_count, 0);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn sparse_document_reads_with_empty_fields() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({"id": 9})).unwrap();
        assert_eq!(post.id, 9);
        assert!(post.title.is_empty());
        assert!(post.category.is_empty());
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn id_is_required() {
        let result = serde_json::from_value::<BlogPost>(serde_json::json!({"title": "t"}));
        assert!(result.is_err());
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let post = sample();
        assert!(post.in_category("tech"));
        assert!(!post.in_category("Tech"));
        assert!(!post.in_category("tec"));
    }

    #[test]
    fn parse_post_id_rejects_malformed_segments() {
        assert_eq!(parse_post_id("42"), Some(42));
        assert_eq!(parse_post_id("-3"), Some(-3));
        assert_eq!(parse_post_id("abc"), None);
        assert_eq!(parse_post_id("4.2"), None);
        assert_eq!(parse_post_id(""), None);
        assert_eq!(parse_post_id("99999999999999999999"), None);
    }
}
