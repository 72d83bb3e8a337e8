//! Comment entities. `DetailComment` is where soft-deleted content is redacted.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::payload::{Payload, Shape};

/// Content shown in place of a soft-deleted comment.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// A request to comment on a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddComment {
    pub content: String,
    /// Id of the thread being commented on
    pub thread: String,
    pub owner: String,
}

impl AddComment {
    pub fn parse(payload: &Payload) -> Result<Self, ValidationError> {
        let shape = Shape::new("ADD_COMMENT", payload);
        shape.require(&["content", "thread", "owner"])?;

        Ok(Self {
            content: shape.string("content")?,
            thread: shape.string("thread")?,
            owner: shape.string("owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn parse(payload: &Payload) -> Result<Self, ValidationError> {
        let shape = Shape::new("ADDED_COMMENT", payload);
        shape.require(&["id", "content", "owner"])?;

        Ok(Self {
            id: shape.string("id")?,
            content: shape.string("content")?,
            owner: shape.string("owner")?,
        })
    }
}

/// A comment as shown inside a thread detail.
///
/// Built from a raw comment row (`id, username, date, content, is_delete`).
/// When the row is soft-deleted, `content` holds
/// [`DELETED_COMMENT_PLACEHOLDER`] and never the stored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailComment {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    #[serde(rename = "isDelete")]
    pub is_delete: bool,
}

impl DetailComment {
    pub fn parse(payload: &Payload) -> Result<Self, ValidationError> {
        let shape = Shape::new("DETAIL_COMMENT", payload);
        shape.require(&["id", "username", "date", "content", "is_delete"])?;

        let id = shape.string("id")?;
        let username = shape.string("username")?;
        let date = shape.string("date")?;
        let content = shape.string("content")?;
        let is_delete = shape.boolean("is_delete")?;

        Ok(Self {
            id,
            username,
            date,
            content: if is_delete { DELETED_COMMENT_PLACEHOLDER.to_string() } else { content },
            is_delete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationKind;
    use crate::payload::payload_from;
    use serde_json::json;

    fn comment_row(content: &str, is_delete: serde_json::Value) -> Payload {
        payload_from(json!({
            "id": "comment-123",
            "username": "dicoding",
            "date": "2023-02-04T08:18:33.585Z",
            "content": content,
            "is_delete": is_delete,
        }))
    }

    #[test]
    fn add_comment_rejects_missing_content() {
        let payload = payload_from(json!({ "thread": "thread-123", "owner": "user-123" }));

        let err = AddComment::parse(&payload).unwrap_err();
        assert_eq!(err.code(), "ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
        assert_eq!(err.property, "content");
    }

    #[test]
    fn add_comment_rejects_wrong_type() {
        let payload =
            payload_from(json!({ "content": [], "thread": "thread-123", "owner": "user-123" }));

        let err = AddComment::parse(&payload).unwrap_err();
        assert_eq!(err.code(), "ADD_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn added_comment_parses_projection() {
        let payload =
            payload_from(json!({ "id": "comment-123", "content": "hi", "owner": "user-123" }));

        let added = AddedComment::parse(&payload).unwrap();
        assert_eq!(added.id, "comment-123");
        assert_eq!(added.content, "hi");
        assert_eq!(added.owner, "user-123");
    }

    /// Every key holds the wrong type, then one key at a time is dropped:
    /// the dropped key must be reported as missing.
    fn assert_missing_wins<T: std::fmt::Debug>(
        keys: &[&str],
        parse: impl Fn(&Payload) -> Result<T, ValidationError>,
    ) {
        for dropped in keys {
            let mut payload = Payload::new();
            for key in keys.iter().filter(|key| *key != dropped) {
                payload.insert(key.to_string(), json!(123));
            }

            let err = parse(&payload).unwrap_err();
            assert_eq!(err.kind, ValidationKind::MissingProperty, "dropping {dropped}");
            assert_eq!(err.property, *dropped);
        }
    }

    #[test]
    fn add_comment_reports_each_missing_key_before_types() {
        assert_missing_wins(&["content", "thread", "owner"], AddComment::parse);
    }

    #[test]
    fn added_comment_reports_each_missing_key_before_types() {
        assert_missing_wins(&["id", "content", "owner"], AddedComment::parse);
    }

    #[test]
    fn detail_comment_reports_each_missing_key_before_types() {
        assert_missing_wins(
            &["id", "username", "date", "content", "is_delete"],
            DetailComment::parse,
        );
    }

    #[test]
    fn added_comment_rejects_missing_owner() {
        let payload = payload_from(json!({ "id": "comment-123", "content": "hi" }));

        let err = AddedComment::parse(&payload).unwrap_err();
        assert_eq!(err.code(), "ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
        assert_eq!(err.property, "owner");
    }

    #[test]
    fn added_comment_rejects_wrong_type() {
        let payload = payload_from(json!({ "id": 123, "content": "hi", "owner": "user-123" }));

        let err = AddedComment::parse(&payload).unwrap_err();
        assert_eq!(err.code(), "ADDED_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
        assert_eq!(err.property, "id");
    }

    #[test]
    fn detail_comment_rejects_missing_property() {
        let payload = payload_from(json!({ "id": "user-123", "content": "abc" }));

        let err = DetailComment::parse(&payload).unwrap_err();
        assert_eq!(err.code(), "DETAIL_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY");
    }

    #[test]
    fn detail_comment_rejects_wrong_type() {
        let payload = payload_from(json!({
            "id": {},
            "username": [],
            "date": "123",
            "content": 12,
            "is_delete": "true",
        }));

        let err = DetailComment::parse(&payload).unwrap_err();
        assert_eq!(err.code(), "DETAIL_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
    }

    #[test]
    fn detail_comment_treats_false_flag_as_present() {
        let detail = DetailComment::parse(&comment_row("abc", json!(false))).unwrap();

        assert_eq!(detail.id, "comment-123");
        assert_eq!(detail.username, "dicoding");
        assert_eq!(detail.date, "2023-02-04T08:18:33.585Z");
        assert_eq!(detail.content, "abc");
        assert!(!detail.is_delete);
    }

    #[test]
    fn detail_comment_missing_flag_is_missing_not_wrong_type() {
        let mut row = comment_row("abc", json!(false));
        row.remove("is_delete");

        let err = DetailComment::parse(&row).unwrap_err();
        assert_eq!(err.kind, ValidationKind::MissingProperty);
        assert_eq!(err.property, "is_delete");
    }

    #[test]
    fn detail_comment_redacts_deleted_content() {
        for original in ["abc", "something rude", "**komentar telah dihapus**", " "] {
            let detail = DetailComment::parse(&comment_row(original, json!(true))).unwrap();
            assert_eq!(detail.content, DELETED_COMMENT_PLACEHOLDER);
            assert!(detail.is_delete);
        }
    }

    #[test]
    fn detail_comment_serializes_camel_case_flag() {
        let detail = DetailComment::parse(&comment_row("abc", json!(false))).unwrap();

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["isDelete"], json!(false));
        assert!(value.get("is_delete").is_none());
    }
}
