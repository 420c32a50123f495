use uuid::Uuid;

use crate::{Error, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

/// One comment and its nested replies. The server is the only writer: ids are
/// assigned on creation and `likes`/`replies` only change server-side.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: CommentId,
    pub text: String,
    pub likes: u64,
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn new(text: String) -> Comment {
        Comment {
            id: CommentId(Uuid::new_v4()),
            text,
            likes: 0,
            replies: Vec::new(),
        }
    }
}

/// Body of both the create and the reply endpoints.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub text: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), Error> {
        if self.text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_json_shape() {
        let c = Comment {
            id: CommentId::stub(),
            text: String::from("hi"),
            likes: 0,
            replies: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({
                "_id": "ffffffff-ffff-ffff-ffff-ffffffffffff",
                "text": "hi",
                "likes": 0,
                "replies": [],
            }),
        );
    }

    #[test]
    fn forest_json_roundtrip() {
        let json = serde_json::json!([{
            "_id": "a351a659-9a15-4880-92cf-e1b233371e45",
            "text": "hi",
            "likes": 1,
            "replies": [{
                "_id": "2de8238d-66b0-4b4f-92b9-e4a5c0d047e6",
                "text": "thanks",
                "likes": 0,
                "replies": [],
            }],
        }]);
        let forest: Vec<Comment> = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].text, "hi");
        assert_eq!(forest[0].likes, 1);
        assert_eq!(forest[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].text, "thanks");
        assert_eq!(serde_json::to_value(&forest).unwrap(), json);
    }

    #[test]
    fn validate_rejects_whitespace_only_text() {
        for text in ["", " ", "\t", "  \n "] {
            let c = NewComment {
                text: String::from(text),
            };
            assert_eq!(c.validate(), Err(Error::EmptyText));
        }
        let c = NewComment {
            text: String::from("  hi  "),
        };
        assert_eq!(c.validate(), Ok(()));
    }
}
