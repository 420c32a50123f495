use std::str::FromStr;

use anyhow::{anyhow, Context};
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Comment not found {0}")]
    CommentNotFound(Uuid),

    #[error("Comment text is empty")]
    EmptyText,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::CommentNotFound(_) => StatusCode::NOT_FOUND,
            Error::EmptyText => StatusCode::BAD_REQUEST,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::CommentNotFound(id) => json!({
                "message": "comment not found",
                "type": "not-found",
                "id": id,
            }),
            Error::EmptyText => json!({
                "message": "comment text is empty",
                "type": "empty-text",
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "not-found" => Error::CommentNotFound(
                    data.get("id")
                        .and_then(|id| id.as_str())
                        .and_then(|id| Uuid::from_str(id).ok())
                        .ok_or_else(|| anyhow!("error is a not-found without a proper id"))?,
                ),
                "empty-text" => Error::EmptyText,
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_roundtrip_through_contents() {
        let errors = vec![
            Error::Unknown(String::from("boom")),
            Error::CommentNotFound(Uuid::new_v4()),
            Error::EmptyText,
        ];
        for e in errors {
            let parsed = Error::parse(&e.contents()).expect("parsing serialized error");
            assert_eq!(parsed, e);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Error::parse(b"{}").is_err());
        assert!(Error::parse(br#"{"type": "frobnicated"}"#).is_err());
        assert!(Error::parse(b"not even json").is_err());
    }
}
