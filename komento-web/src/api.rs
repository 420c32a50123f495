use komento_client::api::{Comment, CommentId, NewComment};

use crate::{API_BASE, CLIENT};

// Every call answers with the full updated forest; a transport or server
// error is logged and surfaces as `None`, meaning "leave the current forest
// alone". No retries, no user-visible error.

async fn fetch_forest(req: reqwest::RequestBuilder) -> reqwest::Result<Vec<Comment>> {
    req.send().await?.error_for_status()?.json().await
}

pub async fn fetch_comments() -> Option<Vec<Comment>> {
    let req = CLIENT.get(format!("{API_BASE}/api/comments"));
    match fetch_forest(req).await {
        Ok(forest) => Some(forest),
        Err(e) => {
            tracing::error!("failed fetching comments: {e:?}");
            None
        }
    }
}

pub async fn add_comment(text: String) -> Option<Vec<Comment>> {
    let req = CLIENT
        .post(format!("{API_BASE}/api/comments"))
        .json(&NewComment { text });
    match fetch_forest(req).await {
        Ok(forest) => Some(forest),
        Err(e) => {
            tracing::error!("failed posting comment: {e:?}");
            None
        }
    }
}

pub async fn like_comment(id: CommentId) -> Option<Vec<Comment>> {
    let req = CLIENT.post(format!("{API_BASE}/api/comments/{}/like", id.0));
    match fetch_forest(req).await {
        Ok(forest) => Some(forest),
        Err(e) => {
            tracing::error!("failed liking comment {}: {e:?}", id.0);
            None
        }
    }
}

pub async fn reply_comment(parent: CommentId, text: String) -> Option<Vec<Comment>> {
    let req = CLIENT
        .post(format!("{API_BASE}/api/comments/{}/reply", parent.0))
        .json(&NewComment { text });
    match fetch_forest(req).await {
        Ok(forest) => Some(forest),
        Err(e) => {
            tracing::error!("failed replying to comment {}: {e:?}", parent.0);
            None
        }
    }
}
