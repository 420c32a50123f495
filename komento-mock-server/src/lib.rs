use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use komento_client::{
    api::{Comment, CommentId, NewComment, Uuid},
    Forest,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod error;
pub use error::Error;

/// In-memory stand-in for the comments backend. Exposes the same
/// four-endpoint contract; ids are assigned at insertion time and every
/// mutation answers with the full resulting forest.
pub struct MockServer {
    forest: Forest,
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer {
            forest: Forest::stub(),
        }
    }

    pub fn list(&self) -> Vec<Comment> {
        self.forest.roots.clone()
    }

    pub fn add(&mut self, data: NewComment) -> Result<Vec<Comment>, Error> {
        data.validate()?;
        self.forest.roots.push(Comment::new(data.text));
        Ok(self.list())
    }

    pub fn like(&mut self, id: CommentId) -> Result<Vec<Comment>, Error> {
        match self.forest.find_mut(id) {
            None => return Err(Error::comment_not_found(id.0)),
            Some(c) => c.likes += 1,
        }
        Ok(self.list())
    }

    pub fn reply(&mut self, id: CommentId, data: NewComment) -> Result<Vec<Comment>, Error> {
        data.validate()?;
        match self.forest.find_mut(id) {
            None => return Err(Error::comment_not_found(id.0)),
            Some(c) => c.replies.push(Comment::new(data.text)),
        }
        Ok(self.list())
    }
}

pub type ServerState = Arc<Mutex<MockServer>>;

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/api/comments", get(list_comments).post(add_comment))
        .route("/api/comments/:id/like", post(like_comment))
        .route("/api/comments/:id/reply", post(reply_comment))
        .layer(TraceLayer::new_for_http())
        // the web client is served from another origin than the api
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn lock(state: &ServerState) -> Result<MutexGuard<'_, MockServer>, Error> {
    state
        .lock()
        .map_err(|e| Error::Anyhow(anyhow!("mock server state poisoned: {e}")))
}

async fn list_comments(State(state): State<ServerState>) -> Result<Json<Vec<Comment>>, Error> {
    Ok(Json(lock(&state)?.list()))
}

async fn add_comment(
    State(state): State<ServerState>,
    Json(data): Json<NewComment>,
) -> Result<Json<Vec<Comment>>, Error> {
    Ok(Json(lock(&state)?.add(data)?))
}

async fn like_comment(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, Error> {
    Ok(Json(lock(&state)?.like(CommentId(id))?))
}

async fn reply_comment(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(data): Json<NewComment>,
) -> Result<Json<Vec<Comment>>, Error> {
    Ok(Json(lock(&state)?.reply(CommentId(id), data)?))
}
