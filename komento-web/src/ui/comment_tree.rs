use komento_client::api::{Comment, CommentId};
use yew::prelude::*;

use crate::ui::CommentItem;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentTreeProps {
    pub forest: Vec<Comment>,
    pub on_like: Callback<CommentId>,
    pub on_reply: Callback<(CommentId, String)>,
}

/// Renders the whole forest in display order: depth-first, each node directly
/// followed by its replies, sibling order as the server gave it.
#[function_component(CommentTree)]
pub fn comment_tree(p: &CommentTreeProps) -> Html {
    p.forest
        .iter()
        .map(|c| {
            html! {
                <CommentItem
                    key={ c.id.0.to_string() }
                    comment={ c.clone() }
                    on_like={ p.on_like.clone() }
                    on_reply={ p.on_reply.clone() }
                />
            }
        })
        .collect()
}
