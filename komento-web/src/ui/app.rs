use komento_client::{
    api::{Comment, CommentId},
    Forest,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, ui};

pub enum AppMsg {
    ReceivedForest(Vec<Comment>),
    CommentAdded(Vec<Comment>),
    DraftChanged(String),
    SubmitDraft,
    Like(CommentId),
    Reply(CommentId, String),
}

/// Owns the authoritative forest and the draft of the next top-level comment.
/// Children only read the forest and report intents back up; every mutation
/// goes to the server and the response replaces the forest wholesale.
pub struct App {
    forest: Forest,
    draft: String,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            if let Some(forest) = api::fetch_comments().await {
                link.send_message(AppMsg::ReceivedForest(forest));
            }
        });
        App {
            forest: Forest::stub(),
            draft: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ReceivedForest(roots) => {
                self.forest.replace_with(roots);
                true
            }
            AppMsg::CommentAdded(roots) => {
                self.forest.replace_with(roots);
                self.draft.clear();
                true
            }
            AppMsg::DraftChanged(text) => {
                self.draft = text;
                true
            }
            AppMsg::SubmitDraft => {
                let text = self.draft.trim().to_string();
                if text.is_empty() {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Some(forest) = api::add_comment(text).await {
                        link.send_message(AppMsg::CommentAdded(forest));
                    }
                });
                false
            }
            AppMsg::Like(id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Some(forest) = api::like_comment(id).await {
                        link.send_message(AppMsg::ReceivedForest(forest));
                    }
                });
                false
            }
            AppMsg::Reply(parent, text) => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Some(forest) = api::reply_comment(parent, text).await {
                        link.send_message(AppMsg::ReceivedForest(forest));
                    }
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container p-4">
                <h1 class="mb-4">{ "Commenting System" }</h1>
                <ui::NewCommentBox
                    draft={ self.draft.clone() }
                    on_change={ ctx.link().callback(AppMsg::DraftChanged) }
                    on_submit={ ctx.link().callback(|()| AppMsg::SubmitDraft) }
                />
                <ui::CommentTree
                    forest={ self.forest.roots.clone() }
                    on_like={ ctx.link().callback(AppMsg::Like) }
                    on_reply={ ctx.link().callback(|(parent, text)| AppMsg::Reply(parent, text)) }
                />
            </div>
        }
    }
}
