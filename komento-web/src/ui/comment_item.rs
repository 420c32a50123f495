use komento_client::api::{Comment, CommentId};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub comment: Comment,
    pub on_like: Callback<CommentId>,
    pub on_reply: Callback<(CommentId, String)>,
}

/// One comment with its controls, then its replies rendered recursively with
/// the same two callbacks. The reply box and its draft are state local to
/// this node; nothing is sent until the reply is submitted.
#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let reply_box_shown = use_state(|| false);
    let reply_draft = use_state(String::new);

    let on_like = {
        let id = p.comment.id;
        p.on_like.reform(move |_| id)
    };
    let toggle_reply_box = {
        let reply_box_shown = reply_box_shown.clone();
        Callback::from(move |_| reply_box_shown.set(!*reply_box_shown))
    };
    let submit_reply = {
        let id = p.comment.id;
        let on_reply = p.on_reply.clone();
        let reply_draft = reply_draft.clone();
        let reply_box_shown = reply_box_shown.clone();
        Callback::from(move |_| {
            let text = reply_draft.trim().to_string();
            if text.is_empty() {
                return;
            }
            on_reply.emit((id, text));
            reply_draft.set(String::new());
            reply_box_shown.set(false);
        })
    };

    let reply_box = reply_box_shown.then(|| {
        let oninput = {
            let reply_draft = reply_draft.clone();
            Callback::from(move |e: web_sys::InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                reply_draft.set(input.value());
            })
        };
        html! {
            <div class="mt-2">
                <input
                    type="text"
                    class="form-control form-control-sm"
                    placeholder="Write a reply..."
                    aria-label="Reply text"
                    value={ (*reply_draft).clone() }
                    {oninput}
                />
                <button
                    type="button"
                    class="btn btn-primary btn-sm mt-1"
                    onclick={ submit_reply }
                >
                    { "Reply" }
                </button>
            </div>
        }
    });

    html! {
        <div class="border rounded p-2 mb-2">
            <div>{ &p.comment.text }</div>
            <div class="d-flex align-items-center mt-1">
                <button
                    type="button"
                    class="btn bi-btn bi-hand-thumbs-up"
                    aria-label="Like"
                    onclick={ on_like }
                >
                </button>
                <span class="me-2">{ p.comment.likes }</span>
                <button
                    type="button"
                    class="btn bi-btn bi-reply"
                    aria-label="Reply"
                    onclick={ toggle_reply_box }
                >
                </button>
            </div>
            { for reply_box }
            { for p.comment.replies.iter().map(|r| html! {
                <CommentItem
                    key={ r.id.0.to_string() }
                    comment={ r.clone() }
                    on_like={ p.on_like.clone() }
                    on_reply={ p.on_reply.clone() }
                />
            }) }
        </div>
    }
}
