use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct NewCommentBoxProps {
    pub draft: String,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Compose box for new top-level comments. The draft lives in the app state
/// so a successful submission can clear it.
#[function_component(NewCommentBox)]
pub fn new_comment_box(p: &NewCommentBoxProps) -> Html {
    let oninput = p.on_change.reform(|e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    let onkeydown = {
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" {
                on_submit.emit(());
            }
        })
    };
    html! {
        <div class="mb-4">
            <input
                type="text"
                class="form-control"
                placeholder="Write a comment..."
                aria-label="New comment"
                value={ p.draft.clone() }
                {oninput}
                {onkeydown}
            />
            <button
                type="button"
                class="btn btn-primary mt-1"
                onclick={ p.on_submit.reform(|_| ()) }
            >
                { "Add Comment" }
            </button>
        </div>
    }
}
