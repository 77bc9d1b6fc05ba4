use leptos::*;
use leptos::ev::SubmitEvent;
use crate::models::review::ReviewDraft;

/// Name and review text inputs. `on_submit` returns whether the review was
/// accepted; only then are the fields cleared.
#[component]
pub fn ReviewForm(on_submit: Callback<ReviewDraft, bool>, children: Children) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (text, set_text) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ReviewDraft::new(name.get_untracked(), text.get_untracked());
        if on_submit.call(draft) {
            set_name.set(String::new());
            set_text.set(String::new());
        }
    };

    view! {
        <form id="reviewForm" class="review-form" on:submit=handle_submit>
            <h3>{ "Deixe sua avaliação" }</h3>
            {children()}
            <label for="reviewerName">{ "Seu nome" }</label>
            <input
                type="text"
                id="reviewerName"
                placeholder="Nome"
                prop:value=name
                on:input=move |e| set_name.set(event_target_value(&e))
            />
            <label for="reviewText">{ "Sua avaliação" }</label>
            <textarea
                id="reviewText"
                placeholder="Conte como foi sua experiência com o curso"
                prop:value=text
                on:input=move |e| set_text.set(event_target_value(&e))
            />
            <button type="submit" class="submit-review-btn">{ "Enviar avaliação" }</button>
        </form>
    }
}
