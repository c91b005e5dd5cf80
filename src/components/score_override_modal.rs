//! Modal dialog for manually overriding a document's compliance score.

use leptos::prelude::*;

use grading::override_form::ScoreOverride;
use grading::Submission;

use crate::net::api::HttpGradingApi;
use crate::util::requests::{close_override, submit_override};
use crate::util::task::spawn_ui;

/// Override dialog. On save it runs `on_success` and then `on_close`; on
/// failure it stays open with the error shown inline.
#[component]
pub fn ScoreOverrideModal(document: Submission, on_success: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<HttpGradingApi>();
    let form = RwSignal::new(ScoreOverride::from_submission(&document));
    let current_score = document
        .overall_score()
        .map_or_else(|| "Not scored".to_owned(), |s| format!("{s:.0}%"));

    let submit = Callback::new(move |()| {
        if let Some(task) = submit_override(form, api.clone(), move || on_success.run(()), move || on_close.run(())) {
            spawn_ui(task);
        }
    });
    // Backdrop, Cancel, and Escape are ignored while a save is in flight.
    let close = move || {
        close_override(form, || on_close.run(()));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let submitting = move || form.with(ScoreOverride::is_submitting);
    let input_class = move || {
        let band = form.with(ScoreOverride::band);
        band.map_or_else(|| "dialog__input".to_owned(), |b| format!("dialog__input {}", b.css_class()))
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--override"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Override Compliance Score"</h2>
                <p class="dialog__subtitle">{form.with_untracked(|f| f.file_name().to_owned())}</p>
                <p class="dialog__current">"Current score: " {current_score}</p>

                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "New Score (0-100)"
                        <input
                            class=input_class
                            type="number"
                            min="0"
                            max="100"
                            step="1"
                            prop:value=move || form.with(|f| f.score_input.clone())
                            on:input=move |ev| form.update(|f| f.score_input = event_target_value(&ev))
                            disabled=submitting
                        />
                    </label>
                    <label class="dialog__label">
                        "Notes"
                        <textarea
                            class="dialog__textarea"
                            rows="4"
                            placeholder="Reason for the override"
                            prop:value=move || form.with(|f| f.notes.clone())
                            on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                            disabled=submitting
                        ></textarea>
                    </label>

                    <Show when=move || form.with(|f| f.error().is_some())>
                        <p class="dialog__error" role="alert">
                            {move || form.with(|f| f.error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| close() disabled=submitting>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=submitting>
                            {move || if submitting() { "Saving..." } else { "Override Score" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
