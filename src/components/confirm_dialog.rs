//! Yes/no confirmation built on demand by `CalendarState::ask_confirm`

use calendar_core::Modal;
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::state::CalendarState;

#[component]
pub fn ConfirmDialog(state: CalendarState) -> impl IntoView {
    let cancel_ref = NodeRef::<html::Button>::new();

    // Default focus goes to "No"
    Effect::new(move || {
        if state.is_open(Modal::Confirm) {
            Timeout::new(100, move || {
                if let Some(button) = cancel_ref.get_untracked() {
                    let _ = button.focus();
                }
            })
            .forget();
        }
    });

    let message = move || {
        state.confirm.with(|c| c.as_ref().map(|r| r.message.clone()).unwrap_or_default())
    };

    view! {
        <Show when=move || state.is_open(Modal::Confirm)>
            <div class="confirm-dialog" role="dialog" aria-modal="true" aria-labelledby="confirm-title">
                <div class="confirm-content">
                    <h3 id="confirm-title">"Confirmation"</h3>
                    <p>{message}</p>
                    <div class="confirm-buttons">
                        <button class="confirm-btn confirm-yes" on:click=move |_| state.resolve_confirm(true)>
                            "Yes"
                        </button>
                        <button
                            class="confirm-btn confirm-no"
                            node_ref=cancel_ref
                            on:click=move |_| state.resolve_confirm(false)
                        >
                            "No"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
