//! Title search prompt (search button or Ctrl/Cmd+F)

use calendar_core::{Filter, Modal};
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

use crate::debounce::should_live_search;
use crate::state::{search_announcement, CalendarState};

#[component]
pub fn SearchPrompt(state: CalendarState) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // Focus and select the input once the prompt is in the DOM
    Effect::new(move || {
        if state.is_open(Modal::Search) {
            Timeout::new(100, move || {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                    input.select();
                }
            })
            .forget();
        }
    });

    // Enter or OK: search now and close. An empty query shows everything.
    let perform_search = move || {
        state.cancel_title_query();
        let q = query.get_untracked().trim().to_string();
        if q.is_empty() {
            query.set(String::new());
            state.apply_filter(Filter::All);
        } else {
            let filter = Filter::title(&q);
            let count = state.count_matches(&filter);
            state.title_input.set(q.clone());
            state.apply_filter(filter);
            state.announce(search_announcement(&q, count));
        }
        state.close_modal(Modal::Search);
    };

    view! {
        <Show when=move || state.is_open(Modal::Search)>
            <div
                class="modal-overlay"
                id="prompt"
                role="dialog"
                aria-modal="true"
                aria-labelledby="search-title"
                on:click=move |_| state.backdrop_click(Modal::Search)
            >
                <div class="modal-content" id="search-content" on:click=|e| e.stop_propagation()>
                    <h2 id="search-title">"Search for a game"</h2>
                    <input
                        type="search"
                        id="search-input"
                        placeholder="Game title..."
                        node_ref=input_ref
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            query.set(value.clone());
                            if should_live_search(&value, state.config.live_search_min_chars) {
                                state.title_input.set(value.trim().to_string());
                                state.schedule_title_query(value);
                            } else {
                                state.cancel_title_query();
                            }
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                perform_search();
                            }
                        }
                    />
                    <div class="modal-actions">
                        <button id="search-ok" on:click=move |_| perform_search()>"OK"</button>
                        <button class="close-modal" on:click=move |_| state.close_modal(Modal::Search)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
