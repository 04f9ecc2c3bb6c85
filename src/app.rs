use calendar_core::Modal;
use leptos::ev;
use leptos::prelude::*;

use crate::components::{
    ConfirmDialog, FilterBar, GameDetails, GameGrid, Header, LiveRegion, PeriodNav, SearchPrompt,
    Toasts,
};
use crate::config::{AppConfig, BUILD_HASH, BUILD_TIMESTAMP};
use crate::state::{CalendarState, LoadState};

/// Ctrl+F or Cmd+F
fn is_search_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case("f")
}

#[component]
pub fn App() -> impl IntoView {
    let state = CalendarState::new(AppConfig::default());
    state.load_catalog();

    let ready = Memo::new(move |_| state.load_state.with(|s| *s == LoadState::Ready));

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            state.escape();
        } else if is_search_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            if ready.get_untracked() {
                state.open_modal(Modal::Search);
            }
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="app-container">
            <Header state=state />
            <main class="main-content">
                <Show when=move || ready.get()>
                    <PeriodNav state=state />
                    <FilterBar state=state />
                </Show>
                <GameGrid state=state />
            </main>
            <footer class="app-footer">
                <span class="build-info">
                    {format!("Build {} · {}", BUILD_HASH, BUILD_TIMESTAMP)}
                </span>
            </footer>
            <GameDetails state=state />
            <SearchPrompt state=state />
            <ConfirmDialog state=state />
            <Toasts state=state />
            <LiveRegion state=state />
            <Show when=move || state.reloading.get()>
                <div class="loading-overlay" role="alert" aria-busy="true">
                    <div class="spinner"></div>
                    <p>"Reloading..."</p>
                </div>
            </Show>
        </div>
    }
}
