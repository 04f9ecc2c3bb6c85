//! Toast notifications and the screen-reader live region

use calendar_core::Toast;
use leptos::prelude::*;

use crate::state::CalendarState;

#[component]
pub fn Toasts(state: CalendarState) -> impl IntoView {
    view! {
        <div class="toast-container">
            <For
                each=move || state.toasts.with(|t| t.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| view! {
                    <div
                        class=format!("toast {}", toast.kind.css_class())
                        style:background-color=toast.kind.color()
                        role="status"
                    >
                        {toast.message}
                    </div>
                }
            />
        </div>
    }
}

#[component]
pub fn LiveRegion(state: CalendarState) -> impl IntoView {
    view! {
        <div class="sr-only" aria-live="polite" aria-atomic="true">
            {move || state.announcement.get()}
        </div>
    }
}
