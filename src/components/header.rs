//! Page header: title, live clock, search and reload buttons

use calendar_core::Modal;
use chrono::{DateTime, Local, TimeZone};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::state::{CalendarState, LoadState};

/// Clock text as (time, date)
pub fn clock_text<Tz: TimeZone>(now: &DateTime<Tz>) -> (String, String)
where
    Tz::Offset: std::fmt::Display,
{
    (now.format("%H:%M:%S").to_string(), now.format("%d/%m/%Y").to_string())
}

#[component]
fn Clock() -> impl IntoView {
    let (now, set_now) = signal(Local::now());

    // Cancelled when the stored value is disposed with the component
    let _interval = StoredValue::new_local(Interval::new(1000, move || set_now.set(Local::now())));

    let text = Memo::new(move |_| clock_text(&now.get()));

    view! {
        <div class="header-clock" aria-live="off">
            <span class="clock-time">{move || text.get().0}</span>
            <span class="clock-date">{move || text.get().1}</span>
        </div>
    }
}

#[component]
pub fn Header(state: CalendarState) -> impl IntoView {
    let ready = Memo::new(move |_| state.load_state.with(|s| *s == LoadState::Ready));

    view! {
        <header class="app-header">
            <h1 class="app-title">"Game Release Calendar"</h1>
            <Clock />
            <div class="header-actions">
                <button
                    class="header-btn search-btn"
                    title="Search (Ctrl+F)"
                    aria-label="Search for a game"
                    disabled=move || !ready.get()
                    on:click=move |_| state.open_modal(Modal::Search)
                >
                    "Search"
                </button>
                <button
                    class="header-btn reload-btn"
                    title="Reload"
                    aria-label="Reload the page"
                    on:click=move |_| state.request_reload()
                >
                    "Reload"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_clock_text() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 3).unwrap();
        assert_eq!(clock_text(&now), ("09:05:03".to_string(), "19/10/2026".to_string()));
    }
}
