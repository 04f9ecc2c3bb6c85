//! Release period navigation

use calendar_core::{Filter, Period};
use leptos::prelude::*;

use crate::state::CalendarState;

#[component]
pub fn PeriodNav(state: CalendarState) -> impl IntoView {
    let is_current = move |period: Period| state.filter.with(|f| f.active_period() == Some(period));

    view! {
        <nav class="period-nav" aria-label="Release period">
            <a
                href="#all"
                class:active=move || state.filter.with(|f| *f == Filter::All)
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    state.apply_filter(Filter::period("#all"));
                }
            >
                "All"
            </a>
            {Period::all().iter().copied().map(|period| view! {
                <a
                    href=format!("#{}", period.token())
                    class:active=move || is_current(period)
                    aria-current=move || is_current(period).then_some("page")
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        state.apply_filter(Filter::Period(period));
                    }
                >
                    {period.label()}
                </a>
            }).collect::<Vec<_>>()}
        </nav>
    }
}
