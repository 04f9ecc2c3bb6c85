//! Genre buttons, title filter input and the filter status line

use calendar_core::{Catalog, Favorites, Filter, GENRE_ALL, GENRE_FAVORITES};
use leptos::prelude::*;

use crate::state::CalendarState;

/// Favorites button text, with the count once there is at least one
pub fn favorites_label(count: usize) -> String {
    if count > 0 {
        format!("My Favorites ({})", count)
    } else {
        "My Favorites".to_string()
    }
}

#[component]
pub fn FilterBar(state: CalendarState) -> impl IntoView {
    let genres = Memo::new(move |_| state.catalog.with(Catalog::genres));
    let visible_count = Memo::new(move |_| state.visible_games().len());

    let select_genre = move |token: &str| state.apply_filter(Filter::genre(token));
    let all_pressed = Memo::new(move |_| state.filter.with(|f| f.active_genre() == Some(GENRE_ALL)));
    let favorites_pressed =
        Memo::new(move |_| state.filter.with(|f| f.active_genre() == Some(GENRE_FAVORITES)));

    view! {
        <section class="filters" aria-label="Filters">
            <div class="genre-filters" role="group" aria-label="Genre">
                <button
                    class="filter-btn"
                    data-genre=GENRE_ALL
                    class:active=all_pressed
                    aria-pressed=move || all_pressed.get().to_string()
                    on:click=move |_| select_genre(GENRE_ALL)
                >
                    "All Games"
                </button>
                <For
                    each=move || genres.get()
                    key=|genre| genre.clone()
                    children=move |genre: String| {
                        let token = genre.clone();
                        let pressed = Memo::new(move |_| {
                            state.filter.with(|f| f.active_genre() == Some(token.as_str()))
                        });
                        let on_click_genre = genre.clone();
                        let data_genre = genre.clone();
                        view! {
                            <button
                                class="filter-btn"
                                data-genre=data_genre
                                class:active=pressed
                                aria-pressed=move || pressed.get().to_string()
                                on:click=move |_| select_genre(&on_click_genre)
                            >
                                {genre}
                            </button>
                        }
                    }
                />
                <button
                    class="filter-btn favorites-filter"
                    data-genre=GENRE_FAVORITES
                    class:active=favorites_pressed
                    aria-pressed=move || favorites_pressed.get().to_string()
                    on:click=move |_| select_genre(GENRE_FAVORITES)
                >
                    <span aria-hidden="true">"♥ "</span>
                    {move || favorites_label(state.favorites.with(Favorites::len))}
                </button>
            </div>
            <div class="title-filter">
                <label for="title-filter-input" class="sr-only">"Filter by title"</label>
                <input
                    type="text"
                    id="title-filter-input"
                    placeholder="Filter by title..."
                    prop:value=move || state.title_input.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.title_input.set(value.clone());
                        state.schedule_title_query(value);
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            state.apply_filter(Filter::All);
                        }
                    }
                />
            </div>
            <p class="filter-status" role="status">
                {move || state.filter.with(|f| f.status_line(visible_count.get()))}
            </p>
        </section>
    }
}
