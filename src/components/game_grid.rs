//! Game card grid

use calendar_core::Game;
use leptos::prelude::*;

use crate::api;
use crate::state::{CalendarState, LoadState};

/// Shown in place of a cover that fails to load
const IMAGE_PLACEHOLDER: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='280' height='200'><rect width='280' height='200' fill='rgba(255,255,255,0.1)'/><text x='140' y='100' font-family='Arial, sans-serif' font-size='14' fill='rgba(255,255,255,0.6)' text-anchor='middle' dy='.3em'>Image unavailable</text></svg>";

/// What the grid area shows
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    Loading,
    Failed(String),
    /// Loaded, but nothing to show: empty catalog or no match
    Empty,
    Games,
}

impl GridContent {
    pub fn resolve(load_state: &LoadState, visible: usize) -> Self {
        match load_state {
            LoadState::Loading => GridContent::Loading,
            LoadState::Failed(err) => GridContent::Failed(err.clone()),
            LoadState::Ready if visible == 0 => GridContent::Empty,
            LoadState::Ready => GridContent::Games,
        }
    }
}

#[component]
pub fn GameGrid(state: CalendarState) -> impl IntoView {
    let visible = Memo::new(move |_| state.visible_games());
    let content = Memo::new(move |_| {
        state.load_state.with(|s| GridContent::resolve(s, visible.with(Vec::len)))
    });

    view! {
        <section class="games-container" id="games-container">
            {move || match content.get() {
                GridContent::Loading => view! {
                    <p class="loading-message">"Loading games..."</p>
                }.into_any(),
                GridContent::Failed(err) => view! {
                    <div class="error-message" role="alert">
                        <h3>"Loading failed"</h3>
                        <p>"Could not load the game catalog from " {state.config.catalog_url}</p>
                        <p class="error-detail">{err}</p>
                        <p>"Check that the file exists and is reachable."</p>
                        <button class="retry-btn" on:click=|_| api::reload_page()>"Retry"</button>
                    </div>
                }.into_any(),
                GridContent::Empty => view! {
                    <p class="no-games">"No games found"</p>
                }.into_any(),
                GridContent::Games => view! {
                    <div class="game-grid">
                        <For
                            each=move || visible.get()
                            key=|game| game.id
                            children=move |game: Game| view! { <GameCard game=game state=state /> }
                        />
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn GameCard(game: Game, state: CalendarState) -> impl IntoView {
    let id = game.id;
    let (image_failed, set_image_failed) = signal(false);
    let is_favorite = move || state.is_favorite(id);
    let favorite_label = move || {
        if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
    };

    let aria_label = format!("{} - {}", game.title, game.subtitle);
    let title = game.title.clone();
    let alt = title.clone();
    let image = game.image.clone();
    let release_line = game.release_line();
    let rating = game.display_rating();
    let badge = game.badge.clone();
    let badge_color = game.badge_color().to_string();

    let open = move || state.open_game(id);

    view! {
        <article
            class="game-card"
            tabindex="0"
            role="button"
            aria-label=aria_label
            data-game-id=id.to_string()
            on:click=move |_| open()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    open();
                }
            }
        >
            <div class="image-container">
                <img
                    src=move || if image_failed.get() { IMAGE_PLACEHOLDER.to_string() } else { image.clone() }
                    alt=alt
                    class="game-card-image"
                    class:error=move || image_failed.get()
                    loading="lazy"
                    on:error=move |_| set_image_failed.set(true)
                />
                <div class="image-overlay"></div>
                // Must not bubble to the card, or it would also open the details
                <button
                    class="favorite-btn"
                    class:active=is_favorite
                    data-game-id=id.to_string()
                    aria-label=favorite_label
                    title=favorite_label
                    aria-pressed=move || if is_favorite() { "true" } else { "false" }
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        state.toggle_favorite(id);
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| ev.stop_propagation()
                >
                    <span aria-hidden="true">{move || if is_favorite() { "♥" } else { "♡" }}</span>
                </button>
            </div>
            <div class="game-card-content">
                <h3 class="game-card-title">{title}</h3>
                <p class="game-card-release">{release_line}</p>
                {rating.map(|r| view! { <div class="game-rating">{format!("★ {}/5", r)}</div> })}
            </div>
            <span class="game-card-badge" style:background-color=badge_color>{badge}</span>
        </article>
    }
}
