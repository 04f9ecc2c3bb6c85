//! Game details dialog, used for games without an external page

use calendar_core::Modal;
use leptos::prelude::*;

use crate::state::CalendarState;

#[component]
pub fn GameDetails(state: CalendarState) -> impl IntoView {
    view! {
        <Show when=move || state.is_open(Modal::Details)>
            {move || {
                state.selected_game.get().map(|g| {
                    let title = g.title.clone();
                    let alt = title.clone();
                    let image = g.image.clone();
                    let developer = g
                        .developer
                        .clone()
                        .filter(|d| !d.trim().is_empty())
                        .unwrap_or_else(|| "Not specified".to_string());
                    let platforms = (!g.platform.is_empty()).then(|| g.platform.join(", "));
                    let release = (!g.release_date.is_empty()).then(|| format_date(&g.release_date));
                    let rating = g.display_rating();
                    let description = g.description.clone().filter(|d| !d.trim().is_empty());

                    view! {
                        <div
                            class="modal-overlay"
                            id="dialog"
                            role="dialog"
                            aria-modal="true"
                            aria-labelledby="dialog-title"
                            on:click=move |_| state.backdrop_click(Modal::Details)
                        >
                            <div class="modal-content" id="dialog-content" on:click=|e| e.stop_propagation()>
                                <div class="game-details">
                                    <img src=image alt=alt class="game-details-image" />
                                    <div class="game-details-info">
                                        <h2 id="dialog-title">{title}</h2>
                                        <h3>{g.subtitle.clone()}</h3>
                                        <p><strong>"Genre: "</strong>{g.genre.clone()}</p>
                                        {g.year.map(|y| view! {
                                            <p><strong>"Year: "</strong>{y}</p>
                                        })}
                                        {release.map(|d| view! {
                                            <p><strong>"Release date: "</strong>{d}</p>
                                        })}
                                        <p><strong>"Developer: "</strong>{developer}</p>
                                        {platforms.map(|p| view! {
                                            <p><strong>"Platforms: "</strong>{p}</p>
                                        })}
                                        {rating.map(|r| view! {
                                            <p><strong>"Rating: "</strong>{format!("★ {}/5", r)}</p>
                                        })}
                                        {description.map(|d| view! {
                                            <p class="game-description">{d}</p>
                                        })}
                                    </div>
                                </div>
                                <button class="close-modal" on:click=move |_| state.close_modal(Modal::Details)>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    }
                })
            }}
        </Show>
    }
}

/// "2026-10-19" -> "Oct 19, 2026"; anything unparseable is shown as-is
fn format_date(date_str: &str) -> String {
    use chrono::NaiveDate;

    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
