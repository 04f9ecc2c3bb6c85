//! Shared page state
//!
//! One `CalendarState` is created by the app root and handed to every
//! component. It is a bundle of signal handles, so copying it is free.

use calendar_core::{Catalog, Favorites, Filter, Game, Modal, ModalSet, ToastKind, ToastStack};
use chrono::{Local, NaiveDate};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::api;
use crate::config::AppConfig;
use crate::debounce::Debouncer;
use crate::storage::LocalStorageStore;

/// Catalog load progress. Filters are only usable once `Ready`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// A pending yes/no question and what to do with each answer
#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Option<Callback<()>>,
}

#[derive(Clone, Copy)]
pub struct CalendarState {
    pub config: AppConfig,
    pub load_state: RwSignal<LoadState>,
    pub catalog: RwSignal<Catalog>,
    pub favorites: RwSignal<Favorites>,
    pub filter: RwSignal<Filter>,
    /// Text in the title filter input; cleared whenever another filter wins
    pub title_input: RwSignal<String>,
    pub modals: RwSignal<ModalSet>,
    pub selected_game: RwSignal<Option<Game>>,
    pub confirm: RwSignal<Option<ConfirmRequest>>,
    pub toasts: RwSignal<ToastStack>,
    /// Polite screen-reader announcement
    pub announcement: RwSignal<String>,
    /// Set once a reload has been confirmed
    pub reloading: RwSignal<bool>,
    /// One pending title evaluation for the title input and the search prompt
    title_debounce: StoredValue<Debouncer, LocalStorage>,
    /// Bumped whenever a non-title filter wins; a pending title query from an
    /// older epoch is dropped
    title_epoch: StoredValue<u64>,
}

/// Local calendar date; period windows are computed from it
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Screen-reader text for a finished search
pub fn search_announcement(query: &str, count: usize) -> String {
    match count {
        0 => format!("No results for \"{}\"", query),
        1 => format!("1 game found for \"{}\"", query),
        n => format!("{} games found for \"{}\"", n, query),
    }
}

/// Toast text and kind after a favorite toggle
pub fn favorite_toast(now_favorite: bool) -> (&'static str, ToastKind) {
    if now_favorite {
        ("Added to favorites", ToastKind::Success)
    } else {
        ("Removed from favorites", ToastKind::Info)
    }
}

impl CalendarState {
    pub fn new(config: AppConfig) -> Self {
        let favorites = Favorites::load(&LocalStorageStore::new(config.favorites_key));
        Self::with_favorites(config, favorites)
    }

    pub fn with_favorites(config: AppConfig, favorites: Favorites) -> Self {
        Self {
            config,
            load_state: RwSignal::new(LoadState::Loading),
            catalog: RwSignal::new(Catalog::default()),
            favorites: RwSignal::new(favorites),
            filter: RwSignal::new(Filter::All),
            title_input: RwSignal::new(String::new()),
            modals: RwSignal::new(ModalSet::new()),
            selected_game: RwSignal::new(None),
            confirm: RwSignal::new(None),
            toasts: RwSignal::new(ToastStack::new()),
            announcement: RwSignal::new(String::new()),
            reloading: RwSignal::new(false),
            title_debounce: StoredValue::new_local(Debouncer::new(config.search_debounce_ms)),
            title_epoch: StoredValue::new(0),
        }
    }

    fn store(&self) -> LocalStorageStore {
        LocalStorageStore::new(self.config.favorites_key)
    }

    /// Games matching the active filter, in catalog order
    pub fn visible_games(&self) -> Vec<Game> {
        self.catalog.with(|catalog| {
            self.favorites.with(|favorites| {
                self.filter.with(|filter| {
                    filter.apply(catalog, favorites, today()).into_iter().cloned().collect()
                })
            })
        })
    }

    pub fn count_matches(&self, filter: &Filter) -> usize {
        self.catalog.with_untracked(|catalog| {
            self.favorites
                .with_untracked(|favorites| filter.apply(catalog, favorites, today()).len())
        })
    }

    /// Make `filter` the active one. Anything but a title search clears the
    /// title input and drops a pending title query.
    pub fn apply_filter(&self, filter: Filter) {
        tracing::debug!("Applying filter {:?}", filter);
        if !filter.is_title() {
            self.cancel_title_query();
            self.title_epoch.update_value(|e| *e += 1);
            self.title_input.set(String::new());
        }
        self.filter.set(filter);
    }

    /// Evaluate a typed title query after the debounce interval
    pub fn schedule_title_query(&self, query: String) {
        let state = *self;
        let epoch = self.title_epoch.get_value();
        self.title_debounce.update_value(|d| {
            d.schedule(move || {
                state.apply_title_query(epoch, &query);
            })
        });
    }

    pub fn cancel_title_query(&self) {
        self.title_debounce.update_value(Debouncer::cancel);
    }

    /// Apply a typed title query unless another filter was chosen since it
    /// was scheduled. A blank query shows everything but leaves the input
    /// as typed.
    pub fn apply_title_query(&self, epoch: u64, query: &str) -> bool {
        if self.title_epoch.get_value() != epoch {
            tracing::debug!("Dropping stale title query {:?}", query);
            return false;
        }
        self.filter.set(Filter::title(query));
        true
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.with(|f| f.contains(id))
    }

    /// Flip a favorite, persist it, and announce the change. If the
    /// favorites view is active it narrows on the next render.
    pub fn toggle_favorite(&self, id: i64) {
        let store = self.store();
        let Some(now_favorite) = self.favorites.try_update(|f| f.toggle_and_persist(id, &store))
        else {
            return;
        };
        tracing::info!("Game {} favorite: {}", id, now_favorite);
        let (message, kind) = favorite_toast(now_favorite);
        self.notify(message, kind);
    }

    /// External URL in a new tab, otherwise the local details dialog
    pub fn open_game(&self, id: i64) {
        let Some(game) = self.catalog.with_untracked(|c| c.find(id).cloned()) else {
            tracing::warn!("No game with id {}", id);
            return;
        };
        match game.external_url() {
            Some(url) => api::open_in_new_tab(url),
            None => {
                self.selected_game.set(Some(game));
                self.modals.update(|m| m.open(Modal::Details));
            }
        }
    }

    pub fn open_modal(&self, modal: Modal) {
        self.modals.update(|m| m.open(modal));
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.modals.with(|m| m.is_open(modal))
    }

    pub fn close_modal(&self, modal: Modal) {
        let was_open = self.modals.try_update(|m| m.close(modal)).unwrap_or(false);
        if was_open {
            self.after_close(modal);
        }
    }

    /// Backdrop click. The confirmation dialog only closes through its buttons.
    pub fn backdrop_click(&self, modal: Modal) {
        if modal == Modal::Confirm {
            return;
        }
        if self.modals.try_update(|m| m.backdrop_click(modal)).unwrap_or(false) {
            self.after_close(modal);
        }
    }

    /// Escape closes every visible modal; a pending confirmation is cancelled
    pub fn escape(&self) {
        let closed = self.modals.try_update(|m| m.escape()).unwrap_or_default();
        for modal in closed {
            self.after_close(modal);
        }
    }

    fn after_close(&self, modal: Modal) {
        match modal {
            Modal::Details => self.selected_game.set(None),
            Modal::Confirm => self.finish_confirm(false),
            Modal::Search => {}
        }
    }

    /// Show a confirmation dialog. Exactly one of the callbacks runs.
    pub fn ask_confirm(
        &self,
        message: impl Into<String>,
        on_confirm: Callback<()>,
        on_cancel: Option<Callback<()>>,
    ) {
        self.confirm.set(Some(ConfirmRequest { message: message.into(), on_confirm, on_cancel }));
        self.open_modal(Modal::Confirm);
    }

    /// Answer the pending confirmation and destroy the dialog
    pub fn resolve_confirm(&self, accepted: bool) {
        self.modals.update(|m| {
            m.close(Modal::Confirm);
        });
        self.finish_confirm(accepted);
    }

    fn finish_confirm(&self, accepted: bool) {
        let Some(request) = self.confirm.try_update(Option::take).flatten() else {
            return;
        };
        if accepted {
            request.on_confirm.run(());
        } else if let Some(on_cancel) = request.on_cancel {
            on_cancel.run(());
        }
    }

    /// Transient notification, removed after `toast_duration_ms`
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let Some(id) = self.toasts.try_update(|t| t.push(message, kind)) else {
            return;
        };
        let toasts = self.toasts;
        Timeout::new(self.config.toast_duration_ms, move || {
            toasts.update(|t| {
                t.dismiss(id);
            });
        })
        .forget();
    }

    pub fn announce(&self, message: String) {
        self.announcement.set(message.clone());
        let announcement = self.announcement;
        Timeout::new(self.config.announcement_ms, move || {
            if announcement.get_untracked() == message {
                announcement.set(String::new());
            }
        })
        .forget();
    }

    /// Ask first, then show the loading overlay and reload the page
    pub fn request_reload(&self) {
        let state = *self;
        self.ask_confirm(
            "Are you sure you want to reload the page?",
            Callback::new(move |_: ()| {
                tracing::info!("Reloading page");
                state.reloading.set(true);
                Timeout::new(state.config.reload_delay_ms, api::reload_page).forget();
            }),
            None,
        );
    }

    /// Load the catalog once. On failure the page shows the error panel.
    pub fn load_catalog(&self) {
        let state = *self;
        leptos::task::spawn_local(async move {
            match api::fetch_catalog(state.config.catalog_url).await {
                Ok(catalog) => {
                    state.catalog.set(catalog);
                    state.load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    tracing::error!("Failed to load catalog: {}", e);
                    state.load_state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendar_core::Period;

    fn test_state() -> CalendarState {
        CalendarState::with_favorites(AppConfig::default(), Favorites::new())
    }

    /// Runs `f` under a fresh reactive owner
    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(f);
    }

    #[test]
    fn test_period_choice_drops_pending_title_query() {
        with_owner(|| {
            let state = test_state();
            state.title_input.set("que".to_string());
            let epoch = state.title_epoch.get_value();

            state.apply_filter(Filter::Period(Period::Week));
            assert!(!state.apply_title_query(epoch, "que"));
            assert_eq!(state.filter.get_untracked(), Filter::Period(Period::Week));
            assert_eq!(state.title_input.get_untracked(), "");
        });
    }

    #[test]
    fn test_current_title_query_applies() {
        with_owner(|| {
            let state = test_state();
            let epoch = state.title_epoch.get_value();
            assert!(state.apply_title_query(epoch, "  Quest "));
            assert_eq!(state.filter.get_untracked(), Filter::Title("Quest".to_string()));
        });
    }

    #[test]
    fn test_blank_title_query_keeps_typed_input() {
        with_owner(|| {
            let state = test_state();
            state.apply_filter(Filter::Genre("RPG".to_string()));
            state.title_input.set("   ".to_string());
            let epoch = state.title_epoch.get_value();

            assert!(state.apply_title_query(epoch, "   "));
            assert_eq!(state.filter.get_untracked(), Filter::All);
            assert_eq!(state.title_input.get_untracked(), "   ");
        });
    }

    #[test]
    fn test_title_filter_keeps_input_other_filters_clear_it() {
        with_owner(|| {
            let state = test_state();
            state.title_input.set("zel".to_string());
            state.apply_filter(Filter::title("zel"));
            assert_eq!(state.title_input.get_untracked(), "zel");
            state.apply_filter(Filter::Favorites);
            assert_eq!(state.title_input.get_untracked(), "");
        });
    }

    fn counting_callback(counter: RwSignal<u32>) -> Callback<()> {
        Callback::new(move |_: ()| counter.update(|n| *n += 1))
    }

    #[test]
    fn test_confirm_runs_only_on_confirm() {
        with_owner(|| {
            let state = test_state();
            let confirmed = RwSignal::new(0);
            let cancelled = RwSignal::new(0);
            state.ask_confirm(
                "Reload?",
                counting_callback(confirmed),
                Some(counting_callback(cancelled)),
            );
            assert!(state.is_open(Modal::Confirm));

            state.resolve_confirm(true);
            assert_eq!(confirmed.get_untracked(), 1);
            assert_eq!(cancelled.get_untracked(), 0);
            assert!(!state.is_open(Modal::Confirm));
            assert!(state.confirm.with_untracked(Option::is_none));

            // The dialog is gone, a second answer does nothing
            state.resolve_confirm(true);
            assert_eq!(confirmed.get_untracked(), 1);
        });
    }

    #[test]
    fn test_cancel_runs_only_on_cancel() {
        with_owner(|| {
            let state = test_state();
            let confirmed = RwSignal::new(0);
            let cancelled = RwSignal::new(0);
            state.ask_confirm(
                "Reload?",
                counting_callback(confirmed),
                Some(counting_callback(cancelled)),
            );
            state.resolve_confirm(false);
            assert_eq!(confirmed.get_untracked(), 0);
            assert_eq!(cancelled.get_untracked(), 1);
            assert!(!state.is_open(Modal::Confirm));
        });
    }

    #[test]
    fn test_escape_cancels_pending_confirm() {
        with_owner(|| {
            let state = test_state();
            let confirmed = RwSignal::new(0);
            let cancelled = RwSignal::new(0);
            state.open_modal(Modal::Search);
            state.ask_confirm(
                "Reload?",
                counting_callback(confirmed),
                Some(counting_callback(cancelled)),
            );

            state.escape();
            assert_eq!(confirmed.get_untracked(), 0);
            assert_eq!(cancelled.get_untracked(), 1);
            assert!(!state.is_open(Modal::Confirm));
            assert!(!state.is_open(Modal::Search));
            assert!(state.confirm.with_untracked(Option::is_none));
        });
    }

    #[test]
    fn test_backdrop_click_does_not_dismiss_confirm() {
        with_owner(|| {
            let state = test_state();
            let cancelled = RwSignal::new(0);
            state.ask_confirm("Reload?", Callback::new(|_: ()| {}), Some(counting_callback(cancelled)));
            state.backdrop_click(Modal::Confirm);
            assert!(state.is_open(Modal::Confirm));
            assert_eq!(cancelled.get_untracked(), 0);
        });
    }

    #[test]
    fn test_search_announcement() {
        assert_eq!(search_announcement("zelda", 0), "No results for \"zelda\"");
        assert_eq!(search_announcement("zelda", 1), "1 game found for \"zelda\"");
        assert_eq!(search_announcement("quest", 3), "3 games found for \"quest\"");
    }

    #[test]
    fn test_favorite_toast() {
        assert_eq!(favorite_toast(true), ("Added to favorites", ToastKind::Success));
        assert_eq!(favorite_toast(false), ("Removed from favorites", ToastKind::Info));
    }
}
