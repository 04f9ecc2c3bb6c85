//! Calendar Core - DOM-free logic for the game release calendar
//!
//! Everything here is plain data in, plain data out, so the frontend only
//! has to wire signals and events around it.

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod period;
pub mod presentation;

pub use catalog::{Catalog, Game, DEFAULT_BADGE_COLOR};
pub use error::{CatalogError, FavoritesError};
pub use favorites::{Favorites, FavoritesStore};
pub use filter::{genre_filter, title_filter, Filter, GENRE_ALL, GENRE_FAVORITES};
pub use period::Period;
pub use presentation::{Modal, ModalSet, Toast, ToastKind, ToastStack};
