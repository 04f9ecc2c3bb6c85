mod confirm_dialog;
mod filter_bar;
mod game_details;
mod game_grid;
mod header;
mod period_nav;
mod search_prompt;
mod toasts;

pub use confirm_dialog::ConfirmDialog;
pub use filter_bar::FilterBar;
pub use game_details::GameDetails;
pub use game_grid::GameGrid;
pub use header::Header;
pub use period_nav::PeriodNav;
pub use search_prompt::SearchPrompt;
pub use toasts::{LiveRegion, Toasts};
