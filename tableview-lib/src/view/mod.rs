//! View state and the orchestrating table view.

mod state;
mod table;

pub use state::ViewState;
pub use table::{TableView, View};
