//! List view: the loading / error / content state machine and its view.
//!
//! - `state.rs` - tagged view state
//! - `intent.rs` - fetch cycle events
//! - `reducer.rs` - transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{Display, ListViewState};
pub use view::{
    artwork_bounds, grid_columns, render_list_body, visible_rows, ListView, SPINNER_FRAMES,
};
