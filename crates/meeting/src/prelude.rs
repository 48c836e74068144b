//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use ecodash_meeting::prelude::*;
//! ```

pub use crate::action::MeetingAction;
pub use crate::reducer::{pull_off_track_issues, reduce};
pub use crate::rows::{
    add_row, average_rating, format_rating, remove_row, toggle_row_status, toggle_status, update_row,
};
pub use crate::session::MeetingSession;
pub use crate::timer::MeetingTimer;
