//! Weekly meeting state management.
//!
//! Edits to the meeting record are expressed as [`action::MeetingAction`]s
//! and applied by a pure reducer:
//! - Row helpers for the KPI, rock, to-do and issue collections
//! - The `(state, action) -> state` reducer
//! - A session container tracking unsaved changes
//! - The meeting countdown timer

/// Prelude module for convenient imports.
pub mod prelude;

/// Edit actions.
pub mod action;
/// The reducer.
pub mod reducer;
/// Copy-on-write row helpers.
pub mod rows;
/// Session container.
pub mod session;
/// Meeting countdown.
pub mod timer;
