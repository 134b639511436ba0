//! Panel/tab layout state for callgrid.
//!
//! This crate is the canonical owner of the workspace layout:
//! - `Panel` - one visible region with an ordered tab strip and an active tab
//! - `LayoutState` - the ordered panel sequence plus screen configuration,
//!   exposing every layout transition as a total, infallible operation
//!
//! Malformed references (unknown tab or panel ids, self-referential moves)
//! are absorbed as no-ops; the state never ends up partially mutated and
//! callers never need to handle layout errors.

pub mod panel;
pub mod state;

pub use panel::Panel;
pub use state::LayoutState;
