//! Relational view-state synchronizer.
//!
//! Holds segments, brands and vehicles plus one edit slot per kind as a
//! single [`CatalogState`] snapshot. The snapshot only changes through
//! [`CatalogReducer`], fed with remote results or explicit edit actions.
//! Deleting a segment or brand removes the vehicles that reference it, and
//! renaming one rewrites their display copies; both go through the
//! [`DependentIndex`].
//!
//! [`RequestTracker`] decides whether a completed remote call may still be
//! applied.

mod index;
mod intent;
mod reducer;
mod state;
mod tracker;

pub use index::DependentIndex;
pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::CatalogState;
pub use tracker::{RequestTracker, Ticket};
