//! # View State Machines
//!
//! Explicit state owned by the view, changed only through transition methods:
//!
//! - [`query`]: submit / settle for the concept explainer
//! - [`carousel`]: mount / tick / unmount for the visualization carousel
//! - [`navigation`]: explore / back / pick_simulation

pub mod carousel;
pub mod navigation;
pub mod query;

pub use carousel::{CarouselState, MountId};
pub use navigation::{NavigationState, View};
pub use query::{build_prompt, PendingQuery, QueryState, QueryToken, Settlement, GENERIC_CONTEXT};
