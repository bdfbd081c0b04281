//! # Screen Modules
//!
//! One module per [`lib_core::View`]: the landing page and the subject workspace.
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
//!     // - Read from the state snapshot
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**; actions go through
//! [`crate::app::AppLike`], which takes the lock internally. A change made this
//! frame shows up on the next one.

pub mod landing;
pub mod workspace;
