//! The to-do window.
//!
//! ```text
//! ┌ Lists ──────┐┌ <selected list> ─────────────────┐
//! │ Tasks       ││ [ ] Buy milk                      │
//! │ Work        ││ [x] Read a book        2026-10-20 │
//! └─────────────┘└───────────────────────────────────┘
//! ┌─────────────┐┌───────────────────────────────────┐
//! │ ＋ New List ││ ＋ Add a task                     │
//! └─────────────┘└───────────────────────────────────┘
//! ```
//!
//! [`app::TasksApp`] owns the store interface and the panes; [`render`]
//! only reads it.

pub mod app;
pub mod entry;
pub mod panes;
pub mod render;
pub mod rows;

pub use app::TasksApp;
