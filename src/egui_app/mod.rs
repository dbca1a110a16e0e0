//! Shared egui UI modules.

mod helpers;
pub mod scrollbar;
pub mod ui;

pub use ui::NameVoxApp;
