//! Single-page personal portfolio application.
//!
//! A Dioxus desktop app rendering presentational sections over the
//! appearance and reveal mechanisms from `folio-ui`.

pub mod components;
pub mod content;
pub mod state;
