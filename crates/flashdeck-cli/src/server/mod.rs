//! Local web server backing the browser UI.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
pub mod view;
