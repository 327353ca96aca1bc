//! Application-level modules for the Qawaid viewer.
//!
//! This module contains the interaction coordinator and the explicit
//! application state object passed to every screen.

mod app_state;
mod application_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
