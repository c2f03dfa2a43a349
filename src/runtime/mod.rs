//! Event-driven session orchestration.

pub mod drag;
pub mod event;
pub mod menu;
pub mod session;
