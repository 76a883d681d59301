//! Utility helpers shared across page sections.
//!
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability.

pub mod dark_mode;
pub mod mailto;
