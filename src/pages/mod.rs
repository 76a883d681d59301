//! Page modules for screen-level composition.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `portfolio` owns its orchestration (the
//! project load lifecycle) and delegates rendering to `components`.

pub mod portfolio;
