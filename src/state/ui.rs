//! Local UI chrome state.
//!
//! Keeps transient presentation concerns (theme selection) out of the
//! domain state modules.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared via context: currently just the theme flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
