//! Plain state structs and pure transition logic.
//!
//! DESIGN
//! ======
//! Every transition the page performs (load lifecycle, category filtering,
//! submission machine) lives here as plain Rust so it stays testable on the
//! host toolchain; components only read and write these structs through
//! signals.

pub mod contact;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod ui;
