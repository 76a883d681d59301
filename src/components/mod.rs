//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections; state transitions live in
//! `state` and are reached through the signals each section owns or
//! receives.

pub mod contact_form;
pub mod experience_timeline;
pub mod hero;
pub mod project_card;
pub mod projects_section;
pub mod site_footer;
pub mod site_header;
pub mod skills_section;
