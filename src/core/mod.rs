//! Core business logic - framework-agnostic loyalty operations.
//!
//! The bot layer calls into these modules; nothing here knows about Discord.

/// Sex and flavor preference selectors
pub mod choices;
/// Visit aggregates, segment lookup and reward simulator
pub mod dashboard;
/// Menu suggestions
pub mod feedback;
/// Customer lookup by ID
pub mod identity;
/// Profile edits and point awards
pub mod profile;
/// Per-user session context
pub mod session;
