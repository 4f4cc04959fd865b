// AgentDeck - core/mod.rs
//
// Core business logic layer.
// Dependencies: util, serde/chrono data types.
// Must NOT depend on: ui, platform, app, or any I/O beyond Write sinks.

pub mod dispatch;
pub mod export;
pub mod model;
pub mod prompt;
pub mod validate;
