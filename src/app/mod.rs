// AgentDeck - app/mod.rs
//
// Application layer: request lifecycle, panel state, draft persistence.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod dispatcher;
pub mod session;
pub mod state;
