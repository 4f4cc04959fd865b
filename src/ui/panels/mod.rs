// AgentDeck - ui/panels/mod.rs

pub mod about;
pub mod competitor;
pub mod compliance;
pub mod narrative;
pub mod options;
pub mod segmentation;
pub mod warnings;
