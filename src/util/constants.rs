// AgentDeck - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "AgentDeck";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "AgentDeck";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Form limits
// =============================================================================

/// Maximum characters accepted in any single form field.
pub const MAX_FIELD_CHARS: usize = 4_000;

/// Rows shown by multi-line text fields.
pub const MULTILINE_ROWS: usize = 4;

// =============================================================================
// Dispatch
// =============================================================================

/// Default simulated latency applied before a canned response is delivered.
pub const DEFAULT_LATENCY_MS: u64 = 1_200;

/// Upper bound on the simulated latency (config and CLI).
pub const MAX_LATENCY_MS: u64 = 30_000;

/// Repaint interval while any panel is waiting on a response.
pub const LOADING_REPAINT_MS: u64 = 100;

// =============================================================================
// UI
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum allowed font size.
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum allowed font size.
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Files
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the draft session file in the data directory.
pub const SESSION_FILE_NAME: &str = "drafts.json";
