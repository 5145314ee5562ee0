//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

// =============================================================================
// Link Defaults
// =============================================================================

pub fn default_link_target() -> String {
    "_blank".to_string()
}

pub fn default_channel_route() -> String {
    "/#!/".to_string()
}
