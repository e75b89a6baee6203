// =============================================================================
// REGION DIRECTORY CONSTANTS
// =============================================================================

/// Placeholder heading every district list ("no selection yet")
pub const SELECT_DISTRICT: &str = "Select district";

/// Fallback region used when no real state is selected
pub const NULL_REGION: &str = "NULL";

/// Placeholder label for the state `<select>`
pub const SELECT_STATE_LABEL: &str = "Select a State";

/// Placeholder label for the district `<select>`
pub const SELECT_DISTRICT_LABEL: &str = "Select a District";
