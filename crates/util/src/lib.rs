//! Utility helpers shared by the Vista crates.

pub mod path_processing;
pub mod preferences;

pub use path_processing::{default_log_path, expand_tilde};
pub use preferences::{PREFERENCES_PATH_ENV, PreferencesError, PreferencesPayload, UserPreferences};
