//! Literal markers that identify the root segment of a key.

/// Root segment of a dialog-scoped key.
pub const DIALOG_MARKER: &str = "dialog(";

/// Root segment of a topic-scoped key.
pub const TOPIC_MARKER: &str = "topic(";

/// Root segment of a global-variable key.
pub const GLOBAL_VARIABLE_MARKER: &str = "globalVariable(";

/// A key must contain at least one of these to be recognized.
pub const ROOT_MARKERS: [&str; 3] = [DIALOG_MARKER, TOPIC_MARKER, GLOBAL_VARIABLE_MARKER];

pub fn has_root_marker(key: &str) -> bool {
    ROOT_MARKERS.iter().any(|marker| key.contains(marker))
}

pub fn is_global_variable_key(key: &str) -> bool {
    key.contains(GLOBAL_VARIABLE_MARKER)
}

pub fn is_dialog_key(key: &str) -> bool {
    key.contains(DIALOG_MARKER)
}
