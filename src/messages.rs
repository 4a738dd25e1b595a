// messages.rs
use serde::{Deserialize, Serialize};

pub const LOAD_FAILED: &str = "Fehler beim Laden des Rezepts.";
pub const DELETE_SUCCEEDED: &str = "Rezept erfolgreich gelöscht. Seite wird neu geladen...";
pub const DELETE_FAILED: &str = "Fehler beim Löschen des Rezepts.";

/// Fixed texts written into the viewer in place of a fetched fragment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Messages {
    pub load_failed: String,
    pub delete_succeeded: String,
    pub delete_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            load_failed: LOAD_FAILED.to_string(),
            delete_succeeded: DELETE_SUCCEEDED.to_string(),
            delete_failed: DELETE_FAILED.to_string(),
        }
    }
}
