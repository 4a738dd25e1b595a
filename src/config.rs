// config.rs

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;
use crate::messages::Messages;
use crate::surface::VIEWER_ID;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_RELOAD_DELAY_MS: u64 = 2000;

/// Everything the panel needs to know about its host page and backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Origin of the recipe service.
    pub base_url: String,
    /// Element id of the viewer region.
    pub viewer_id: String,
    /// Page re-fetched when a reload fires.
    pub page_path: String,
    pub reload_delay_ms: u64,
    /// Session token sent as the `access_token` cookie.
    pub access_token: Option<String>,
    pub messages: Messages,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            viewer_id: VIEWER_ID.to_string(),
            page_path: "/".to_string(),
            reload_delay_ms: DEFAULT_RELOAD_DELAY_MS,
            access_token: None,
            messages: Messages::default(),
        }
    }
}

impl PanelConfig {
    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }
}

/// Load a panel config from a JSON file. Missing keys take their defaults.
pub fn read_config<P: AsRef<Path>>(config_path: P) -> Result<PanelConfig, PanelError> {
    let f = std::fs::File::open(config_path.as_ref())?;
    let config = serde_json::from_reader(f)?;
    Ok(config)
}
