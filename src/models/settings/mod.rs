// Settings module
// Application preferences persisted as TOML by the settings service

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub default_view: String,
    /// Publishing channels offered when creating content
    pub channels: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            default_view: "month".to_string(),
            channels: vec![
                "blog".to_string(),
                "social".to_string(),
                "email".to_string(),
                "video".to_string(),
            ],
        }
    }
}
