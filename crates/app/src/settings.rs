use planner_domain::DEFAULT_COPY_SUFFIX;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Appended to the name of a copied workout.
    pub copy_suffix: String,
    /// Number of log entries kept in memory.
    pub log_capacity: usize,
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            copy_suffix: DEFAULT_COPY_SUFFIX.to_string(),
            log_capacity: 100,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}
