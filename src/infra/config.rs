use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid storage config: {0}")]
    Json(#[from] serde_json::Error),
}

/// ストレージ設定。`name` はログの `storage` フィールドに出る。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            name: "books".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}
