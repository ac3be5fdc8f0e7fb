use serde::{Deserialize, Serialize};

/// Default for `ApiConfig.dir_name`.
pub const DEFAULT_API_DIR: &str = "Apis";
/// Default for `ApiConfig.extension`.
pub const DEFAULT_API_EXTENSION: &str = "api";

/// Where declaration files are discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    /// Directory name, relative to the running executable.
    pub dir_name: String,
    /// File extension without the leading dot (matched ASCII-case-insensitively).
    pub extension: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            dir_name: DEFAULT_API_DIR.to_string(),
            extension: DEFAULT_API_EXTENSION.to_string(),
        }
    }
}
