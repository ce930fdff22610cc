// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for the client interaction layer. Loaded from a YAML
/// document provided by the host page's bootstrap.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClientConfig {
    /// Origin of the publishing server, e.g. `https://blog.example.com`.
    pub base_url: String,
    #[serde(default = "default_preference_cookie")]
    pub preference_cookie: String,
    /// Delay before the full reload that follows a successful login.
    #[serde(default = "default_reload_delay_ms")]
    pub reload_delay_ms: u64,
    /// Location the page navigates to after a password change or post deletion.
    #[serde(default = "default_home_location")]
    pub home_location: String,
}

fn default_preference_cookie() -> String {
    "nickname".to_string()
}

fn default_reload_delay_ms() -> u64 {
    1000
}

fn default_home_location() -> String {
    "/".to_string()
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::LoadError(format!("Failed to parse configuration: {}", e)))?;
        config.validated()
    }

    /// Configuration with a bare base URL and defaults everywhere else.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = ClientConfig {
            base_url: base_url.into(),
            preference_cookie: default_preference_cookie(),
            reload_delay_ms: default_reload_delay_ms(),
            home_location: default_home_location(),
        };
        config.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "base_url must not be empty".to_string(),
            ));
        }
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "base_url must name a server origin, not a bare path".to_string(),
            ));
        }
        if self.preference_cookie.is_empty() {
            return Err(ConfigError::ValidationError(
                "preference_cookie must not be empty".to_string(),
            ));
        }
        if self.home_location.is_empty() {
            return Err(ConfigError::ValidationError(
                "home_location must not be empty".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }
}
