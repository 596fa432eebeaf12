use std::time::Duration;

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;
use crate::models::ClearPolicy;

/// Name of the optional global object holding runtime overrides.
pub const CONFIG_GLOBAL: &str = "__NOTEBOX_CONFIG__";

/// Default time an alert stays on screen.
pub const DEFAULT_ALERT_DURATION_MS: u32 = 1500;

/// Runtime configuration for the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long an alert is displayed before it is cleared
    pub alert_duration_ms: u32,
    /// Whether a stale timer may clear a newer alert
    pub clear_policy: ClearPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            alert_duration_ms: DEFAULT_ALERT_DURATION_MS,
            clear_policy: ClearPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.alert_duration_ms))
    }

    /// Reject values the shell cannot work with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.alert_duration_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "alert_duration_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        // setTimeout takes a signed 32-bit delay
        if i32::try_from(self.alert_duration_ms).is_err() {
            return Err(ConfigError::InvalidField {
                field: "alert_duration_ms",
                message: format!("must not exceed {}", i32::MAX),
            });
        }
        Ok(self)
    }

    /// Decode a configuration object handed over from JavaScript.
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Decode(e.to_string()))?;
        config.validate()
    }

    /// Load the configuration from `window.__NOTEBOX_CONFIG__`, falling back
    /// to defaults when it is absent or unusable.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let target: &JsValue = window.as_ref();
        let value = match js_sys::Reflect::get(target, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) => value,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Failed to read {CONFIG_GLOBAL}: {e:?}").into(),
                );
                return Self::default();
            }
        };

        match Self::from_js(value) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("Ignoring {CONFIG_GLOBAL}: {e}").into());
                Self::default()
            }
        }
    }
}
