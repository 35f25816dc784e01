//! Builder configuration.
//!
//! A [`BuilderConfig`] carries the session-wide defaults a
//! [`GuiBuilder`](crate::GuiBuilder) applies: the style of the root layout,
//! the default grid flags and the default grid column width. It can be loaded
//! from TOML; missing keys keep their defaults.
//!
//! ```toml
//! layout_style = "display: flex; flex-direction: row;"
//! column_width = "120px"
//!
//! [grid]
//! page_size = 25
//! allow_sorting = false
//! ```

use serde::{Deserialize, Serialize};

use horizon_trellis_core::TrellisError;

use crate::widget::widgets::{GridParameters, DEFAULT_COLUMN_WIDTH};

/// Errors raised while loading or saving a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a configuration.
    #[error("invalid builder configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("cannot serialize builder configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl From<ConfigError> for TrellisError {
    fn from(err: ConfigError) -> Self {
        TrellisError::Config {
            message: err.to_string(),
        }
    }
}

/// Session-wide defaults for a builder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Inline style attached to the root `Layout` descriptor.
    pub layout_style: String,

    /// Flags every new grid starts from.
    pub grid: GridParameters,

    /// Width of grid columns that do not set their own.
    pub column_width: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            layout_style: default_layout_style(),
            grid: GridParameters::default(),
            column_width: DEFAULT_COLUMN_WIDTH.to_string(),
        }
    }
}

fn default_layout_style() -> String {
    "display: flex; flex-direction: column; gap: 8px; align-items: flex-start;".to_string()
}

impl BuilderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Render the configuration as TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(BuilderConfig::from_toml_str("").unwrap(), BuilderConfig::default());
    }

    #[test]
    fn test_partial_grid_section() {
        let config = BuilderConfig::from_toml_str(
            r#"
            column_width = "120px"

            [grid]
            page_size = 25
            allow_sorting = false
            "#,
        )
        .unwrap();

        assert_eq!(config.column_width, "120px");
        assert_eq!(config.grid.page_size, 25);
        assert!(!config.grid.allow_sorting);
        assert!(config.grid.allow_paging);
        assert_eq!(config.layout_style, default_layout_style());
    }

    #[test]
    fn test_invalid_text_maps_to_config_error() {
        let err = BuilderConfig::from_toml_str("grid = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err: TrellisError = err.into();
        assert!(matches!(err, TrellisError::Config { .. }));
    }

    #[test]
    fn test_toml_round_trip_keeps_grid_flags() {
        let mut config = BuilderConfig::default();
        config.grid.page_size_options = vec![5, 50];
        let text = config.to_toml_string().unwrap();
        assert_eq!(BuilderConfig::from_toml_str(&text).unwrap(), config);
    }
}
