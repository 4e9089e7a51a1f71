//! # Geometry Configuration
//!
//! Settings structures for the geometry subsystem. All of them are
//! serde-serializable and load from TOML or RON through [`Config`].
//!
//! ## Configuration Categories
//!
//! - **Allocation**: how freshly allocated attribute arrays are filled
//! - **Logging**: default log filter used when `RUST_LOG` is not set

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

/// # Allocation Configuration
///
/// Controls the initial contents of a geometry set's arrays. Callers must not
/// rely on these values for correctness; they exist so that unwritten
/// primitives show up predictably in debug output and uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Initial value of every vertex component
    pub vertex_fill: f32,
    /// Initial value of every texture coordinate component
    pub tex_coord_fill: f32,
    /// Number primitives `0..count` in the index array instead of filling it with zeros
    pub sequential_indices: bool,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            vertex_fill: 0.0,
            tex_coord_fill: 0.0,
            sequential_indices: false,
        }
    }
}

impl AllocationConfig {
    /// Validate the fill values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.vertex_fill.is_finite() {
            return Err(ConfigError::Invalid(format!("vertex_fill must be finite, got {}", self.vertex_fill)));
        }
        if !self.tex_coord_fill.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "tex_coord_fill must be finite, got {}",
                self.tex_coord_fill
            )));
        }
        Ok(())
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives in `env_logger` syntax, e.g. `"info"` or `"geometry_core=trace"`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// # Geometry Configuration
///
/// Top-level configuration for applications built on the geometry core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Attribute array allocation
    pub allocation: AllocationConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl Config for GeometryConfig {}

impl GeometryConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.allocation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_default_config() {
        let config = GeometryConfig::default();
        assert_eq!(config.allocation.vertex_fill, 0.0);
        assert!(!config.allocation.sequential_indices);
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
            [allocation]
            sequential_indices = true
        "#;
        let config = GeometryConfig::parse(toml, ConfigFormat::Toml).unwrap();
        assert!(config.allocation.sequential_indices);
        assert_eq!(config.allocation.tex_coord_fill, 0.0);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut config = GeometryConfig::default();
        config.allocation.vertex_fill = -1.0;
        config.logging.filter = "geometry_core=trace".to_string();

        let text = config.render(ConfigFormat::Ron).unwrap();
        let parsed = GeometryConfig::parse(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_fill_rejected() {
        let mut config = GeometryConfig::default();
        config.allocation.vertex_fill = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
