//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

use crate::core::config::LoggingConfig;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, using the configured filter when `RUST_LOG` is unset
///
/// Returns `false` if a logger was already installed.
pub fn init_with_config(config: &LoggingConfig) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.filter.as_str()))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_config_installs_once() {
        let config = LoggingConfig {
            filter: "geometry_core=trace".to_string(),
        };
        init_with_config(&config);
        assert!(!init_with_config(&config));
        info!("logger installed with filter {}", config.filter);
    }
}
