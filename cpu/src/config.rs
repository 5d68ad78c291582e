use std::path::PathBuf;

use crate::{
    error::{Error, Result},
    logging::LoggingConfig,
};

pub const SPV_VAR: &str = "VERTCOLOR_SPV";
pub const ENTRY_POINT_VAR: &str = "VERTCOLOR_ENTRY_POINT";
pub const PARALLEL_VAR: &str = "VERTCOLOR_PARALLEL";
pub const LOG_VAR: &str = "VERTCOLOR_LOG";

/// Host settings, read from the environment.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Compiled module to check against the vertex interface, if any.
    pub spirv_path: Option<PathBuf>,
    pub entry_point: String,
    /// Run the reference stage on the rayon pool instead of in a loop.
    pub parallel: bool,
    pub logging: LoggingConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            spirv_path: None,
            entry_point: vertcolor_shader::VERTEX_ENTRY_POINT.to_owned(),
            parallel: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(SPV_VAR) {
            config.spirv_path = Some(PathBuf::from(path));
        }
        if let Some(name) = get(ENTRY_POINT_VAR) {
            config.entry_point = name.trim().to_owned();
        }
        if let Some(value) = get(PARALLEL_VAR) {
            config.parallel = parse_bool(PARALLEL_VAR, &value)?;
        }
        config.logging.env_filter = get(LOG_VAR);

        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config {
            key,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert!(config.spirv_path.is_none());
        assert_eq!(config.entry_point, "vert_main");
        assert!(config.parallel);
        assert!(config.logging.env_filter.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (SPV_VAR, "shaders/vertcolor.spv"),
            (ENTRY_POINT_VAR, " main_vs "),
            (PARALLEL_VAR, "Off"),
            (LOG_VAR, "vertcolor=debug"),
        ])
        .unwrap();
        assert_eq!(config.spirv_path, Some(PathBuf::from("shaders/vertcolor.spv")));
        assert_eq!(config.entry_point, "main_vs");
        assert!(!config.parallel);
        assert_eq!(config.logging.env_filter.as_deref(), Some("vertcolor=debug"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[(SPV_VAR, ""), (ENTRY_POINT_VAR, "  ")]).unwrap();
        assert!(config.spirv_path.is_none());
        assert_eq!(config.entry_point, "vert_main");
    }

    #[test]
    fn malformed_bool_is_an_error() {
        match config_from(&[(PARALLEL_VAR, "maybe")]) {
            Err(Error::Config { key, value }) => {
                assert_eq!(key, PARALLEL_VAR);
                assert_eq!(value, "maybe");
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
