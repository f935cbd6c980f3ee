use std::path::Path;

use getset::{CopyGetters, Getters};
use log::debug;
use naishin_utils::fs_json_util::read_toml;
use serde::{Deserialize, Serialize};

use crate::prefecture::DEFAULT_PREFECTURE;

/// Defaults for the command line tools, read from an optional TOML file.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Getters, CopyGetters)]
#[serde(default)]
pub struct Config {
    #[getset(get = "pub")]
    default_prefecture: String,
    #[getset(get_copy = "pub")]
    use_ten_point_scale: bool,
    #[getset(get_copy = "pub")]
    exam_max_score: f64,
    #[getset(get_copy = "pub")]
    internal_ratio_percent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_prefecture: DEFAULT_PREFECTURE.to_owned(),
            use_ten_point_scale: false,
            exam_max_score: 500.0,
            internal_ratio_percent: 30.0,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                debug!("Loading config from {path:?}");
                read_toml(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn missing_keys_take_defaults() {
        let config: Config = toml::from_str("default_prefecture = \"osaka\"").unwrap();
        assert_eq!(config.default_prefecture(), "osaka");
        assert!(!config.use_ten_point_scale());
        assert_eq!(config.exam_max_score(), 500.0);
        assert_eq!(config.internal_ratio_percent(), 30.0);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn full_file() {
        let config: Config = toml::from_str(
            r#"
            default_prefecture = "kochi"
            use_ten_point_scale = true
            exam_max_score = 250.0
            internal_ratio_percent = 50.0
            "#,
        )
        .unwrap();
        assert_eq!(config.default_prefecture(), "kochi");
        assert!(config.use_ten_point_scale());
        assert_eq!(config.exam_max_score(), 250.0);
        assert_eq!(config.internal_ratio_percent(), 50.0);
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
