use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Put one space between the delimiter and the code, and strip it again
    /// when uncommenting.
    #[serde(default = "default_padding")]
    pub padding: bool,
    /// Regex; matching lines are left alone during line-wise toggles.
    #[serde(default)]
    pub ignore: Option<String>,
}

fn default_padding() -> bool {
    true
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            ignore: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToggleConfig::default();
        assert!(config.padding);
        assert_eq!(config.ignore, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ToggleConfig = toml::from_str(r#"ignore = "^\\s*$""#).unwrap();
        assert!(config.padding);
        assert_eq!(config.ignore.as_deref(), Some(r"^\s*$"));
    }

    #[test]
    fn test_empty_toml() {
        let config: ToggleConfig = toml::from_str("").unwrap();
        assert_eq!(config, ToggleConfig::default());
    }

    #[test]
    fn test_padding_off() {
        let config: ToggleConfig = toml::from_str("padding = false").unwrap();
        assert!(!config.padding);
    }
}
