//! TOML configuration for a model-building experiment.
//!
//! ```toml
//! data = "data/kc_house_data.csv"
//! target = "price"
//! test_fraction = 0.2
//! seed = 42
//!
//! [[models]]
//! name = "size only"
//! features = ["sqft_living"]
//!
//! [[models]]
//! name = "size and rooms"
//! features = ["sqft_living", "bedrooms", "bathrooms"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperimentConfig {
    /// CSV to load; synthetic housing data is generated when absent.
    #[serde(default)]
    pub data: Option<PathBuf>,
    pub target: String,
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_synthetic_rows")]
    pub synthetic_rows: usize,
    pub models: Vec<ModelSpec>,
}

fn default_test_fraction() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}

fn default_synthetic_rows() -> usize {
    500
}

impl ExperimentConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ExperimentConfig = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    /// Reads and validates a config file.
    /// A relative `data` path is resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_toml_str(&fs::read_to_string(path)?)?;

        if let (Some(data), Some(dir)) = (&config.data, path.parent()) {
            if data.is_relative() {
                config.data = Some(dir.join(data));
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "test_fraction {} must lie strictly between 0 and 1",
                self.test_fraction
            )));
        }
        if self.models.is_empty() {
            return Err(Error::InvalidConfig("at least one model is required".to_string()));
        }
        if let Some(model) = self.models.iter().find(|m| m.features.is_empty()) {
            return Err(Error::InvalidConfig(format!("model `{}` has no features", model.name)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
target = "price"

[[models]]
name = "simple"
features = ["sqft_living"]

[[models]]
name = "multiple"
features = ["sqft_living", "bedrooms"]
"#;

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::from_toml_str(CONFIG).unwrap();

        assert_eq!(config.data, None);
        assert_eq!(config.test_fraction, 0.2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.synthetic_rows, 500);
        assert_eq!(config.models[1].features, vec!["sqft_living", "bedrooms"]);
    }

    #[test]
    fn test_rejects_bad_fraction() {
        let text = format!("test_fraction = 1.5\n{CONFIG}");
        assert!(matches!(ExperimentConfig::from_toml_str(&text), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_empty_features() {
        let text = "target = \"price\"\n[[models]]\nname = \"nothing\"\nfeatures = []\n";
        assert!(matches!(ExperimentConfig::from_toml_str(text), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(ExperimentConfig::from_toml_str("target = "), Err(Error::Toml(_))));
    }
}
