//! Build configuration with TOML/JSON serialization.
//!
//! Lets a build be described in a config file and replayed exactly —
//! generation is a pure function of these inputs, so identical configs
//! yield identical sequences.
//!
//! # Example
//!
//! ```ignore
//! use farey_sequence::BuildConfig;
//!
//! let config = BuildConfig::load_toml("configs/f100.toml")?;
//! let seq = FareySequenceBuilder::from_config(&config).build()?;
//! config.save_json("runs/f100.json")?;
//! ```

use std::fs;
use std::path::Path;

/// Serializable description of a sequence build.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuildConfig {
    /// Maximum allowed denominator (sequence order)
    pub limit: i64,

    /// Inclusive lower bound as (numerator, denominator); None means 0/1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<(i64, i64)>,

    /// Inclusive upper bound as (numerator, denominator); None means 1/1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<(i64, i64)>,

    /// Free-form description of the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            lower_bound: None,
            upper_bound: None,
            description: None,
        }
    }
}

impl BuildConfig {
    /// Create a full-range configuration for the given order.
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Validate the configuration without generating anything.
    ///
    /// Only structural checks live here (positive limit, non-zero bound
    /// denominators); range semantics are validated by the generator
    /// itself, which has the reduced bounds in hand.
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 {
            return Err(format!("limit must be >= 1, got {}", self.limit));
        }
        if let Some((n, d)) = self.lower_bound {
            if d == 0 {
                return Err(format!("lower_bound {n}/0 has zero denominator"));
            }
        }
        if let Some((n, d)) = self.upper_bound {
            if d == 0 {
                return Err(format!("upper_bound {n}/0 has zero denominator"));
            }
        }
        Ok(())
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Load configuration from a TOML file and validate it.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: BuildConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json_string = serde_json::to_string_pretty(self)?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Load configuration from a JSON file and validate it.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: BuildConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}
