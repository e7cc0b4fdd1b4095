//! Generation parameters and their validation.

use crate::error::{Result, TreeError};
use crate::interpreter::InterpreterConfig;
use crate::preset::TreePreset;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Everything needed to grow one tree.
///
/// Every field has a default, so a partial TOML table is enough:
///
/// ```toml
/// preset = "spire"
/// iterations = 3
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub preset: TreePreset,
    /// Number of rewriting rounds applied to the axiom.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Length of every branch.
    #[serde(default = "default_step_length")]
    pub step_length: f32,
    /// Turn angle in degrees.
    #[serde(default = "default_turn_angle")]
    pub turn_angle: f32,
    /// Upper bound on `iterations`; string length grows exponentially with it.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            preset: TreePreset::default(),
            iterations: default_iterations(),
            step_length: default_step_length(),
            turn_angle: default_turn_angle(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_iterations() -> usize {
    4
}

fn default_step_length() -> f32 {
    1.0
}

fn default_turn_angle() -> f32 {
    25.0
}

fn default_max_iterations() -> usize {
    6
}

impl GeneratorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading generator config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations > self.max_iterations {
            return Err(TreeError::invalid(
                "iterations",
                format!(
                    "{} exceeds the configured maximum of {}",
                    self.iterations, self.max_iterations
                ),
            ));
        }
        self.interpreter_config().validate()
    }

    pub fn interpreter_config(&self) -> InterpreterConfig {
        InterpreterConfig::new(self.step_length, self.turn_angle)
    }
}
