use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::interpreter::TurtleInterpreter;
use crate::model::TreeModel;
use tracing::info;

/// Runs the whole pipeline for one request: preset rules, expansion, interpretation.
///
/// Holds no state between calls, so independent requests may run on
/// separate threads.
#[derive(Clone, Debug, Default)]
pub struct TreeGenerator {
    config: GeneratorConfig,
}

impl TreeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The expanded symbol string for the configured preset.
    pub fn symbols(&self) -> Result<String> {
        self.config.validate()?;
        let preset = self.config.preset;
        Ok(preset
            .rules()
            .expand(preset.axiom(), self.config.iterations))
    }

    pub fn generate(&self) -> Result<TreeModel> {
        let symbols = self.symbols()?;
        let model = TurtleInterpreter::new(self.config.interpreter_config()).interpret(&symbols)?;
        info!(
            preset = %self.config.preset,
            iterations = self.config.iterations,
            symbols = symbols.len(),
            branches = model.branches.len(),
            leaves = model.leaves.len(),
            "generated tree"
        );
        Ok(model)
    }
}

/// Generates a tree from `config` in one call.
pub fn generate(config: &GeneratorConfig) -> Result<TreeModel> {
    TreeGenerator::new(config.clone()).generate()
}
