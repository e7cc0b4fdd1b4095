//! Interpreter that converts an expanded symbol string into a [`TreeModel`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with an
//! [`InterpreterConfig`] and call [`TurtleInterpreter::interpret`], or use the
//! free function [`interpret`] for one-off calls.

use crate::error::{Result, TreeError};
use crate::model::{BranchSegment, LeafPlacement, LeafSize, TreeModel};
use crate::turtle::{TurtleOp, TurtleState};
use glam::Vec3;
use tracing::{debug, warn};

/// Configuration for tree interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpreterConfig {
    /// Length of every branch grown by `F`. Must be positive.
    pub step_length: f32,
    /// Angle (in degrees) applied by each turn symbol.
    pub turn_angle: f32,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            step_length: 1.0,
            turn_angle: 25.0,
        }
    }
}

impl InterpreterConfig {
    pub fn new(step_length: f32, turn_angle: f32) -> Self {
        Self {
            step_length,
            turn_angle,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.step_length.is_finite() || self.step_length <= 0.0 {
            return Err(TreeError::invalid(
                "step_length",
                format!("must be a positive finite number, got {}", self.step_length),
            ));
        }
        if !self.turn_angle.is_finite() {
            return Err(TreeError::invalid(
                "turn_angle",
                format!("must be finite, got {}", self.turn_angle),
            ));
        }
        Ok(())
    }
}

/// Interprets an expanded L-System string as a branching tree.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: InterpreterConfig,
}

impl TurtleInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    /// Walks `symbols` left to right and returns the branches and leaves it grows.
    ///
    /// The turtle starts at the origin with both angles at zero, heading `+Y`.
    /// Unknown symbols are ignored.
    ///
    /// # Leaves
    ///
    /// `D` and `S` are placed at the turtle's current position. `L` is placed
    /// at the target of the most recent `F` step (the origin if no step has
    /// been taken yet), which is not restored by `]`. Directly after an `F`
    /// both coincide.
    ///
    /// # Push / Pop
    ///
    /// `[` saves position and angles onto a stack, `]` restores them. A `]`
    /// with nothing to restore fails with [`TreeError::MalformedInput`] and no
    /// model is returned. States still saved at the end are discarded.
    pub fn interpret(&self, symbols: &str) -> Result<TreeModel> {
        self.config.validate()?;

        let step = self.config.step_length;
        let turn = self.config.turn_angle;

        let mut model = TreeModel::new();
        let mut turtle = TurtleState::default();
        let mut stack: Vec<TurtleState> = Vec::new();
        // Target of the latest `F`. Starts at the origin so an `L` before any
        // step is placed there rather than rejected.
        let mut last_target: Vec3 = turtle.position;

        for (index, symbol) in symbols.chars().enumerate() {
            match TurtleOp::from_symbol(symbol) {
                TurtleOp::Forward => {
                    model.add_branch(BranchSegment {
                        start: turtle.position,
                        length: step,
                        angle_x: turtle.angle_x,
                        angle_z: turtle.angle_z,
                    });
                    last_target = turtle.step_target(step);
                    turtle.position = last_target;
                }
                TurtleOp::TurnX(sign) => turtle.turn_x(turn * f32::from(sign)),
                TurtleOp::TurnZ(sign) => turtle.turn_z(turn * f32::from(sign)),
                TurtleOp::Leaf(size) => {
                    let position = match size {
                        LeafSize::Small => last_target,
                        LeafSize::Medium | LeafSize::Large => turtle.position,
                    };
                    model.add_leaf(LeafPlacement { position, size });
                }
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => {
                    turtle = stack
                        .pop()
                        .ok_or(TreeError::MalformedInput { index, symbol })?;
                }
                TurtleOp::Ignore => {}
            }
        }

        if !stack.is_empty() {
            warn!(unclosed = stack.len(), "symbol string ended inside a branch");
        }
        debug!(
            branches = model.branches.len(),
            leaves = model.leaves.len(),
            "interpreted symbol string"
        );

        Ok(model)
    }
}

/// Interprets `symbols` with the given step length and turn angle (degrees).
pub fn interpret(symbols: &str, step_length: f32, turn_angle: f32) -> Result<TreeModel> {
    TurtleInterpreter::new(InterpreterConfig::new(step_length, turn_angle)).interpret(symbols)
}
