//! Turtle state and operations for tree interpretation.

use crate::model::LeafSize;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Unit growth direction for a pair of turn angles given in degrees.
///
/// `angle_x` tilts the heading within the Y/Z plane, `angle_z` leans it
/// towards X. With both angles at zero the turtle grows along `+Y`.
pub fn direction(angle_x: f32, angle_z: f32) -> Vec3 {
    let (sin_x, cos_x) = angle_x.to_radians().sin_cos();
    let (sin_z, cos_z) = angle_z.to_radians().sin_cos();
    Vec3::new(sin_z, cos_z * cos_x, cos_z * sin_x)
}

/// Displacement of a single step of `length` at the given angles.
pub fn displacement(length: f32, angle_x: f32, angle_z: f32) -> Vec3 {
    direction(angle_x, angle_z) * length
}

/// The state of the tree-building turtle.
///
/// This is a plain value: the branch stack stores copies, so a saved state
/// never aliases the live one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the cursor.
    pub position: Vec3,
    /// Heading angle about the first axis, in degrees.
    pub angle_x: f32,
    /// Heading angle about the second axis, in degrees.
    pub angle_z: f32,
}

impl TurtleState {
    /// Unit vector the turtle will grow along on its next step.
    pub fn heading(&self) -> Vec3 {
        direction(self.angle_x, self.angle_z)
    }

    /// Position reached by stepping `length` along the current heading.
    pub fn step_target(&self, length: f32) -> Vec3 {
        self.position + self.heading() * length
    }

    /// Turns about the first axis by `degrees`.
    pub fn turn_x(&mut self, degrees: f32) {
        self.angle_x += degrees;
    }

    /// Turns about the second axis by `degrees`.
    pub fn turn_z(&mut self, degrees: f32) {
        self.angle_z += degrees;
    }
}

/// Operations that can be performed by the tree turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Grow a branch and advance (`F`).
    Forward,
    /// Turn about the first axis; the sign selects `+` (1) or `-` (-1).
    TurnX(i8),
    /// Turn about the second axis; the sign selects `/` (1) or `|` (-1).
    TurnZ(i8),
    /// Place a leaf (`L`, `D`, `S`).
    Leaf(LeafSize),
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op: symbol has no registered meaning.
    Ignore,
}

impl TurtleOp {
    /// Decodes a single symbol of the tree alphabet.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'F' => Self::Forward,
            '+' => Self::TurnX(1),
            '-' => Self::TurnX(-1),
            '/' => Self::TurnZ(1),
            '|' => Self::TurnZ(-1),
            'L' => Self::Leaf(LeafSize::Small),
            'D' => Self::Leaf(LeafSize::Medium),
            'S' => Self::Leaf(LeafSize::Large),
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}
