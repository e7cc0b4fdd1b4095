//! # arbor-lsystem
//!
//! Procedural tree generation from bracketed L-Systems.
//!
//! A [`RuleSet`] rewrites an axiom for a fixed number of rounds, then a
//! [`TurtleInterpreter`] walks the resulting string and produces a
//! [`TreeModel`]: an ordered list of branch segments and an ordered list of
//! leaf placements. The output is engine-agnostic; instantiating meshes and
//! assigning materials is left to the host application.
//!
//! ```
//! use arbor_lsystem::{RuleSet, expand, interpret};
//!
//! let rules = RuleSet::new().with_rule('X', "F[+FX][-FX]");
//! let symbols = expand("X", 2, &rules);
//! let tree = interpret(&symbols, 1.0, 25.0).unwrap();
//! assert_eq!(tree.branches.len(), 9);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod grammar;
pub mod interpreter;
pub mod model;
pub mod preset;
pub mod turtle;

pub use config::*;
pub use error::*;
pub use generator::*;
pub use grammar::*;
pub use interpreter::*;
pub use model::*;
pub use preset::*;
pub use turtle::*;
