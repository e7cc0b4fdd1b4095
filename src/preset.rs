//! The predefined tree rule tables.
//!
//! Rule tables are plain data handed to the grammar engine; the engine itself
//! knows nothing about them. Branching patterns follow the bracketed plant
//! examples of Prusinkiewicz & Lindenmayer, *The Algorithmic Beauty of Plants*, ch. 1.

use crate::error::TreeError;
use crate::grammar::RuleSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seed string shared by all presets.
pub const TREE_AXIOM: &str = "X";

/// Trunk doubling rule shared by all presets.
pub const TRUNK_RULE: (char, &str) = ('F', "FF");

pub const CANOPY_RULE: (char, &str) = ('X', "F[+FXL][|XL][/XL][-FX]+F[-FX]+L");
pub const SPIRE_RULE: (char, &str) = ('X', "FF[+XL]FF[-XL]+/XD");
pub const SHRUB_RULE: (char, &str) = ('X', "F-[[XS]/+XS]+F[+|FXL]-X");

/// One of the built-in tree shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreePreset {
    /// Wide crown with small leaves at every tip.
    #[default]
    Canopy,
    /// Tall stacked trunk with a medium leaf on top.
    Spire,
    /// Dense low growth with large leaves.
    Shrub,
}

impl TreePreset {
    pub const ALL: [TreePreset; 3] = [Self::Canopy, Self::Spire, Self::Shrub];

    pub fn axiom(self) -> &'static str {
        TREE_AXIOM
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Canopy => "canopy",
            Self::Spire => "spire",
            Self::Shrub => "shrub",
        }
    }

    /// Builds a fresh rule set for this preset.
    pub fn rules(self) -> RuleSet {
        let branch_rule = match self {
            Self::Canopy => CANOPY_RULE,
            Self::Spire => SPIRE_RULE,
            Self::Shrub => SHRUB_RULE,
        };
        [branch_rule, TRUNK_RULE].into_iter().collect()
    }
}

impl fmt::Display for TreePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreePreset {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| TreeError::invalid("preset", format!("unknown tree preset `{s}`")))
    }
}
