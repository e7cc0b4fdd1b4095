//! Rule storage and parallel string rewriting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A set of context-free replacement rules, one per symbol.
///
/// Symbols without a rule rewrite to themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: HashMap<char, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule (builder pattern).
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.add_rule(symbol, replacement);
        self
    }

    /// Inserts the rule for `symbol`, overwriting any previous one.
    ///
    /// The replacement is unconstrained and may mention `symbol` itself.
    pub fn add_rule(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    /// The replacement for `symbol`, if one is registered.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrites every symbol of `input` once.
    ///
    /// Output goes to a fresh buffer so inserted text is never rewritten again
    /// in the same round.
    pub fn rewrite(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            match self.rules.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }

    /// Applies [`rewrite`](Self::rewrite) `iterations` times starting from `axiom`.
    ///
    /// `iterations == 0` returns the axiom unchanged. Growth is typically
    /// exponential in `iterations`; bounding it is the caller's job.
    pub fn expand(&self, axiom: &str, iterations: usize) -> String {
        let mut current = axiom.to_owned();
        for round in 1..=iterations {
            current = self.rewrite(&current);
            debug!(round, len = current.len(), "rewrote symbol string");
        }
        current
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        for (symbol, replacement) in iter {
            rules.add_rule(symbol, replacement);
        }
        rules
    }
}

/// Inserts or overwrites the rule for `symbol` in `rules`.
pub fn add_rule(rules: &mut RuleSet, symbol: char, replacement: impl Into<String>) {
    rules.add_rule(symbol, replacement);
}

/// Expands `axiom` by `iterations` rounds of simultaneous substitution.
pub fn expand(axiom: &str, iterations: usize, rules: &RuleSet) -> String {
    rules.expand(axiom, iterations)
}
