use std::fmt;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AutomatonError;

/// An opaque state identifier.
///
/// States carry no structure of their own; the newtype keeps them distinct
/// from the incidental integers elsewhere in the crate (elapsed-time
/// counters, row counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One arrow of the transition relation.
///
/// `read` is the consumed symbol; `None` is an epsilon transition, encoded
/// in the description as an absent or empty `read` field. Several
/// transitions may share the same `(from, read)` pair, which is exactly
/// what makes a relation non-deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateId,
    #[serde(default, deserialize_with = "deserialize_symbol")]
    pub read: Option<char>,
    pub to: StateId,
}

fn deserialize_symbol<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(symbol) => {
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Some(c)),
                _ => Err(serde::de::Error::custom(format!(
                    "transition symbol `{symbol}` is not a single character"
                ))),
            }
        }
    }
}

/// A finite automaton as described by the input document: one initial
/// state, a set of accepting states and an ordered transition relation.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Automaton {
    pub initial: StateId,
    #[serde(rename = "final")]
    pub finals: FxHashSet<StateId>,
    pub transitions: Vec<Transition>,
}

impl Automaton {
    /// Parse an automaton description from its JSON text.
    pub fn from_json(input: &str) -> Result<Self, AutomatonError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load an automaton description from a file.
    pub fn from_path(path: &Path) -> Result<Self, AutomatonError> {
        let text = std::fs::read_to_string(path).map_err(|source| AutomatonError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Classify this automaton's transition relation.
    pub fn classify(&self) -> AutomatonClass {
        classify(&self.transitions)
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }
}

/// The class of algorithm a transition relation calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AutomatonClass {
    Dfa,
    Nfa,
    NfaEpsilon,
}

impl fmt::Display for AutomatonClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AutomatonClass::Dfa => "DFA",
            AutomatonClass::Nfa => "NFA",
            AutomatonClass::NfaEpsilon => "NFA_EPSILON",
        })
    }
}

/// Determine which membership algorithm a transition relation requires.
///
/// Any epsilon transition forces [`AutomatonClass::NfaEpsilon`], even when
/// the relation would otherwise be deterministic or the epsilon arrow is
/// unreachable; the reported label must stay consistent with the closure
/// algorithm actually run. Otherwise the relation is an
/// [`AutomatonClass::Nfa`] exactly when some `(from, read)` pair maps to
/// more than one distinct target. An empty relation is a DFA.
pub fn classify(transitions: &[Transition]) -> AutomatonClass {
    if transitions.iter().any(|t| t.read.is_none()) {
        return AutomatonClass::NfaEpsilon;
    }

    let mut targets: FxHashMap<(StateId, char), FxHashSet<StateId>> = FxHashMap::default();
    for t in transitions {
        if let Some(symbol) = t.read {
            targets.entry((t.from, symbol)).or_default().insert(t.to);
        }
    }

    if targets.values().any(|states| states.len() > 1) {
        AutomatonClass::Nfa
    } else {
        AutomatonClass::Dfa
    }
}
