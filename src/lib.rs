//! automata-sim - a membership-test simulator for finite automata, built to
//! grade batches of words against a single machine description.
//!
//! An automaton arrives as a JSON document naming its initial state, its
//! accepting states and its transition relation. The relation is classified
//! once as a DFA, an NFA or an NFA with epsilon transitions, and every word
//! of the batch is then run through the algorithm matching that class.
//!
//! ## What does a description look like?
//!
//! ```json
//! {
//!     "initial": 0,
//!     "final": [2],
//!     "transitions": [
//!         {"from": 0, "to": 1, "read": "a"},
//!         {"from": 1, "to": 2, "read": "b"}
//!     ]
//! }
//! ```
//!
//! An absent or empty `read` field marks an epsilon transition; its mere
//! presence forces the epsilon-closure algorithm for the whole machine.
//!
//! ## How to use this library?
//!
//! ```rust
//! use automata_sim::{simulator, Automaton};
//!
//! let automaton = Automaton::from_json(
//!     r#"{
//!         "initial": 0,
//!         "final": [2],
//!         "transitions": [
//!             {"from": 0, "to": 1, "read": "a"},
//!             {"from": 1, "to": 2, "read": "b"}
//!         ]
//!     }"#,
//! )?;
//! let class = automaton.classify();
//!
//! assert!(simulator::accepts(&automaton, class, "ab"));
//! assert!(!simulator::accepts(&automaton, class, "ba"));
//! # Ok::<(), automata_sim::AutomatonError>(())
//! ```

pub mod automaton;
pub mod batch;
pub mod error;
pub mod simulator;

pub use automaton::{classify, Automaton, AutomatonClass, StateId, Transition};
pub use batch::SimulationResult;
pub use error::AutomatonError;
