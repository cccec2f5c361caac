//! Membership-test algorithms, one per automaton class.
//!
//! All three are pure functions over a read-only [`Automaton`]; a word that
//! gets stuck or strands the state set is rejected, never an error.

use rustc_hash::FxHashSet;

use crate::automaton::{Automaton, AutomatonClass, StateId, Transition};

/// Run the membership test matching the given classification.
pub fn accepts(automaton: &Automaton, class: AutomatonClass, word: &str) -> bool {
    match class {
        AutomatonClass::Dfa => run_dfa(automaton, word),
        AutomatonClass::Nfa => run_nfa(automaton, word),
        AutomatonClass::NfaEpsilon => run_nfa_epsilon(automaton, word),
    }
}

/// Deterministic simulation: one current state, one arrow per symbol.
///
/// A true DFA has at most one matching arrow per step; should the relation
/// hold duplicates anyway, the first match in input order wins. A symbol
/// with no matching arrow leaves the automaton stuck and the word is
/// rejected.
pub fn run_dfa(automaton: &Automaton, word: &str) -> bool {
    let mut current = automaton.initial;
    for symbol in word.chars() {
        match automaton
            .transitions
            .iter()
            .find(|t| t.from == current && t.read == Some(symbol))
        {
            Some(t) => current = t.to,
            None => return false,
        }
    }
    automaton.is_final(current)
}

/// Non-deterministic simulation: the frontier is a state set, advanced
/// through every matching arrow at once.
pub fn run_nfa(automaton: &Automaton, word: &str) -> bool {
    let mut current = FxHashSet::from_iter([automaton.initial]);
    for symbol in word.chars() {
        let mut next = FxHashSet::default();
        for t in &automaton.transitions {
            if t.read == Some(symbol) && current.contains(&t.from) {
                next.insert(t.to);
            }
        }
        if next.is_empty() {
            return false;
        }
        current = next;
    }
    current.iter().any(|&state| automaton.is_final(state))
}

/// Epsilon-NFA simulation: every frontier is closed under epsilon
/// reachability, including the initial one, so the empty word already
/// honors epsilon arrows out of the initial state.
pub fn run_nfa_epsilon(automaton: &Automaton, word: &str) -> bool {
    let mut current = epsilon_closure(automaton.initial, &automaton.transitions);
    for symbol in word.chars() {
        let mut next = FxHashSet::default();
        for t in &automaton.transitions {
            if t.read == Some(symbol) && current.contains(&t.from) {
                next.extend(epsilon_closure(t.to, &automaton.transitions));
            }
        }
        if next.is_empty() {
            return false;
        }
        current = next;
    }
    current.iter().any(|&state| automaton.is_final(state))
}

/// All states reachable from `state` through epsilon arrows alone,
/// `state` itself included.
///
/// Epsilon cycles are a legal relation shape, so the traversal tracks
/// visited states instead of trusting the arrows to be acyclic.
pub fn epsilon_closure(state: StateId, transitions: &[Transition]) -> FxHashSet<StateId> {
    let mut closure = FxHashSet::from_iter([state]);
    let mut stack = vec![state];
    while let Some(current) = stack.pop() {
        for t in transitions {
            if t.from == current && t.read.is_none() && closure.insert(t.to) {
                stack.push(t.to);
            }
        }
    }
    closure
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::automaton::classify;

    fn automaton(initial: u32, finals: &[u32], arrows: &[(u32, Option<char>, u32)]) -> Automaton {
        Automaton {
            initial: StateId(initial),
            finals: finals.iter().map(|&s| StateId(s)).collect(),
            transitions: arrows
                .iter()
                .map(|&(from, read, to)| Transition {
                    from: StateId(from),
                    read,
                    to: StateId(to),
                })
                .collect(),
        }
    }

    #[test]
    fn dfa_accepts_and_rejects() {
        let ab = automaton(0, &[2], &[(0, Some('a'), 1), (1, Some('b'), 2)]);
        assert_eq!(classify(&ab.transitions), AutomatonClass::Dfa);

        assert!(run_dfa(&ab, "ab"));
        assert!(!run_dfa(&ab, "a"));
        // No arrow out of 0 on 'b': stuck, rejected.
        assert!(!run_dfa(&ab, "ba"));
        assert!(!run_dfa(&ab, "abb"));
    }

    #[test]
    fn dfa_empty_word() {
        let looping = automaton(0, &[0], &[(0, Some('a'), 0)]);
        assert!(run_dfa(&looping, ""));
        let rejecting = automaton(0, &[1], &[(0, Some('a'), 1)]);
        assert!(!run_dfa(&rejecting, ""));
    }

    #[test]
    fn dfa_duplicate_arrows_take_first_in_input_order() {
        // Mis-detected relation: two arrows on (0, 'a'). The first one
        // leads to acceptance, the second would not.
        let dup = automaton(0, &[1], &[(0, Some('a'), 1), (0, Some('a'), 2)]);
        assert!(run_dfa(&dup, "a"));

        let dup_rev = automaton(0, &[1], &[(0, Some('a'), 2), (0, Some('a'), 1)]);
        assert!(!run_dfa(&dup_rev, "a"));
    }

    #[test]
    fn nfa_accepts_through_either_branch() {
        let branching = automaton(0, &[1, 2], &[(0, Some('a'), 1), (0, Some('a'), 2)]);
        assert_eq!(classify(&branching.transitions), AutomatonClass::Nfa);
        assert!(run_nfa(&branching, "a"));
    }

    #[test]
    fn nfa_rejects_on_empty_frontier() {
        let branching = automaton(
            0,
            &[3],
            &[(0, Some('a'), 1), (0, Some('a'), 2), (1, Some('b'), 3)],
        );
        assert!(run_nfa(&branching, "ab"));
        assert!(!run_nfa(&branching, "ac"));
        assert!(!run_nfa(&branching, "b"));
    }

    #[test]
    fn nfa_empty_word() {
        let branching = automaton(0, &[0], &[(0, Some('a'), 1), (0, Some('a'), 2)]);
        assert!(run_nfa(&branching, ""));
        let not_final = automaton(0, &[1], &[(0, Some('a'), 1)]);
        assert!(!run_nfa(&not_final, ""));
    }

    #[test]
    fn epsilon_closure_includes_the_state_itself() {
        let arrows = automaton(0, &[], &[(0, Some('a'), 1)]);
        let closure = epsilon_closure(StateId(0), &arrows.transitions);
        assert_eq!(closure, FxHashSet::from_iter([StateId(0)]));
    }

    #[test]
    fn epsilon_closure_follows_chains() {
        let chain = automaton(0, &[], &[(0, None, 1), (1, None, 2), (2, Some('a'), 3)]);
        let closure = epsilon_closure(StateId(0), &chain.transitions);
        assert_eq!(
            closure,
            FxHashSet::from_iter([StateId(0), StateId(1), StateId(2)])
        );
    }

    #[test]
    fn epsilon_closure_terminates_on_cycles() {
        let cycle = automaton(0, &[], &[(0, None, 1), (1, None, 2), (2, None, 0), (1, None, 1)]);
        let closure = epsilon_closure(StateId(0), &cycle.transitions);
        assert_eq!(
            closure,
            FxHashSet::from_iter([StateId(0), StateId(1), StateId(2)])
        );
    }

    #[test]
    fn epsilon_nfa_empty_word_uses_initial_closure() {
        let eps = automaton(0, &[1], &[(0, None, 1)]);
        assert_eq!(classify(&eps.transitions), AutomatonClass::NfaEpsilon);
        // 1 is reached without consuming any input.
        assert!(run_nfa_epsilon(&eps, ""));
    }

    #[test]
    fn epsilon_nfa_closes_after_each_symbol() {
        // 0 -a-> 1 -eps-> 2, with 2 accepting: "a" must be accepted
        // through the closure of the successor.
        let eps = automaton(0, &[2], &[(0, Some('a'), 1), (1, None, 2)]);
        assert!(run_nfa_epsilon(&eps, "a"));
        assert!(!run_nfa_epsilon(&eps, ""));
        assert!(!run_nfa_epsilon(&eps, "aa"));
    }

    #[test]
    fn epsilon_nfa_rejects_on_empty_frontier() {
        let eps = automaton(0, &[2], &[(0, None, 1), (1, Some('a'), 2)]);
        assert!(run_nfa_epsilon(&eps, "a"));
        assert!(!run_nfa_epsilon(&eps, "b"));
    }

    #[test]
    fn dispatch_matches_the_class() {
        let ab = automaton(0, &[2], &[(0, Some('a'), 1), (1, Some('b'), 2)]);
        let class = classify(&ab.transitions);
        assert!(accepts(&ab, class, "ab"));
        assert!(!accepts(&ab, class, "ba"));
    }

    #[test]
    fn simulation_is_idempotent() {
        let branching = automaton(0, &[1, 2], &[(0, Some('a'), 1), (0, Some('a'), 2)]);
        let first = run_nfa(&branching, "a");
        for _ in 0..10 {
            assert_eq!(run_nfa(&branching, "a"), first);
        }
    }
}
