#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::{State, StateSet, StateTable, TableError};

    fn table(rules: &[(&[State], &str)]) -> StateTable<String> {
        StateTable::from_entries(
            rules
                .iter()
                .map(|(states, layer)| (StateSet::of(states), layer.to_string())),
        )
        .unwrap()
    }

    fn framed(base: Option<&String>) -> Result<String, crate::OverlaySource> {
        Ok(match base {
            Some(layer) => format!("hi:{layer}"),
            None => "frame".to_string(),
        })
    }

    fn sets(t: &StateTable<String>) -> Vec<StateSet> {
        t.state_sets().cloned().collect()
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let ab = StateSet::of(&[State::FOCUSED, State::SELECTED]);
        let ba = StateSet::of(&[State::SELECTED, State::FOCUSED]);
        assert_eq!(ab, ba);

        let a = StateSet::of(&[State::FOCUSED]);
        assert_ne!(a, ab);
        assert_eq!(StateSet::new(), StateSet::of(&[]));
    }

    #[test]
    fn test_set_insert_dedupes() {
        let mut set = StateSet::new();
        assert!(set.insert(State::PRESSED));
        assert!(!set.insert(State::PRESSED));
        assert_eq!(set.len(), 1);
        assert!(set.contains(State::PRESSED));
        assert!(!set.contains(State::FOCUSED));
    }

    #[test]
    fn test_subset() {
        let active = StateSet::of(&[State::SELECTED, State::FOCUSED]);
        assert!(StateSet::new().is_subset_of(&active));
        assert!(StateSet::of(&[State::FOCUSED]).is_subset_of(&active));
        assert!(!StateSet::of(&[State::PRESSED]).is_subset_of(&active));
    }

    #[test]
    fn test_duplicate_set_rejected() {
        let mut t = StateTable::new();
        t.push(StateSet::of(&[State::FOCUSED]), "a").unwrap();
        let err = t
            .push(StateSet::of(&[State::FOCUSED]), "b")
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateStateSet(_)));

        // Permutations of the same set collide too.
        let err = StateTable::from_entries([
            (StateSet::of(&[State::FOCUSED, State::SELECTED]), "a"),
            (StateSet::of(&[State::SELECTED, State::FOCUSED]), "b"),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateStateSet(_)));
    }

    #[test]
    fn test_add_state_on_empty_table() {
        let empty: StateTable<String> = StateTable::new();
        let out = empty.add_state(State::FOCUSED, true, framed).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.entries()[0].states, StateSet::of(&[State::FOCUSED]));
        assert_eq!(out.entries()[0].layer, "frame");
    }

    #[test]
    fn test_add_state_prepends_derived_rules() {
        let t = table(&[(&[State::SELECTED], "sel"), (&[], "base")]);
        let out = t.add_state(State::FOCUSED, false, framed).unwrap();

        assert_eq!(
            sets(&out),
            vec![
                StateSet::of(&[State::SELECTED, State::FOCUSED]),
                StateSet::of(&[State::FOCUSED]),
                StateSet::of(&[State::SELECTED]),
                StateSet::new(),
            ]
        );
        let layers: Vec<&str> = out.entries().iter().map(|e| e.layer.as_str()).collect();
        assert_eq!(layers, vec!["hi:sel", "hi:base", "sel", "base"]);
    }

    #[test]
    fn test_add_state_drops_conflicting_rules() {
        let t = table(&[(&[State::FOCUSED], "old"), (&[], "base")]);
        let out = t.add_state(State::FOCUSED, true, framed).unwrap();

        assert_eq!(
            sets(&out),
            vec![StateSet::of(&[State::FOCUSED]), StateSet::new()]
        );
        // The old focused layer is gone, not reused.
        assert_eq!(out.entries()[0].layer, "hi:base");
        assert_eq!(out.entries()[1].layer, "base");
    }

    #[test]
    fn test_existing_derived_set_suppresses_synthesis() {
        let t = table(&[
            (&[State::SELECTED], "sel"),
            (&[State::SELECTED, State::FOCUSED], "custom"),
            (&[], "base"),
        ]);
        let out = t.add_state(State::FOCUSED, false, framed).unwrap();

        // {SELECTED} ∪ {FOCUSED} already exists, so only {} derives a rule.
        assert_eq!(
            sets(&out),
            vec![
                StateSet::of(&[State::FOCUSED]),
                StateSet::of(&[State::SELECTED]),
                StateSet::of(&[State::SELECTED, State::FOCUSED]),
                StateSet::new(),
            ]
        );
        assert_eq!(out.entries()[0].layer, "hi:base");
        assert_eq!(out.entries()[2].layer, "custom");
    }

    #[test]
    fn test_add_state_noop_when_all_rules_conflict() {
        let t = table(&[(&[State::FOCUSED], "old")]);
        let out = t.add_state(State::FOCUSED, false, framed).unwrap();
        assert_eq!(out, t);
    }

    #[test]
    fn test_drop_conflicting_can_empty_a_table() {
        // Every rule mentions the target and gets dropped; nothing is left
        // to derive from. The caller decides the fallback visual, same as
        // after remove_state.
        let t = table(&[(&[State::FOCUSED], "old")]);
        let out = t.add_state(State::FOCUSED, true, framed).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_duplicate_sets_in_output() {
        let t = table(&[
            (&[State::SELECTED], "sel"),
            (&[State::PRESSED], "press"),
            (&[State::SELECTED, State::FOCUSED], "custom"),
            (&[], "base"),
        ]);
        let out = t.add_state(State::FOCUSED, false, framed).unwrap();
        let sets = sets(&out);
        for (i, a) in sets.iter().enumerate() {
            for b in &sets[i + 1..] {
                assert_ne!(a, b, "duplicate state set in output");
            }
        }
    }

    #[test]
    fn test_remove_state_preserves_order() {
        let t = table(&[
            (&[State::FOCUSED, State::SELECTED], "a"),
            (&[State::SELECTED], "b"),
            (&[], "c"),
        ]);
        let out = t.remove_state(State::FOCUSED);
        assert!(matches!(out, Cow::Owned(_)));
        assert_eq!(
            sets(&out),
            vec![StateSet::of(&[State::SELECTED]), StateSet::new()]
        );
    }

    #[test]
    fn test_remove_state_signals_noop() {
        let t = table(&[(&[State::SELECTED], "b"), (&[], "c")]);
        let out = t.remove_state(State::FOCUSED);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(*out, t);
    }

    #[test]
    fn test_remove_state_can_empty_a_table() {
        let t = table(&[(&[State::FOCUSED], "a")]);
        let out = t.remove_state(State::FOCUSED);
        assert!(out.is_empty());
    }

    #[test]
    fn test_add_state_is_idempotent_on_state_sets() {
        let t = table(&[(&[State::SELECTED], "sel"), (&[], "base")]);
        let once = t.add_state(State::FOCUSED, true, framed).unwrap();
        let twice = once.add_state(State::FOCUSED, true, framed).unwrap();
        assert_eq!(sets(&once), sets(&twice));
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        // Precondition: no rule of t mentions FOCUSED already.
        let t = table(&[(&[State::SELECTED], "sel"), (&[], "base")]);
        let added = t.add_state(State::FOCUSED, true, framed).unwrap();
        let stripped = added.remove_state(State::FOCUSED);
        assert_eq!(sets(&stripped), sets(&t.remove_state(State::FOCUSED)));
        assert_eq!(sets(&stripped), sets(&t));
    }

    #[test]
    fn test_overlay_failure_propagates() {
        let t = table(&[(&[State::SELECTED], "sel"), (&[], "base")]);
        let err = t
            .add_state(State::FOCUSED, false, |_| Err("missing frame".into()))
            .unwrap_err();
        assert!(matches!(err, TableError::Overlay(_)));
        // Source is untouched regardless.
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_lookup_is_first_match_wins() {
        let t = table(&[(&[State::SELECTED], "sel"), (&[], "base")]);
        let lit = t.add_state(State::FOCUSED, false, framed).unwrap();

        let both = StateSet::of(&[State::SELECTED, State::FOCUSED]);
        assert_eq!(lit.lookup(&both), Some(&"hi:sel".to_string()));
        assert_eq!(
            lit.lookup(&StateSet::of(&[State::FOCUSED])),
            Some(&"hi:base".to_string())
        );
        assert_eq!(
            lit.lookup(&StateSet::of(&[State::SELECTED])),
            Some(&"sel".to_string())
        );
        assert_eq!(lit.lookup(&StateSet::new()), Some(&"base".to_string()));

        let empty: StateTable<String> = StateTable::new();
        assert_eq!(empty.lookup(&StateSet::new()), None);
    }
}
