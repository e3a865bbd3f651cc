use std::borrow::Cow;

use crate::{OverlaySource, State, StateSet, TableError};

/// One rule of a [`StateTable`]: when every state in `states` is active,
/// `layer` is the visual to show.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<L> {
    pub states: StateSet,
    pub layer: L,
}

/// Ordered list of (state set, layer) rules with first-match-wins dispatch.
///
/// Order is priority: when several rules are satisfied by the active states,
/// the earliest one wins ([`lookup`](StateTable::lookup)). No two entries may
/// carry set-equal state sets; construction enforces this, so every
/// `StateTable` value satisfies the invariant.
///
/// Tables are never mutated by the transforms below — each call borrows the
/// input and returns a fresh table, which is what makes them safe to apply
/// to a shared table from several threads at once.
#[derive(Clone, Debug, PartialEq)]
pub struct StateTable<L> {
    entries: Vec<Entry<L>>,
}

impl<L> Default for StateTable<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L> StateTable<L> {
    /// An empty table: no explicit rules at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A one-rule table. Infallible — a single entry cannot collide.
    pub fn single(states: StateSet, layer: L) -> Self {
        Self {
            entries: vec![Entry { states, layer }],
        }
    }

    /// Builds a table from rules in priority order, rejecting set-equal
    /// duplicates.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (StateSet, L)>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new();
        for (states, layer) in entries {
            table.push(states, layer)?;
        }
        Ok(table)
    }

    /// Appends a rule at the lowest priority.
    pub fn push(&mut self, states: StateSet, layer: L) -> Result<(), TableError> {
        if self.contains_set(&states) {
            return Err(TableError::DuplicateStateSet(states));
        }
        self.entries.push(Entry { states, layer });
        Ok(())
    }

    pub fn entries(&self) -> &[Entry<L>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The state sets of all rules, in priority order.
    pub fn state_sets(&self) -> impl Iterator<Item = &StateSet> + '_ {
        self.entries.iter().map(|e| &e.states)
    }

    /// First-match-wins dispatch: the layer of the earliest rule whose state
    /// set is a subset of `active`. An empty-set rule matches anything, so it
    /// acts as a default when placed last.
    pub fn lookup(&self, active: &StateSet) -> Option<&L> {
        self.entries
            .iter()
            .find(|e| e.states.is_subset_of(active))
            .map(|e| &e.layer)
    }

    fn contains_set(&self, states: &StateSet) -> bool {
        self.entries.iter().any(|e| &e.states == states)
    }
}

impl<L: Clone> StateTable<L> {
    /// Synthesizes a table that also renders an overlay whenever `target` is
    /// active.
    ///
    /// For every rule whose state set does not mention `target`, a new rule
    /// `states ∪ {target}` is derived and bound to `overlay(Some(layer))` —
    /// unless a retained rule already covers that exact set. Derived rules
    /// are placed *before* the originals so a first-match consumer prefers
    /// the more specific set. Rules that already mention `target` either
    /// pass through untouched, or are discarded up front when
    /// `drop_conflicting` is set.
    ///
    /// On an empty table the factory is called with `None` and must produce
    /// the highlight on its own; the result is the single rule
    /// `{target} -> overlay(None)`. Callers that have a plain stateless base
    /// layer should wrap it as [`StateTable::single`] with the empty set
    /// first.
    ///
    /// If `overlay` fails the error is returned as [`TableError::Overlay`]
    /// and no table is produced; `self` is never touched either way.
    pub fn add_state<F>(
        &self,
        target: State,
        drop_conflicting: bool,
        mut overlay: F,
    ) -> Result<StateTable<L>, TableError>
    where
        F: FnMut(Option<&L>) -> Result<L, OverlaySource>,
    {
        if self.entries.is_empty() {
            let layer = overlay(None).map_err(TableError::Overlay)?;
            return Ok(StateTable::single(StateSet::of(&[target]), layer));
        }

        let kept: Vec<&Entry<L>> = self
            .entries
            .iter()
            .filter(|e| !(drop_conflicting && e.states.contains(target)))
            .collect();

        let mut synthesized: Vec<Entry<L>> = Vec::new();
        for entry in &kept {
            if entry.states.contains(target) {
                continue;
            }
            let derived = entry.states.with(target);
            // Distinct kept sets derive distinct sets, so checking against
            // the kept rules alone is enough to keep the output duplicate
            // free.
            if kept.iter().any(|e| e.states == derived) {
                continue;
            }
            let layer = overlay(Some(&entry.layer)).map_err(TableError::Overlay)?;
            synthesized.push(Entry {
                states: derived,
                layer,
            });
        }

        log::trace!(
            "add_state {target:?}: {} synthesized, {} retained of {}",
            synthesized.len(),
            kept.len(),
            self.entries.len(),
        );

        let mut entries = synthesized;
        entries.extend(kept.into_iter().cloned());
        Ok(StateTable { entries })
    }

    /// Strips every rule whose state set mentions `state`, keeping the rest
    /// in order. Returns `Cow::Borrowed(self)` when nothing mentions the
    /// state, so callers can skip re-applying an unchanged visual.
    pub fn remove_state(&self, state: State) -> Cow<'_, StateTable<L>> {
        if !self.entries.iter().any(|e| e.states.contains(state)) {
            return Cow::Borrowed(self);
        }
        let entries = self
            .entries
            .iter()
            .filter(|e| !e.states.contains(state))
            .cloned()
            .collect();
        Cow::Owned(StateTable { entries })
    }
}
