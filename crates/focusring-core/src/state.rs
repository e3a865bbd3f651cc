use std::fmt;

use smallvec::SmallVec;

/// One boolean visual condition a widget can be in.
///
/// Values are opaque identifiers; the engine only ever compares them. The
/// constants below cover what the decorator uses — callers are free to mint
/// their own ids above [`State::FIRST_CUSTOM`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(pub u16);

impl State {
    pub const FOCUSED: State = State(1);
    pub const SELECTED: State = State(2);
    pub const PRESSED: State = State(3);
    pub const HOVERED: State = State(4);
    pub const ENABLED: State = State(5);

    /// Lowest id not claimed by the built-in constants.
    pub const FIRST_CUSTOM: State = State(0x100);
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            State::FOCUSED => write!(f, "FOCUSED"),
            State::SELECTED => write!(f, "SELECTED"),
            State::PRESSED => write!(f, "PRESSED"),
            State::HOVERED => write!(f, "HOVERED"),
            State::ENABLED => write!(f, "ENABLED"),
            State(id) => write!(f, "State({id})"),
        }
    }
}

/// Unordered set of simultaneously active [`State`]s.
///
/// Equality ignores insertion order: `{SELECTED, FOCUSED}` and
/// `{FOCUSED, SELECTED}` are the same set. Inserts dedupe, so a set never
/// holds a state twice. Sets are tiny in practice (one or two states), so
/// storage is inline.
#[derive(Clone, Default)]
pub struct StateSet(SmallVec<[State; 4]>);

impl StateSet {
    /// The empty set. As a table rule this is the catch-all: it matches any
    /// active condition.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(states: &[State]) -> Self {
        let mut set = Self::new();
        for &s in states {
            set.insert(s);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Linear scan; sets are small enough that anything cleverer loses.
    pub fn contains(&self, state: State) -> bool {
        self.0.iter().any(|&s| s == state)
    }

    /// Returns false if `state` was already present.
    pub fn insert(&mut self, state: State) -> bool {
        if self.contains(state) {
            return false;
        }
        self.0.push(state);
        true
    }

    /// This set with `state` added; `self` is untouched.
    pub fn with(&self, state: State) -> StateSet {
        let mut derived = self.clone();
        derived.insert(state);
        derived
    }

    /// True iff every state in `self` is active in `other`. The empty set is
    /// a subset of everything.
    pub fn is_subset_of(&self, other: &StateSet) -> bool {
        self.0.iter().all(|&s| other.contains(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        self.0.iter().copied()
    }

    fn sorted(&self) -> SmallVec<[State; 4]> {
        let mut states = self.0.clone();
        states.sort_unstable();
        states
    }
}

/// Order-independent set equality. No assumption of pre-sorted input: both
/// sides are sorted into scratch copies and compared.
impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.sorted() == other.sorted()
    }
}

impl Eq for StateSet {}

impl FromIterator<State> for StateSet {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        let mut set = Self::new();
        for s in iter {
            set.insert(s);
        }
        set
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
