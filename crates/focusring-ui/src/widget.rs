use bitflags::bitflags;

use focusring_core::{StateSet, StateTable};

use crate::Layer;

bitflags! {
    /// What a widget can do, as far as highlighting is concerned.
    ///
    /// The host toolkit tags each node once when translating its native tree;
    /// the decorator dispatches on these instead of downcasting widget types.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Caps: u8 {
        /// Reacts to click/confirm. Gets the focused overlay and is marked
        /// focusable.
        const CLICKABLE = 1 << 0;
        /// Generic container; children are visited recursively.
        const CONTAINER = 1 << 1;
        /// List-style container. Its items are highlighted with SELECTED
        /// rather than FOCUSED (list focus lands on the container, the
        /// current item is "selected").
        const LIST = 1 << 2;
        /// Content slot holds an image rather than a plain background.
        const IMAGE = 1 << 3;
        /// Button-like: the foreground slot is not honored, so the overlay
        /// goes to the background even on foreground-capable hosts.
        const BUTTON = 1 << 4;
    }
}

/// Which drawable slot of a widget a visual lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    Background,
    Foreground,
    Image,
}

/// Content of one drawable slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Visual {
    /// Slot is empty.
    #[default]
    None,
    /// A single stateless layer.
    Plain(Layer),
    /// State-dependent layers.
    Stateful(StateTable<Layer>),
}

impl Visual {
    /// This slot's content as a state table: a plain layer becomes the
    /// catch-all rule `{} -> layer`, an empty slot the empty table.
    pub fn to_table(&self) -> StateTable<Layer> {
        match self {
            Visual::None => StateTable::new(),
            Visual::Plain(layer) => StateTable::single(StateSet::new(), layer.clone()),
            Visual::Stateful(table) => table.clone(),
        }
    }

    /// The layer this slot shows for the given active states.
    pub fn resolve(&self, active: &StateSet) -> Option<&Layer> {
        match self {
            Visual::None => None,
            Visual::Plain(layer) => Some(layer),
            Visual::Stateful(table) => table.lookup(active),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Visual::None)
    }
}

/// One node of the widget tree the decorator walks.
///
/// This is a plain owned value, not a live view: the host toolkit builds it
/// from its native tree, lets the decorator rewrite the slots, and applies
/// the result back.
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub caps: Caps,
    /// Whether the widget may take focus. The decorator sets this on
    /// clickable widgets so d-pad navigation can reach them.
    pub focusable: bool,
    pub background: Visual,
    pub foreground: Visual,
    pub image: Visual,
    pub children: Vec<Widget>,
}

impl Widget {
    pub fn new(caps: Caps) -> Self {
        Widget {
            caps,
            focusable: false,
            background: Visual::None,
            foreground: Visual::None,
            image: Visual::None,
            children: Vec::new(),
        }
    }

    pub fn background(mut self, layer: Layer) -> Self {
        self.background = Visual::Plain(layer);
        self
    }

    pub fn foreground(mut self, layer: Layer) -> Self {
        self.foreground = Visual::Plain(layer);
        self
    }

    pub fn image(mut self, layer: Layer) -> Self {
        self.image = Visual::Plain(layer);
        self
    }

    pub fn stateful(mut self, slot: SlotKind, table: StateTable<Layer>) -> Self {
        *self.slot_mut(slot) = Visual::Stateful(table);
        self
    }

    pub fn child(mut self, child: Widget) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Widget>) -> Self {
        self.children = children;
        self
    }

    pub fn slot(&self, slot: SlotKind) -> &Visual {
        match slot {
            SlotKind::Background => &self.background,
            SlotKind::Foreground => &self.foreground,
            SlotKind::Image => &self.image,
        }
    }

    pub fn slot_mut(&mut self, slot: SlotKind) -> &mut Visual {
        match slot {
            SlotKind::Background => &mut self.background,
            SlotKind::Foreground => &mut self.foreground,
            SlotKind::Image => &mut self.image,
        }
    }
}
