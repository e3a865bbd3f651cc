//! Widget-tree decoration on top of `focusring-core`.
//!
//! A d-pad driven UI (TV remotes, game controllers) wants every actionable
//! widget to light up when it holds focus. This crate walks an owned widget
//! tree and rewrites each widget's drawable slots so the focused (or, for
//! list items, selected) state renders a highlight frame stacked on top of
//! whatever the widget already shows:
//!
//! ```rust
//! use focusring_ui::{Caps, Color, HighlightStyle, Layer, State, StateSet, Widget, decorate_tree};
//!
//! let mut root = Widget::new(Caps::CONTAINER).child(
//!     Widget::new(Caps::CLICKABLE).background(Layer::Solid(Color::from_rgb(30, 30, 30))),
//! );
//!
//! decorate_tree(&mut root, &HighlightStyle::default()).unwrap();
//!
//! let button = &root.children[0];
//! assert!(button.focusable);
//! let focused = StateSet::of(&[State::FOCUSED]);
//! assert!(button.foreground.resolve(&focused).is_some());
//! ```
//!
//! Which slot gets the overlay is decided per widget capability
//! ([`Caps`]); the highlight visual itself is a caller-owned
//! [`HighlightStyle`], not a process-wide singleton. Rendering, focus
//! navigation, and event-loop wiring are out of scope — the tree here is a
//! plain value the host toolkit translates to and from.

pub mod decorate;
pub mod layer;
pub mod widget;

pub use decorate::*;
pub use layer::*;
pub use widget::*;

pub use focusring_core::{State, StateSet, StateTable, TableError};
