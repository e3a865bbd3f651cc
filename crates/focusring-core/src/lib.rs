//! # State tables and the overlay transform
//!
//! A widget's drawable is often not one layer but a small dispatch table:
//! an ordered list of (state set, layer) rules where the first rule whose
//! states are all active wins. `focusring-core` owns that table as a plain
//! value type and provides the two transforms the highlighter needs:
//!
//! - [`StateTable::add_state`] — synthesize a new table that renders an
//!   overlay (a highlight frame) whenever a target state is active, without
//!   disturbing rules that already handle it.
//! - [`StateTable::remove_state`] — strip every rule mentioning a state.
//!
//! Both are pure: they borrow the input and return a fresh table, so tables
//! can be shared and transformed from multiple threads without locking.
//!
//! ```rust
//! use focusring_core::{State, StateSet, StateTable};
//!
//! let table = StateTable::from_entries([
//!     (StateSet::of(&[State::SELECTED]), "selected".to_string()),
//!     (StateSet::new(), "base".to_string()),
//! ])
//! .unwrap();
//!
//! let lit = table
//!     .add_state(State::FOCUSED, false, |base| match base {
//!         Some(layer) => Ok(format!("{layer}+frame")),
//!         None => Ok("frame".to_string()),
//!     })
//!     .unwrap();
//!
//! let active = StateSet::of(&[State::FOCUSED]);
//! assert_eq!(lit.lookup(&active), Some(&"base+frame".to_string()));
//! ```
//!
//! The layer type is opaque to this crate; `focusring-ui` plugs in a concrete
//! renderable and decides which widget slot a table lives in.

pub mod error;
pub mod state;
pub mod table;
pub mod tests;

pub use error::*;
pub use state::*;
pub use table::*;
