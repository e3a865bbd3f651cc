use thiserror::Error;

use crate::StateSet;

/// Failure produced by a caller-supplied overlay factory.
pub type OverlaySource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum TableError {
    /// Two entries with set-equal state sets would land in one table.
    /// Rejected at construction rather than repaired: a duplicate means the
    /// caller's resource model is already confused.
    #[error("duplicate state set {0:?} in state table")]
    DuplicateStateSet(StateSet),

    /// The overlay factory failed to compose a layer. The source table is
    /// left untouched; nothing partial is returned.
    #[error("overlay composition failed")]
    Overlay(#[source] OverlaySource),
}
