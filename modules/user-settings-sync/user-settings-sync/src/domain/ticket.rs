//! Generation guard for late save resolutions.
//!
//! Every save captures a [`SaveTicket`] from the service's [`SaveGeneration`].
//! Bumping the generation invalidates all tickets issued before it, so a
//! resolution that arrives after its consumer detached can be recognized
//! and dropped.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct SaveGeneration(AtomicU64);

/// Proof that a save was started in a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket(u64);

impl SaveGeneration {
    #[must_use]
    pub fn issue(&self) -> SaveTicket {
        SaveTicket(self.0.load(Ordering::Acquire))
    }

    /// Invalidates every ticket issued so far.
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::AcqRel);
    }

    #[must_use]
    pub fn is_current(&self, ticket: SaveTicket) -> bool {
        self.0.load(Ordering::Acquire) == ticket.0
    }
}
