//! Generation counter for the quasi-destructive unification discipline.
//!
//! A [`Generation`] tags every scratch write a unification episode makes.
//! A scratch field is only "live" when its stored generation equals the
//! unifier's *current* generation; once the counter advances past it, the
//! field is logically absent again without anyone having to clear it.

use std::sync::atomic::{AtomicU64, Ordering};

/// A single episode's generation tag.
///
/// `Generation(0)` is reserved as the "never written" sentinel: no real
/// episode is ever stamped with it, so a freshly allocated node's scratch
/// fields read as absent before any unification touches it.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Debug)]
pub struct Generation(u64);

impl Generation {
    /// Sentinel meaning "this node's scratch fields have never been
    /// written", distinct from any generation a real episode can produce.
    pub const NONE: Generation = Generation(0);

    /// The first real generation a counter produces.
    #[allow(dead_code)]
    pub const FIRST: Generation = Generation(1);
}

impl Default for Generation {
    fn default() -> Self {
        Generation::NONE
    }
}

/// Produces a strictly increasing sequence of [`Generation`] tags.
///
/// One counter belongs to exactly one unifier instance; nothing shares a
/// counter across instances. It is atomic only to support *sequential*
/// reuse of an instance across threads, never concurrent unification of
/// the same instance, which remains out of contract.
pub struct GenerationCounter(AtomicU64);

impl GenerationCounter {
    /// Create a counter whose first [`advance`](Self::advance) call
    /// returns [`Generation::FIRST`].
    pub fn new() -> Self {
        Self(AtomicU64::new(Generation::NONE.0))
    }

    /// Atomically return counter+1 and store it as the new counter value.
    pub fn advance(&self) -> Generation {
        let previous = self.0.fetch_add(1, Ordering::SeqCst);
        Generation(previous + 1)
    }
}

impl Default for GenerationCounter {
    fn default() -> Self {
        Self::new()
    }
}
