//! Load sequencing for pages that fan out several requests.
//!
//! Every load takes a [`LoadTicket`]; when the joined results arrive they are
//! applied only if no newer load has started since. The newest *issued* load
//! wins regardless of the order in which responses resolve.

use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
pub struct LoadSequence {
    latest: AtomicU64,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every earlier ticket
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Ticket check for a page-owned sequence.
///
/// Returns `false` once the owning page is gone, so late responses are
/// dropped instead of written into disposed signals.
pub fn still_current(seq: StoredValue<LoadSequence>, ticket: LoadTicket) -> bool {
    seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false)
}
