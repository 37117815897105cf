use serde::{Deserialize, Serialize};

use crate::core::PaneId;

impl PaneId {
    const fn bit(self) -> u8 {
        match self {
            Self::Detail => 1 << 0,
            Self::Overview => 1 << 1,
        }
    }
}

/// Panes that need a repaint on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaneInvalidation {
    bits: u8,
}

impl PaneInvalidation {
    const ALL_BITS: u8 = PaneId::Detail.bit() | PaneId::Overview.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    #[must_use]
    pub const fn contains(self, pane: PaneId) -> bool {
        (self.bits & pane.bit()) != 0
    }

    pub fn invalidate(&mut self, pane: PaneId) {
        self.bits |= pane.bit();
    }

    pub fn invalidate_if(&mut self, pane: PaneId, changed: bool) {
        if changed {
            self.invalidate(pane);
        }
    }

    pub fn invalidate_all(&mut self) {
        self.bits = Self::ALL_BITS;
    }

    /// Clears `pane` and reports whether it was pending.
    pub fn take(&mut self, pane: PaneId) -> bool {
        let pending = self.contains(pane);
        self.bits &= !pane.bit();
        pending
    }
}
