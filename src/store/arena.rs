//! # Fixed-Capacity Record Arena
//!
//! Preallocated slots for one record family, reused across the event loop.
//! All slots are constructed once; `begin_event` resets the slots used by
//! the previous event in place, so a run performs no per-event allocation.

use crate::error::{PecError, Result};
use crate::objects::Resettable;

/// Arena of reusable record slots
///
/// `begin_event` must be called at the start of every event, before any
/// slot is filled. The arena resets only the slots the previous event used;
/// untouched slots are still in their default state from construction or an
/// earlier reset.
#[derive(Debug)]
pub struct SlotArena<T> {
    /// Record slots, allocated once
    slots: Box<[T]>,

    /// Number of slots filled in the current event
    len: usize,

    /// Collection name used in capacity errors
    name: &'static str,
}

impl<T: Resettable + Default> SlotArena<T> {
    /// Allocate an arena with the given capacity
    pub fn new(name: &'static str, capacity: usize) -> Self {
        let slots: Box<[T]> = (0..capacity).map(|_| T::default()).collect();
        Self {
            slots,
            len: 0,
            name,
        }
    }

    /// Start a new event: reset the slots used by the previous one
    pub fn begin_event(&mut self) {
        for slot in &mut self.slots[..self.len] {
            slot.reset();
        }
        self.len = 0;
    }

    /// Claim the next slot for filling
    ///
    /// The returned record is in its default state. Fails when the event
    /// holds more objects than the arena was sized for.
    pub fn push(&mut self) -> Result<&mut T> {
        if self.len == self.slots.len() {
            return Err(PecError::capacity(self.name, self.slots.len()));
        }

        let slot = &mut self.slots[self.len];
        self.len += 1;
        Ok(slot)
    }

    /// Records filled in the current event
    pub fn filled(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// Number of records filled in the current event
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no record has been filled in the current event
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
