//! Persistent per-element state.
//!
//! Components that must remember something between frames (a slider's
//! value, whether an accordion is open, a pressed flag) keep it in a
//! [`State`] record keyed by element id. Records live in a slice the caller
//! allocates once; the registry only ever appends into it and never frees,
//! moves or evicts a record.

use log::{trace, warn};
use rustc_hash::FxHashMap;

/// One persistent record. `flags` and `value` mean whatever the owning
/// component decides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct State {
    pub id: u32,
    pub flags: u32,
    pub value: f32,
}

impl State {
    #[inline]
    pub fn has_flags(&self, mask: u32) -> bool {
        self.flags & mask == mask
    }

    #[inline]
    pub fn set_flags(&mut self, mask: u32, on: bool) {
        if on {
            self.flags |= mask;
        } else {
            self.flags &= !mask;
        }
    }

    /// Flips `mask` and returns whether all of its bits are now set.
    #[inline]
    pub fn toggle_flags(&mut self, mask: u32) -> bool {
        self.flags ^= mask;
        self.has_flags(mask)
    }
}

/// Common surface of the registries, so components can be written once.
pub trait StateStore {
    fn get(&self, id: u32) -> Option<&State>;
    fn get_mut(&mut self, id: u32) -> Option<&mut State>;
    /// Returns the record for `id`, creating a zeroed one if there is room.
    /// `None` means the store is full; nothing was modified.
    fn get_or_create(&mut self, id: u32) -> Option<&mut State>;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Linear-scan registry over a borrowed slice.
///
/// Lookups walk the occupied prefix, which is the right trade for the tens
/// of stateful elements a typical frame has.
#[derive(Debug)]
pub struct StateRegistry<'a> {
    slots: &'a mut [State],
    count: usize,
    warned_full: bool,
}

impl<'a> StateRegistry<'a> {
    /// Binds to `slots` and zeroes every record in it, whatever it held before.
    pub fn new(slots: &'a mut [State]) -> Self {
        slots.fill(State::default());
        Self {
            slots,
            count: 0,
            warned_full: false,
        }
    }

    #[inline]
    fn position(&self, id: u32) -> Option<usize> {
        self.slots[..self.count].iter().position(|s| s.id == id)
    }

    /// Occupied records, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.slots[..self.count].iter()
    }

    /// Appends a zeroed record for `id`. Caller has checked that `id` is absent.
    fn push(&mut self, id: u32) -> Option<usize> {
        if self.count >= self.slots.len() {
            if !self.warned_full {
                self.warned_full = true;
                warn!(
                    "state registry full ({} slots), element {:#010x} gets no persistent state",
                    self.slots.len(),
                    id
                );
            } else {
                trace!("state registry full, dropping element {:#010x}", id);
            }
            return None;
        }
        let index = self.count;
        self.slots[index] = State {
            id,
            flags: 0,
            value: 0.0,
        };
        self.count += 1;
        Some(index)
    }
}

impl StateStore for StateRegistry<'_> {
    fn get(&self, id: u32) -> Option<&State> {
        self.position(id).map(|i| &self.slots[i])
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut State> {
        self.position(id).map(|i| &mut self.slots[i])
    }

    fn get_or_create(&mut self, id: u32) -> Option<&mut State> {
        let index = match self.position(id) {
            Some(i) => i,
            None => self.push(id)?,
        };
        Some(&mut self.slots[index])
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Hash-indexed registry for element counts where a linear scan stops
/// being cheap. Same contract as [`StateRegistry`]: idempotent
/// get-or-create, `None` once full, no eviction.
///
/// The index is sized to the slice up front, so it does not grow while
/// frames run.
#[derive(Debug)]
pub struct IndexedRegistry<'a> {
    inner: StateRegistry<'a>,
    index: FxHashMap<u32, usize>,
}

impl<'a> IndexedRegistry<'a> {
    pub fn new(slots: &'a mut [State]) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(slots.len());
        Self {
            inner: StateRegistry::new(slots),
            index,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.inner.iter()
    }
}

impl StateStore for IndexedRegistry<'_> {
    fn get(&self, id: u32) -> Option<&State> {
        self.index.get(&id).map(|&i| &self.inner.slots[i])
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut State> {
        let i = *self.index.get(&id)?;
        Some(&mut self.inner.slots[i])
    }

    fn get_or_create(&mut self, id: u32) -> Option<&mut State> {
        let found = self.index.get(&id).copied();
        let index = match found {
            Some(i) => i,
            None => {
                let i = self.inner.push(id)?;
                self.index.insert(id, i);
                i
            }
        };
        Some(&mut self.inner.slots[index])
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}
