//! Slot reservation over the fixed 2×2 occupancy grid.

use super::types::{Availability, HalfPair, SizeClass, SlotSet, SLOT_COUNT};

/// Owns the workspace occupancy vector.
///
/// Occupancy is only changed through [`reserve`](Self::reserve) and
/// [`release`](Self::release). A refused reservation leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct SlotAllocator {
    occupied: [bool; SLOT_COUNT],
}

impl SlotAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve slots for a pane of the given size, or `None` if no
    /// placement is free.
    pub fn reserve(&mut self, size: SizeClass) -> Option<SlotSet> {
        let slots = match size {
            SizeClass::Quarter => self.first_free_slot().map(|slot| SlotSet::from_slots([slot])),
            SizeClass::Half => self.first_free_pair().map(HalfPair::slots),
            SizeClass::Full => self.is_empty().then(SlotSet::all),
        }?;

        for slot in slots.iter() {
            self.occupied[slot] = true;
        }
        Some(slots)
    }

    /// Mark every slot in `slots` free. Releasing free slots is a no-op.
    pub fn release(&mut self, slots: SlotSet) {
        for slot in slots.iter() {
            self.occupied[slot] = false;
        }
    }

    /// Current admission capacity, derived from occupancy on every call.
    pub fn availability(&self) -> Availability {
        Availability {
            can_quarter: self.first_free_slot().is_some(),
            can_half: self.first_free_pair().is_some(),
            can_full: self.is_empty(),
        }
    }

    pub fn is_free(&self, slot: usize) -> bool {
        slot < SLOT_COUNT && !self.occupied[slot]
    }

    /// The currently occupied slots.
    pub fn occupied(&self) -> SlotSet {
        SlotSet::from_slots((0..SLOT_COUNT).filter(|&slot| self.occupied[slot]))
    }

    pub fn free_count(&self) -> usize {
        self.occupied.iter().filter(|taken| !**taken).count()
    }

    fn is_empty(&self) -> bool {
        self.occupied.iter().all(|taken| !taken)
    }

    fn first_free_slot(&self) -> Option<usize> {
        (0..SLOT_COUNT).find(|&slot| self.is_free(slot))
    }

    fn first_free_pair(&self) -> Option<HalfPair> {
        let occupied = self.occupied();
        HalfPair::PRIORITY
            .into_iter()
            .find(|pair| !pair.slots().intersects(occupied))
    }
}
