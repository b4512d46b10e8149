//! Slot, size-class, and availability types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of fixed workspace slots (a 2×2 grid).
///
/// 0 = top-left, 1 = top-right, 2 = bottom-left, 3 = bottom-right.
pub const SLOT_COUNT: usize = 4;

/// Admission class for a new pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// Exactly one slot.
    Quarter,
    /// Two adjacent slots forming a row or column.
    Half,
    /// All four slots.
    Full,
}

impl SizeClass {
    pub fn slot_count(self) -> usize {
        match self {
            SizeClass::Quarter => 1,
            SizeClass::Half => 2,
            SizeClass::Full => SLOT_COUNT,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeClass::Quarter => "quarter",
            SizeClass::Half => "half",
            SizeClass::Full => "full",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown size class '{0}' (expected quarter, half, or full)")]
pub struct ParseSizeClassError(pub String);

impl FromStr for SizeClass {
    type Err = ParseSizeClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quarter" | "q" => Ok(SizeClass::Quarter),
            "half" | "h" => Ok(SizeClass::Half),
            "full" | "f" => Ok(SizeClass::Full),
            _ => Err(ParseSizeClassError(s.to_string())),
        }
    }
}

/// The four adjacent slot pairs a Half pane may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalfPair {
    LeftColumn,
    RightColumn,
    TopRow,
    BottomRow,
}

impl HalfPair {
    /// Pairs in reservation priority order.
    pub const PRIORITY: [HalfPair; 4] = [
        HalfPair::LeftColumn,
        HalfPair::RightColumn,
        HalfPair::TopRow,
        HalfPair::BottomRow,
    ];

    pub fn slots(self) -> SlotSet {
        match self {
            HalfPair::LeftColumn => SlotSet::from_slots([0, 2]),
            HalfPair::RightColumn => SlotSet::from_slots([1, 3]),
            HalfPair::TopRow => SlotSet::from_slots([0, 1]),
            HalfPair::BottomRow => SlotSet::from_slots([2, 3]),
        }
    }
}

/// A set of slot indices, stored as a 4-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", from = "Vec<usize>")]
pub struct SlotSet(u8);

impl SlotSet {
    const MASK: u8 = (1 << SLOT_COUNT) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    /// Build a set from slot indices. Indices outside the grid are ignored.
    pub fn from_slots(slots: impl IntoIterator<Item = usize>) -> Self {
        slots
            .into_iter()
            .filter(|&slot| slot < SLOT_COUNT)
            .fold(Self::empty(), |set, slot| Self(set.0 | (1 << slot)))
    }

    pub fn contains(&self, slot: usize) -> bool {
        slot < SLOT_COUNT && self.0 & (1 << slot) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(&self, other: SlotSet) -> SlotSet {
        SlotSet(self.0 | other.0)
    }

    pub fn intersects(&self, other: SlotSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Slot indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SLOT_COUNT).filter(move |&slot| self.contains(slot))
    }
}

impl fmt::Debug for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self.iter().map(|s| s.to_string()).collect();
        write!(f, "{{{}}}", slots.join(","))
    }
}

impl From<SlotSet> for Vec<usize> {
    fn from(set: SlotSet) -> Self {
        set.iter().collect()
    }
}

impl From<Vec<usize>> for SlotSet {
    fn from(slots: Vec<usize>) -> Self {
        SlotSet::from_slots(slots)
    }
}

/// Which size classes could be admitted right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub can_quarter: bool,
    pub can_half: bool,
    pub can_full: bool,
}

impl Availability {
    pub fn allows(&self, size: SizeClass) -> bool {
        match size {
            SizeClass::Quarter => self.can_quarter,
            SizeClass::Half => self.can_half,
            SizeClass::Full => self.can_full,
        }
    }
}
