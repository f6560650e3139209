//! Strongly-typed identifiers.
//!
//! Harbor and sea ids are 1-based: the value 0 is never handed out, so
//! "no harbor"/"no sea" is represented as `Option::None` at the API level.

use std::fmt;

/// Maximum number of players a world supports.
pub const MAX_PLAYERS: usize = 8;

/// Identifies a player (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player's slot in per-player tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for PlayerId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Identifies a sea (connected water component), starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeaId(pub u16);

impl SeaId {
    /// Position of this sea in a 0-based table.
    pub fn slot(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }

    /// The id for the sea stored at `slot` in a 0-based table, or `None`
    /// once the table outgrows the id range.
    pub fn from_slot(slot: usize) -> Option<Self> {
        slot.checked_add(1).and_then(|id| u16::try_from(id).ok()).map(Self)
    }
}

impl fmt::Display for SeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for SeaId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Identifies a registered harbor point, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HarborId(pub u32);

impl HarborId {
    /// Position of this harbor in a 0-based table.
    pub fn slot(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }

    /// The id for the harbor stored at `slot` in a 0-based table.
    pub fn from_slot(slot: usize) -> Self {
        Self(slot as u32 + 1)
    }
}

impl fmt::Display for HarborId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HarborId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a soldier stationed in a building.
///
/// Used as the stable tie-breaker when ordering sea-attack candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoldierId(pub u32);

impl fmt::Display for SoldierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SoldierId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_ids_round_trip_through_slots() {
        assert_eq!(HarborId::from_slot(0), HarborId(1));
        assert_eq!(HarborId(3).slot(), 2);
        assert_eq!(SeaId::from_slot(4), Some(SeaId(5)));
        assert_eq!(SeaId(1).slot(), 0);
    }

    #[test]
    fn zero_ids_map_out_of_any_table() {
        // Slot of the reserved id 0 wraps and never indexes a real table.
        assert_eq!(HarborId(0).slot(), usize::MAX);
        assert_eq!(SeaId(0).slot(), usize::MAX);
    }

    #[test]
    fn sea_ids_stop_at_the_id_range() {
        assert_eq!(SeaId::from_slot(65534), Some(SeaId(u16::MAX)));
        assert_eq!(SeaId::from_slot(65535), None);
        assert_eq!(SeaId::from_slot(usize::MAX), None);
    }

    #[test]
    fn display_prints_raw_value() {
        assert_eq!(PlayerId(2).to_string(), "2");
        assert_eq!(SoldierId(17).to_string(), "17");
    }
}
