//! Ship classes, placement geometry and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::NavyError;
use crate::coordinate::{Coordinate, Orientation};
use crate::mask::HitMask;

/// Class of a fleet member: name and segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Carrier,
    Battleship,
    Submarine,
    Destroyer,
    PatrolBoat,
}

impl ShipClass {
    /// Ship's display name.
    pub const fn name(&self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::PatrolBoat => "PatrolBoat",
        }
    }

    /// Number of segments.
    pub const fn size(&self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Submarine | ShipClass::Destroyer => 3,
            ShipClass::PatrolBoat => 2,
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Where a ship sits: the head segment and the axis it extends along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub head: Coordinate,
    pub orientation: Orientation,
}

/// A fleet member. Hits are tracked per segment index.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    placement: Option<Placement>,
    segments: Vec<Coordinate>,
    hits: HitMask,
}

impl Ship {
    /// An unplaced ship of `class`.
    pub fn new(class: ShipClass) -> Self {
        Self {
            class,
            placement: None,
            segments: Vec::new(),
            hits: HitMask::new(),
        }
    }

    /// Rebuild a ship from persisted parts. Hits beyond the ship's size, or
    /// hits on an unplaced ship, are rejected.
    pub fn restore(
        class: ShipClass,
        placement: Option<Placement>,
        hits: HitMask,
    ) -> Result<Self, NavyError> {
        if hits.exceeds(class.size()) {
            return Err(NavyError::InvalidSnapshot("hit mask exceeds ship size"));
        }
        if placement.is_none() && !hits.is_empty() {
            return Err(NavyError::InvalidSnapshot("hits recorded on unplaced ship"));
        }
        let mut ship = Ship::new(class);
        if let Some(p) = placement {
            ship.deploy(p.head, p.orientation);
        }
        ship.hits = hits;
        Ok(ship)
    }

    /// Record the head and orientation and lay out the segments.
    /// Bounds are the board's concern; this is geometry only.
    pub fn deploy(&mut self, head: Coordinate, orientation: Orientation) {
        self.placement = Some(Placement { head, orientation });
        self.segments = orientation.segments(head, self.size()).collect();
    }

    /// Recompute segments from the recorded placement.
    /// Returns `false` when the ship has not been placed yet.
    pub fn finalize(&mut self) -> bool {
        match self.placement {
            Some(p) => {
                self.segments = p.orientation.segments(p.head, self.size()).collect();
                true
            }
            None => false,
        }
    }

    /// Mark the segment at `coord` as hit. Returns `true` if the ship
    /// occupies `coord`, whether or not that segment was already hit.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        match self.segments.iter().position(|&s| s == coord) {
            Some(idx) => {
                // idx < size <= HitMask::CAPACITY
                let _ = self.hits.insert(idx);
                true
            }
            None => false,
        }
    }

    /// Segments that have been hit, head first.
    pub fn damaged_segments(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.segments
            .iter()
            .enumerate()
            .filter(|&(idx, _)| self.hits.contains(idx))
            .map(|(_, &coord)| coord)
    }

    /// Whether any segment sits on `coord`.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.segments.contains(&coord)
    }

    /// All segments hit. Never reverts: hits are never cleared.
    pub fn is_destroyed(&self) -> bool {
        self.is_placed() && self.hits.covers(self.size())
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn size(&self) -> usize {
        self.class.size()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn head(&self) -> Option<Coordinate> {
        self.placement.map(|p| p.head)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.placement.map(|p| p.orientation)
    }

    /// Segment coordinates, head first. Empty until placed.
    pub fn segments(&self) -> &[Coordinate] {
        &self.segments
    }

    pub fn hits(&self) -> HitMask {
        self.hits
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ class: {}, placement: {:?}, hits: {}/{} }}",
            self.class,
            self.placement,
            self.hit_count(),
            self.size(),
        )
    }
}
