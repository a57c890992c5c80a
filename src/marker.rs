//! Per-segment ship markers stamped onto a player's own ocean.
//!
//! A marker names the ship class, its orientation and which segment of the
//! ship occupies a cell. Each marker has a stable one-byte code; codes are
//! handed out class by class in [`MARKER_ORDER`], starting at
//! [`FIRST_MARKER_CODE`], horizontal segments before vertical ones.

use crate::coordinate::Orientation;
use crate::ship::ShipClass;

/// First code after the plain cell states.
pub const FIRST_MARKER_CODE: u8 = 6;

/// Order in which classes are assigned marker codes.
pub const MARKER_ORDER: [ShipClass; 5] = [
    ShipClass::PatrolBoat,
    ShipClass::Submarine,
    ShipClass::Destroyer,
    ShipClass::Battleship,
    ShipClass::Carrier,
];

/// One past the last assigned marker code.
pub const MARKER_CODE_END: u8 = {
    let mut code = FIRST_MARKER_CODE as usize;
    let mut i = 0;
    while i < MARKER_ORDER.len() {
        code += 2 * MARKER_ORDER[i].size();
        i += 1;
    }
    code as u8
};

/// Identifies which segment of which ship sits on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipMarker {
    class: ShipClass,
    orientation: Orientation,
    index: u8,
}

impl ShipMarker {
    /// Marker for segment `index` (zero-based) of a `class` ship.
    /// `None` if the class has no such segment.
    pub fn new(class: ShipClass, orientation: Orientation, index: usize) -> Option<Self> {
        if index >= class.size() {
            return None;
        }
        Some(Self {
            class,
            orientation,
            index: index as u8,
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Zero-based segment index.
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// One-based segment number, as shown to players.
    pub fn number(&self) -> usize {
        self.index as usize + 1
    }

    /// Stable code of this marker.
    pub fn code(&self) -> u8 {
        let size = self.class.size() as u8;
        let axis = match self.orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => size,
        };
        base_code(self.class) + axis + self.index
    }

    /// Decode a marker code.
    pub fn from_code(code: u8) -> Option<Self> {
        let mut base = FIRST_MARKER_CODE;
        for class in MARKER_ORDER {
            let size = class.size() as u8;
            if code < base + 2 * size {
                let offset = code.checked_sub(base)?;
                let (orientation, index) = if offset < size {
                    (Orientation::Horizontal, offset)
                } else {
                    (Orientation::Vertical, offset - size)
                };
                return Self::new(class, orientation, index as usize);
            }
            base += 2 * size;
        }
        None
    }
}

fn base_code(class: ShipClass) -> u8 {
    let mut base = FIRST_MARKER_CODE;
    for c in MARKER_ORDER {
        if c == class {
            break;
        }
        base += 2 * c.size() as u8;
    }
    base
}
