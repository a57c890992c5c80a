//! Common types: cell states and navy errors.

use core::fmt;

use crate::coordinate::Coordinate;
use crate::marker::ShipMarker;
use crate::mask::MaskError;

/// Contents of one ocean cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Nothing learned about this cell.
    #[default]
    Unknown,
    /// A ship segment was struck.
    Hit,
    /// The shot landed in open water.
    Miss,
    /// Occupied by a ship whose class is not recorded.
    Ship,
    /// Segment of a ship that has been sunk.
    DestroyedShip,
    /// Open water, not yet attacked.
    Water,
    /// Intact segment of a known ship.
    Segment(ShipMarker),
}

impl CellState {
    /// Whether an intact ship segment sits here.
    pub fn is_occupied(&self) -> bool {
        matches!(self, CellState::Ship | CellState::Segment(_))
    }

    /// Whether the cell has already been attacked.
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            CellState::Hit | CellState::Miss | CellState::DestroyedShip
        )
    }

    /// Stable one-byte code used by snapshots.
    pub fn code(&self) -> u8 {
        match self {
            CellState::Unknown => 0,
            CellState::Hit => 1,
            CellState::Miss => 2,
            CellState::Ship => 3,
            CellState::DestroyedShip => 4,
            CellState::Water => 5,
            CellState::Segment(marker) => marker.code(),
        }
    }

    /// Decode a cell code; `None` for unassigned codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellState::Unknown),
            1 => Some(CellState::Hit),
            2 => Some(CellState::Miss),
            3 => Some(CellState::Ship),
            4 => Some(CellState::DestroyedShip),
            5 => Some(CellState::Water),
            _ => ShipMarker::from_code(code).map(CellState::Segment),
        }
    }

    /// Single character used by the text form of an ocean.
    pub fn symbol(&self) -> char {
        match self {
            CellState::Unknown => '?',
            CellState::Hit => 'x',
            CellState::Miss => 'o',
            CellState::Ship => 'S',
            CellState::DestroyedShip => '#',
            CellState::Water => '~',
            CellState::Segment(marker) => marker.class().name().chars().next().unwrap_or('S'),
        }
    }
}

/// Errors returned by navy operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavyError {
    /// Coordinate lies outside the ocean.
    OutOfBounds { coordinate: Coordinate },
    /// Attack received before the fleet was deployed.
    NotDeployed,
    /// The cell was already attacked.
    AlreadyAttacked { coordinate: Coordinate },
    /// A marker cell with no ship underneath.
    UnknownShipHit { coordinate: Coordinate },
    /// Random placement gave up.
    UnableToPlaceShip,
    /// The two navies of an engagement have different oceans.
    MismatchedOceans,
    /// A fleet is already sunk.
    EngagementOver,
    /// Snapshot failed validation.
    InvalidSnapshot(&'static str),
    /// Underlying segment mask error.
    SegmentMask(MaskError),
}

impl From<MaskError> for NavyError {
    fn from(err: MaskError) -> Self {
        NavyError::SegmentMask(err)
    }
}

impl fmt::Display for NavyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavyError::OutOfBounds { coordinate } => {
                write!(f, "Coordinate {} is outside the ocean", coordinate)
            }
            NavyError::NotDeployed => write!(f, "Fleet has not been deployed"),
            NavyError::AlreadyAttacked { coordinate } => {
                write!(f, "Cell {} was already attacked", coordinate)
            }
            NavyError::UnknownShipHit { coordinate } => {
                write!(f, "No ship occupies marked cell {}", coordinate)
            }
            NavyError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            NavyError::MismatchedOceans => write!(f, "Navies use different ocean sizes"),
            NavyError::EngagementOver => write!(f, "Engagement is already decided"),
            NavyError::InvalidSnapshot(reason) => write!(f, "Invalid snapshot: {}", reason),
            NavyError::SegmentMask(e) => write!(f, "Segment mask error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NavyError {}
