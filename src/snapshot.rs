//! Serializable navy state for saving and restoring games.

use alloc::vec::Vec;

use crate::common::{CellState, NavyError};
use crate::config::{FLEET, LEVELS, NUM_SHIPS};
use crate::coordinate::{Coordinate, Orientation};
use crate::mask::HitMask;
use crate::navy::Navy;
use crate::ocean::Ocean;
use crate::ship::{Placement, Ship, ShipClass};

/// Persisted form of one ship.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSnapshot {
    pub class: ShipClass,
    pub placement: Option<(Coordinate, Orientation)>,
    /// Raw hit mask; bit `i` is segment `i`.
    pub hits: u8,
}

/// Persisted form of a whole navy. Oceans are stored as cell codes in
/// level-major, row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct NavySnapshot {
    pub ocean_size: usize,
    pub levels: usize,
    pub ships: Vec<ShipSnapshot>,
    pub ocean: Vec<u8>,
    pub enemy_ocean: Vec<u8>,
    pub deployed: bool,
    pub destroyed: bool,
}

impl From<&Ship> for ShipSnapshot {
    fn from(ship: &Ship) -> Self {
        ShipSnapshot {
            class: ship.class(),
            placement: ship.placement().map(|p| (p.head, p.orientation)),
            hits: ship.hits().into_raw(),
        }
    }
}

impl From<&Navy> for NavySnapshot {
    fn from(navy: &Navy) -> Self {
        NavySnapshot {
            ocean_size: navy.ocean_size(),
            levels: navy.levels(),
            ships: navy.ships().iter().map(ShipSnapshot::from).collect(),
            ocean: encode_cells(navy.ocean()),
            enemy_ocean: encode_cells(navy.enemy_ocean()),
            deployed: navy.is_deployed(),
            destroyed: navy.fleet_destroyed(),
        }
    }
}

impl TryFrom<NavySnapshot> for Navy {
    type Error = NavyError;

    fn try_from(snapshot: NavySnapshot) -> Result<Self, NavyError> {
        if snapshot.levels != LEVELS {
            return Err(NavyError::InvalidSnapshot("unsupported level count"));
        }
        if snapshot.ships.len() != NUM_SHIPS {
            return Err(NavyError::InvalidSnapshot("fleet size mismatch"));
        }
        let ocean = decode_cells(snapshot.ocean_size, snapshot.levels, &snapshot.ocean)?;
        let enemy_ocean =
            decode_cells(snapshot.ocean_size, snapshot.levels, &snapshot.enemy_ocean)?;
        let mut ships = FLEET.map(Ship::new);
        for (slot, (saved, expected)) in snapshot.ships.iter().zip(FLEET).enumerate() {
            if saved.class != expected {
                return Err(NavyError::InvalidSnapshot("fleet order mismatch"));
            }
            let placement = saved
                .placement
                .map(|(head, orientation)| Placement { head, orientation });
            if placement.is_some_and(|p| !ocean.contains(p.head)) {
                return Err(NavyError::InvalidSnapshot("ship lies outside the ocean"));
            }
            let ship = Ship::restore(saved.class, placement, HitMask::from_raw(saved.hits))?;
            if !ship.segments().iter().all(|&c| ocean.contains(c)) {
                return Err(NavyError::InvalidSnapshot("ship lies outside the ocean"));
            }
            ships[slot] = ship;
        }
        if snapshot.deployed && !ships.iter().all(Ship::is_placed) {
            return Err(NavyError::InvalidSnapshot("deployed fleet has an unplaced ship"));
        }
        let damage_recorded = ships.iter().flat_map(Ship::damaged_segments).all(|coord| {
            matches!(
                ocean.get(coord),
                Ok(CellState::Hit | CellState::DestroyedShip)
            )
        });
        if !damage_recorded {
            return Err(NavyError::InvalidSnapshot("ship damage missing from the ocean"));
        }
        if snapshot.destroyed && !ships.iter().all(Ship::is_destroyed) {
            return Err(NavyError::InvalidSnapshot("fleet marked destroyed with ships afloat"));
        }
        let navy = Navy::from_parts(
            ships,
            ocean,
            enemy_ocean,
            snapshot.deployed,
            snapshot.destroyed,
        );
        if navy.is_deployed() && !navy.can_deploy_all() {
            return Err(NavyError::InvalidSnapshot("deployed ships overlap"));
        }
        Ok(navy)
    }
}

fn encode_cells(ocean: &Ocean) -> Vec<u8> {
    ocean.cells().iter().map(CellState::code).collect()
}

fn decode_cells(size: usize, levels: usize, codes: &[u8]) -> Result<Ocean, NavyError> {
    let cells = codes
        .iter()
        .map(|&code| {
            CellState::from_code(code).ok_or(NavyError::InvalidSnapshot("unknown cell code"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ocean::from_cells(size, levels, cells)
}

#[cfg(feature = "std")]
impl NavySnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`NavySnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
