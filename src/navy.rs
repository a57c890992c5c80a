//! One player's fleet and both of their oceans.

use log::{debug, info};
use rand::Rng;

use crate::common::{CellState, NavyError};
use crate::config::{FLEET, LEVELS, NUM_SHIPS, PLACEMENT_ATTEMPTS};
use crate::coordinate::{Coordinate, Orientation};
use crate::marker::ShipMarker;
use crate::ocean::Ocean;
use crate::ship::{Ship, ShipClass};

/// A player's board: the fleet, the ocean it sails on, and what the player
/// has learned about the enemy's ocean.
#[derive(Clone, PartialEq, Eq)]
pub struct Navy {
    ships: [Ship; NUM_SHIPS],
    ocean: Ocean,
    enemy_ocean: Ocean,
    deployed: bool,
    destroyed: bool,
}

impl Navy {
    /// A navy with the standard fleet unplaced on an `ocean_size` square ocean.
    pub fn new(ocean_size: usize) -> Self {
        Self {
            ships: FLEET.map(Ship::new),
            ocean: Ocean::filled(ocean_size, LEVELS, CellState::Water),
            enemy_ocean: Ocean::filled(ocean_size, LEVELS, CellState::Unknown),
            deployed: false,
            destroyed: false,
        }
    }

    /// Reassemble a navy from validated parts.
    pub(crate) fn from_parts(
        ships: [Ship; NUM_SHIPS],
        ocean: Ocean,
        enemy_ocean: Ocean,
        deployed: bool,
        destroyed: bool,
    ) -> Self {
        Self {
            ships,
            ocean,
            enemy_ocean,
            deployed,
            destroyed,
        }
    }

    pub fn ocean_size(&self) -> usize {
        self.ocean.size()
    }

    pub fn levels(&self) -> usize {
        self.ocean.levels()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The fleet member of `class`.
    pub fn ship(&self, class: ShipClass) -> &Ship {
        &self.ships[Self::slot(class)]
    }

    /// Position of `class` in [`FLEET`].
    fn slot(class: ShipClass) -> usize {
        match class {
            ShipClass::Carrier => 0,
            ShipClass::Battleship => 1,
            ShipClass::Submarine => 2,
            ShipClass::Destroyer => 3,
            ShipClass::PatrolBoat => 4,
        }
    }

    /// Ships not yet destroyed.
    pub fn ships_afloat(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|s| !s.is_destroyed())
    }

    /// This player's own ocean.
    pub fn ocean(&self) -> &Ocean {
        &self.ocean
    }

    /// What this player knows of the opponent's ocean.
    pub fn enemy_ocean(&self) -> &Ocean {
        &self.enemy_ocean
    }

    pub fn is_deployed(&self) -> bool {
        self.deployed
    }

    /// Cached fleet-destroyed flag, as of the last re-evaluation.
    pub fn fleet_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Bounds check for a `size`-segment ship headed at `head`.
    ///
    /// The extent test is strict: a horizontal ship needs
    /// `head.col < ocean_size - size`, so a ship can never touch the far
    /// column (or row, when vertical). Existing boards depend on this, so it
    /// is kept as is.
    pub fn can_fit(&self, head: Coordinate, orientation: Orientation, size: usize) -> bool {
        let ocean_size = self.ocean_size();
        if head.level() >= self.levels() {
            return false;
        }
        if head.row() >= ocean_size || head.col() >= ocean_size {
            return false;
        }
        let Some(limit) = ocean_size.checked_sub(size) else {
            return false;
        };
        match orientation {
            Orientation::Horizontal => head.col() < limit,
            Orientation::Vertical => head.row() < limit,
        }
    }

    /// Put the `class` ship at `head` if it fits on the ocean. Overlap with
    /// other ships is only checked by [`Navy::finalize_deployment`].
    /// Returns `false` and leaves the ship alone if it does not fit, or if
    /// the fleet is already deployed.
    pub fn place_ship(
        &mut self,
        class: ShipClass,
        head: Coordinate,
        orientation: Orientation,
    ) -> bool {
        if self.deployed {
            debug!("refusing to move {} after deployment", class);
            return false;
        }
        if !self.can_fit(head, orientation, class.size()) {
            debug!("{} does not fit at {} {:?}", class, head, orientation);
            return false;
        }
        self.ships[Self::slot(class)].deploy(head, orientation);
        debug!("placed {} at {} {:?}", class, head, orientation);
        true
    }

    /// `true` when no two ships share a coordinate.
    pub fn can_deploy_all(&self) -> bool {
        for (i, ship) in self.ships.iter().enumerate() {
            for other in &self.ships[i + 1..] {
                if ship.segments().iter().any(|&s| other.occupies(s)) {
                    return false;
                }
            }
        }
        true
    }

    /// Lock the fleet and stamp ship markers onto the own ocean.
    ///
    /// Returns `false`, leaving the ocean untouched, if a ship is unplaced
    /// or two ships overlap. Once deployed, further calls return `true`.
    pub fn finalize_deployment(&mut self) -> bool {
        if self.deployed {
            return true;
        }
        let mut all_placed = true;
        for ship in self.ships.iter_mut() {
            all_placed &= ship.finalize();
        }
        if !all_placed {
            debug!("deployment refused: fleet not fully placed");
            return false;
        }
        if !self.can_deploy_all() {
            debug!("deployment refused: ships overlap");
            return false;
        }
        for ship in &self.ships {
            let Some(orientation) = ship.orientation() else {
                continue;
            };
            for (idx, &coord) in ship.segments().iter().enumerate() {
                let state = ShipMarker::new(ship.class(), orientation, idx)
                    .map_or(CellState::Ship, CellState::Segment);
                // can_fit already guaranteed every segment is in bounds
                let _ = self.ocean.set(coord, state);
            }
        }
        self.deployed = true;
        debug!("fleet deployed");
        true
    }

    /// Resolve an attack against this navy's own ocean.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<CellState, NavyError> {
        let current = self.ocean.get(coord)?;
        if !self.deployed {
            return Err(NavyError::NotDeployed);
        }
        if current.is_resolved() {
            return Err(NavyError::AlreadyAttacked { coordinate: coord });
        }
        let result = if current.is_occupied() {
            self.ship_hit(coord)?
        } else if current == CellState::Water {
            CellState::Miss
        } else {
            // only Unknown is left; an own ocean never holds it once deployed
            current
        };
        self.ocean.set(coord, result)?;
        debug!("attack at {} -> {:?}", coord, result);
        Ok(result)
    }

    /// Damage whichever ship occupies `coord`, sinking it if that was its
    /// last intact segment.
    fn ship_hit(&mut self, coord: Coordinate) -> Result<CellState, NavyError> {
        let ship = self
            .ships
            .iter_mut()
            .find(|s| s.occupies(coord))
            .ok_or(NavyError::UnknownShipHit { coordinate: coord })?;
        ship.register_hit(coord);
        if !ship.is_destroyed() {
            return Ok(CellState::Hit);
        }
        info!("{} destroyed", ship.class());
        for &segment in ship.segments() {
            self.ocean.set(segment, CellState::DestroyedShip)?;
        }
        self.is_fleet_destroyed();
        Ok(CellState::DestroyedShip)
    }

    /// Record the outcome of a shot this player fired at the opponent.
    pub fn record_outgoing_attack(
        &mut self,
        coord: Coordinate,
        result: CellState,
    ) -> Result<(), NavyError> {
        self.enemy_ocean.set(coord, result)
    }

    /// Re-evaluate whether every ship is destroyed. Once `true`, the answer
    /// is cached and never reverts.
    pub fn is_fleet_destroyed(&mut self) -> bool {
        if !self.destroyed && self.ships.iter().all(Ship::is_destroyed) {
            info!("fleet destroyed");
            self.destroyed = true;
        }
        self.destroyed
    }

    /// A random head and orientation for `class` that fits and does not
    /// overlap any other placed ship.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<(Coordinate, Orientation), NavyError> {
        let size = class.size();
        let ocean_size = self.ocean_size();
        // the strict extent check needs at least one spare cell
        if ocean_size <= size || self.levels() == 0 {
            return Err(NavyError::UnableToPlaceShip);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (ocean_size, ocean_size - size),
                Orientation::Vertical => (ocean_size - size, ocean_size),
            };
            let head = Coordinate::new(
                rng.random_range(0..max_r),
                rng.random_range(0..max_c),
                rng.random_range(0..self.levels()),
            );
            if !self.can_fit(head, orientation, size) {
                continue;
            }
            let clear = orientation.segments(head, size).all(|coord| {
                self.ships
                    .iter()
                    .filter(|s| s.class() != class)
                    .all(|s| !s.occupies(coord))
            });
            if clear {
                return Ok((head, orientation));
            }
        }
        Err(NavyError::UnableToPlaceShip)
    }

    /// Place every ship at random and deploy the fleet. On error the navy
    /// is left exactly as it was.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), NavyError> {
        let mut staged = self.clone();
        for class in FLEET {
            let (head, orientation) = staged.random_placement(rng, class)?;
            if !staged.place_ship(class, head, orientation) {
                return Err(NavyError::UnableToPlaceShip);
            }
        }
        if !staged.finalize_deployment() {
            return Err(NavyError::UnableToPlaceShip);
        }
        *self = staged;
        Ok(())
    }
}

impl core::fmt::Debug for Navy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navy")
            .field("deployed", &self.deployed)
            .field("destroyed", &self.destroyed)
            .field("ships", &self.ships)
            .field("ocean", &self.ocean)
            .field("enemy_ocean", &self.enemy_ocean)
            .finish()
    }
}
