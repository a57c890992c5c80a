use crate::ship::ShipClass;

pub const DEFAULT_OCEAN_SIZE: usize = 10;
pub const LEVELS: usize = 2;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::Carrier,
    ShipClass::Battleship,
    ShipClass::Submarine,
    ShipClass::Destroyer,
    ShipClass::PatrolBoat,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random placement gives up after this many rejected draws per ship.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "NAVY_LOG";

/// Look up a fleet class by its display name.
pub fn ship_class_by_name(name: &str) -> Option<ShipClass> {
    FLEET.iter().copied().find(|class| class.name() == name)
}
