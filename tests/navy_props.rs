use std::collections::HashSet;

use navy::{CellState, Coordinate, Navy, NavySnapshot, Orientation, FLEET, LEVELS};
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZE: usize = 10;

fn orientation(horizontal: bool) -> Orientation {
    if horizontal {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Place each ship where asked; ships that do not fit stay unplaced.
fn placed_navy(heads: &[(usize, usize, usize, bool)]) -> Navy {
    let mut navy = Navy::new(SIZE);
    for (&class, &(r, c, l, h)) in FLEET.iter().zip(heads) {
        navy.place_ship(class, Coordinate::new(r, c, l), orientation(h));
    }
    navy
}

fn fleet_heads() -> impl Strategy<Value = Vec<(usize, usize, usize, bool)>> {
    prop::collection::vec((0..SIZE, 0..SIZE, 0..LEVELS, any::<bool>()), FLEET.len())
}

fn played_navy(seed: u64) -> Navy {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut navy = Navy::new(SIZE);
    navy.place_fleet_randomly(&mut rng).unwrap();
    let shots = rng.random_range(0..SIZE * SIZE);
    for _ in 0..shots {
        let coord = Coordinate::new(
            rng.random_range(0..SIZE),
            rng.random_range(0..SIZE),
            rng.random_range(0..LEVELS),
        );
        let _ = navy.receive_attack(coord);
        let guess = if rng.random_bool(0.3) {
            CellState::Hit
        } else {
            CellState::Miss
        };
        navy.record_outgoing_attack(coord, guess).unwrap();
    }
    navy
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fitting_ships_stay_in_bounds(
        row in 0..SIZE + 2,
        col in 0..SIZE + 2,
        level in 0..LEVELS + 1,
        horizontal in any::<bool>(),
        slot in 0..FLEET.len(),
    ) {
        let mut navy = Navy::new(SIZE);
        let class = FLEET[slot];
        let head = Coordinate::new(row, col, level);
        let fits = navy.can_fit(head, orientation(horizontal), class.size());
        prop_assert_eq!(navy.place_ship(class, head, orientation(horizontal)), fits);
        if fits {
            let ship = navy.ship(class);
            prop_assert_eq!(ship.segments().len(), class.size());
            for s in ship.segments() {
                prop_assert!(s.row() < SIZE && s.col() < SIZE && s.level() < LEVELS);
            }
        } else {
            prop_assert!(!navy.ship(class).is_placed());
        }
    }

    #[test]
    fn deployable_iff_no_shared_cell(heads in fleet_heads()) {
        let navy = placed_navy(&heads);
        let mut seen = HashSet::new();
        let mut shared = false;
        for ship in navy.ships() {
            for &s in ship.segments() {
                shared |= !seen.insert(s);
            }
        }
        prop_assert_eq!(navy.can_deploy_all(), !shared);
    }

    #[test]
    fn failed_deployment_leaves_ocean_alone(heads in fleet_heads()) {
        let mut navy = placed_navy(&heads);
        let before = navy.ocean().clone();
        if !navy.finalize_deployment() {
            prop_assert_eq!(navy.ocean(), &before);
            prop_assert!(!navy.is_deployed());
        } else {
            prop_assert!(navy.ocean().count(|s| s.is_occupied()) > 0);
        }
    }

    #[test]
    fn fleet_sinks_on_last_segment(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut navy = Navy::new(SIZE);
        navy.place_fleet_randomly(&mut rng).unwrap();
        let mut segments: Vec<Coordinate> = navy
            .ships()
            .iter()
            .flat_map(|s| s.segments().to_vec())
            .collect();
        segments.shuffle(&mut rng);
        let last = segments.pop().unwrap();
        for coord in segments {
            navy.receive_attack(coord).unwrap();
            prop_assert!(!navy.is_fleet_destroyed());
        }
        prop_assert_eq!(navy.receive_attack(last).unwrap(), CellState::DestroyedShip);
        prop_assert!(navy.is_fleet_destroyed());
        prop_assert!(navy.is_fleet_destroyed());
    }

    #[test]
    fn snapshot_roundtrip(seed in any::<u64>()) {
        let navy = played_navy(seed);
        let bytes = NavySnapshot::from(&navy).to_bytes().unwrap();
        let restored = Navy::try_from(NavySnapshot::from_bytes(&bytes).unwrap()).unwrap();
        prop_assert_eq!(restored.ocean(), navy.ocean());
        prop_assert_eq!(restored.enemy_ocean(), navy.enemy_ocean());
        for (a, b) in restored.ships().iter().zip(navy.ships()) {
            prop_assert_eq!(a.hits(), b.hits());
        }
        prop_assert_eq!(restored, navy);
    }
}
