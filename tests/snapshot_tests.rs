use navy::{
    CellState, Coordinate, Navy, NavyError, NavySnapshot, Orientation, ShipClass, FLEET,
};

fn c(row: usize, col: usize, level: usize) -> Coordinate {
    Coordinate::new(row, col, level)
}

fn played_navy() -> Navy {
    let mut navy = Navy::new(10);
    for (row, &class) in FLEET.iter().enumerate() {
        assert!(navy.place_ship(class, c(row * 2, 1, row % 2), Orientation::Horizontal));
    }
    assert!(navy.finalize_deployment());
    navy.receive_attack(c(0, 1, 0)).unwrap();
    navy.receive_attack(c(8, 1, 0)).unwrap();
    navy.receive_attack(c(8, 2, 0)).unwrap();
    navy.receive_attack(c(9, 9, 1)).unwrap();
    navy.record_outgoing_attack(c(5, 5, 0), CellState::Hit).unwrap();
    navy.record_outgoing_attack(c(5, 6, 0), CellState::DestroyedShip).unwrap();
    navy
}

#[test]
fn test_snapshot_roundtrip_bytes() {
    let navy = played_navy();
    let snapshot = NavySnapshot::from(&navy);
    assert_eq!(snapshot.ocean_size, 10);
    assert_eq!(snapshot.ships.len(), FLEET.len());
    assert_eq!(snapshot.ships[4].hits, 0b11);

    let bytes = snapshot.to_bytes().unwrap();
    let decoded = NavySnapshot::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, snapshot);

    let restored = Navy::try_from(decoded).unwrap();
    assert_eq!(restored.ocean(), navy.ocean());
    assert_eq!(restored.enemy_ocean(), navy.enemy_ocean());
    assert!(restored.is_deployed());
    assert!(restored.ship(ShipClass::PatrolBoat).is_destroyed());
    assert_eq!(restored.ship(ShipClass::Carrier).hit_count(), 1);
    assert_eq!(restored, navy);
}

#[test]
fn test_restored_navy_keeps_playing() {
    let navy = played_navy();
    let mut restored = Navy::try_from(NavySnapshot::from(&navy)).unwrap();
    assert!(matches!(
        restored.receive_attack(c(0, 1, 0)),
        Err(NavyError::AlreadyAttacked { .. })
    ));
    assert_eq!(restored.receive_attack(c(0, 2, 0)).unwrap(), CellState::Hit);
    assert!(!restored.place_ship(ShipClass::Carrier, c(3, 0, 1), Orientation::Vertical));
}

#[test]
fn test_fresh_navy_roundtrip() {
    let navy = Navy::new(6);
    let restored = Navy::try_from(NavySnapshot::from(&navy)).unwrap();
    assert_eq!(restored, navy);
    assert!(restored.ships().iter().all(|s| !s.is_placed()));
}

#[test]
fn test_invalid_snapshots_are_rejected() {
    let good = NavySnapshot::from(&played_navy());

    let mut s = good.clone();
    s.levels = 3;
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("unsupported level count")
    );

    let mut s = good.clone();
    s.ocean[0] = 200;
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("unknown cell code")
    );

    let mut s = good.clone();
    s.enemy_ocean.pop();
    assert!(matches!(
        Navy::try_from(s),
        Err(NavyError::InvalidSnapshot(_))
    ));

    let mut s = good.clone();
    s.ships.swap(0, 1);
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("fleet order mismatch")
    );

    let mut s = good.clone();
    s.ships.pop();
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("fleet size mismatch")
    );

    let mut s = good.clone();
    s.ships[4].hits = 0b111;
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("hit mask exceeds ship size")
    );

    let mut s = good.clone();
    s.ships[0].placement = Some((c(10, 0, 0), Orientation::Horizontal));
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("ship lies outside the ocean")
    );
    let mut s = good.clone();
    s.ships[3].placement = None;
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("deployed fleet has an unplaced ship")
    );

    // Battleship moved onto the Carrier
    let mut s = good.clone();
    s.ships[1].placement = s.ships[0].placement;
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("deployed ships overlap")
    );

    let mut s = good.clone();
    s.destroyed = true;
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("fleet marked destroyed with ships afloat")
    );

    // Submarine head marked hit while its cell still shows the segment
    let mut s = good.clone();
    s.ships[2].hits = 0b1;
    assert_eq!(
        Navy::try_from(s).unwrap_err(),
        NavyError::InvalidSnapshot("ship damage missing from the ocean")
    );
}

#[test]
fn test_undeployed_overlap_is_restorable() {
    let mut navy = Navy::new(10);
    assert!(navy.place_ship(ShipClass::Carrier, c(0, 0, 0), Orientation::Horizontal));
    assert!(navy.place_ship(ShipClass::Battleship, c(0, 0, 0), Orientation::Horizontal));
    let restored = Navy::try_from(NavySnapshot::from(&navy)).unwrap();
    assert_eq!(restored, navy);
    assert!(!restored.can_deploy_all());
}

#[test]
fn test_sunk_fleet_roundtrip() {
    let mut navy = played_navy();
    let targets: Vec<Coordinate> = navy
        .ships()
        .iter()
        .flat_map(|s| s.segments().to_vec())
        .collect();
    for target in targets {
        let _ = navy.receive_attack(target);
    }
    assert!(navy.fleet_destroyed());

    let restored = Navy::try_from(NavySnapshot::from(&navy)).unwrap();
    assert!(restored.fleet_destroyed());
    assert_eq!(restored.ships_afloat().count(), 0);
    assert_eq!(restored, navy);
}

#[test]
fn test_garbage_bytes_fail_to_decode() {
    assert!(NavySnapshot::from_bytes(&[1, 2, 3]).is_err());
}
