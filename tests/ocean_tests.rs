use navy::{CellState, Coordinate, NavyError, Ocean, Orientation};

#[test]
fn test_filled_and_bounds() {
    let mut ocean = Ocean::filled(4, 2, CellState::Water);
    assert_eq!(ocean.cells().len(), 32);
    assert!(ocean.contains(Coordinate::new(3, 3, 1)));
    assert!(!ocean.contains(Coordinate::new(3, 3, 2)));

    let coord = Coordinate::new(1, 2, 1);
    ocean.set(coord, CellState::Miss).unwrap();
    assert_eq!(ocean.get(coord).unwrap(), CellState::Miss);
    assert_eq!(ocean.count(|s| *s == CellState::Water), 31);

    let outside = Coordinate::new(4, 0, 0);
    assert_eq!(
        ocean.get(outside).unwrap_err(),
        NavyError::OutOfBounds { coordinate: outside }
    );
    assert!(ocean.set(outside, CellState::Hit).is_err());
}

#[test]
fn test_iter_order_is_level_major() {
    let ocean = Ocean::filled(3, 2, CellState::Unknown);
    let coords: Vec<_> = ocean.iter().map(|(c, _)| c).collect();
    assert_eq!(coords[0], Coordinate::new(0, 0, 0));
    assert_eq!(coords[1], Coordinate::new(0, 1, 0));
    assert_eq!(coords[3], Coordinate::new(1, 0, 0));
    assert_eq!(coords[9], Coordinate::new(0, 0, 1));
    assert_eq!(coords[17], Coordinate::new(2, 2, 1));
}

#[test]
fn test_from_cells_checks_length() {
    assert!(Ocean::from_cells(2, 2, vec![CellState::Water; 8]).is_ok());
    assert!(matches!(
        Ocean::from_cells(2, 2, vec![CellState::Water; 7]),
        Err(NavyError::InvalidSnapshot(_))
    ));
    assert!(Ocean::from_cells(usize::MAX, 2, Vec::new()).is_err());
}

#[test]
fn test_display_lists_levels() {
    let mut ocean = Ocean::filled(2, 2, CellState::Water);
    ocean.set(Coordinate::new(0, 1, 1), CellState::Hit).unwrap();
    let text = ocean.to_string();
    assert!(text.contains("level 0"));
    assert!(text.contains("level 1"));
    assert!(text.contains("~ x"));
}

#[test]
fn test_coordinate_offsets() {
    let head = Coordinate::new(2, 3, 1);
    assert_eq!(head.offset(Orientation::Horizontal, 2), Coordinate::new(2, 5, 1));
    assert_eq!(head.offset(Orientation::Vertical, 2), Coordinate::new(4, 3, 1));
    let run: Vec<_> = Orientation::Vertical.segments(head, 3).collect();
    assert_eq!(
        run,
        vec![Coordinate::new(2, 3, 1), Coordinate::new(3, 3, 1), Coordinate::new(4, 3, 1)]
    );
    assert_eq!(Coordinate::from((2, 3, 1)), head);
    assert_eq!(head.to_string(), "(2, 3, 1)");
}
