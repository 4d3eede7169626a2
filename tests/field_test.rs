use lifegrid::{pixel_to_cell, Error, LifeField, Rule};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.5;

#[test]
fn test_determinism() {
    let mut a = LifeField::random(80, 60, Rule::LIFE, Some(SEED), FILL_RATE).unwrap();
    let mut b = LifeField::random(80, 60, Rule::LIFE, Some(SEED), FILL_RATE).unwrap();
    assert_eq!(a.cells(), b.cells());

    a.update(32);
    b.update(32);
    assert_eq!(a.cells(), b.cells());
}

#[test]
fn test_lone_cell_dies() {
    let mut field = LifeField::blank(3, 3, Rule::LIFE).unwrap();
    field.set(1, 1, true);

    field.step();
    assert!(field.cells().iter().all(|&alive| !alive));
}

#[test]
fn test_block_is_a_still_life() {
    let mut field = LifeField::blank(6, 6, Rule::LIFE).unwrap();
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        field.set(x, y, true);
    }
    let before = field.cells().to_vec();

    for generation in 0..5 {
        field.step();
        assert_eq!(field.cells(), &before[..], "generation={generation}");
    }
}

#[test]
fn test_blinker_oscillates() {
    let mut field = LifeField::blank(5, 5, Rule::LIFE).unwrap();
    for x in 1..4 {
        field.set(x, 2, true);
    }
    let horizontal = field.cells().to_vec();

    // one step turns the row into a column
    field.step();
    for y in 0..5 {
        for x in 0..5 {
            let expected = x == 2 && (1..4).contains(&y);
            assert_eq!(field.get(x, y), expected, "x={x} y={y}");
        }
    }

    field.step();
    assert_eq!(field.cells(), &horizontal[..]);
}

#[test]
fn test_neighbor_count_is_clamped_at_the_edges() {
    let mut field = LifeField::blank(4, 4, Rule::LIFE).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            field.set(x, y, true);
        }
    }

    // even on a fully live field, corners only see their 3 real neighbors
    assert_eq!(field.neighbor_count(0, 0), 3);
    assert_eq!(field.neighbor_count(3, 0), 3);
    assert_eq!(field.neighbor_count(0, 3), 3);
    assert_eq!(field.neighbor_count(3, 3), 3);
    // edges see 5, interior cells the full 8
    assert_eq!(field.neighbor_count(1, 0), 5);
    assert_eq!(field.neighbor_count(0, 2), 5);
    assert_eq!(field.neighbor_count(1, 1), 8);
}

#[test]
fn test_no_wraparound() {
    let mut field = LifeField::blank(5, 5, Rule::LIFE).unwrap();
    for y in 0..5 {
        field.set(0, y, true);
    }

    // a live column on the left edge is invisible from the right edge
    for y in 0..5 {
        assert_eq!(field.neighbor_count(4, y), 0);
    }
    field.step();
    for y in 0..5 {
        assert!(!field.get(4, y));
    }
}

#[test]
fn test_double_toggle_restores_the_field() {
    let mut field = LifeField::random(10, 8, Rule::LIFE, Some(SEED), FILL_RATE).unwrap();
    let before = field.cells().to_vec();

    field.toggle(4, 5).unwrap();
    assert_eq!(field.get(4, 5), !before[4 + 5 * 10]);
    let flipped = field
        .cells()
        .iter()
        .zip(before.iter())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(flipped, 1);

    field.toggle(4, 5).unwrap();
    assert_eq!(field.cells(), &before[..]);
}

#[test]
fn test_out_of_bounds_toggle_is_rejected() {
    let mut field = LifeField::random(10, 8, Rule::LIFE, Some(SEED), FILL_RATE).unwrap();
    let before = field.cells().to_vec();

    for (x, y) in [(10, 0), (0, 8), (10, 8), (usize::MAX, usize::MAX)] {
        let err = field.toggle(x, y).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }), "({x}, {y}): {err}");
    }
    assert_eq!(field.cells(), &before[..]);
}

#[test]
fn test_zero_dimensions_are_rejected() {
    for (w, h) in [(0, 10), (10, 0), (0, 0)] {
        let result = LifeField::blank(w, h, Rule::LIFE);
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }
}

#[test]
fn test_fill_rate_is_validated() {
    for fill_rate in [-0.1, 1.5] {
        let result = LifeField::random(4, 4, Rule::LIFE, Some(SEED), fill_rate);
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }
}

#[test]
fn test_custom_rule_drives_the_step() {
    // B1/S1..8: the lone cell starves while all 8 of its neighbors are born
    let rule = Rule::new(1, 1, 8).unwrap();
    let mut field = LifeField::blank(5, 5, rule).unwrap();
    field.set(2, 2, true);

    field.step();
    assert!(!field.get(2, 2));
    for (x, y) in [
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ] {
        assert!(field.get(x, y), "x={x} y={y}");
    }
    assert_eq!(field.cells().iter().filter(|&&alive| alive).count(), 8);
}

#[test]
fn test_iter_cells_matches_get() {
    let field = LifeField::random(7, 5, Rule::LIFE, Some(SEED), 0.3).unwrap();

    let mut count = 0;
    for (x, y, alive) in field.iter_cells() {
        assert_eq!(alive, field.get(x, y), "x={x} y={y}");
        count += 1;
    }
    assert_eq!(count, 35);
}

#[test]
fn test_pixel_to_cell_floor_mapping() {
    assert_eq!(pixel_to_cell(0, 0, 10, 10), (0, 0));
    assert_eq!(pixel_to_cell(9, 9, 10, 10), (0, 0));
    assert_eq!(pixel_to_cell(10, 9, 10, 10), (1, 0));
    assert_eq!(pixel_to_cell(795, 599, 10, 10), (79, 59));

    // pixels left of or above the origin land in negative cells
    assert_eq!(pixel_to_cell(-1, 5, 10, 10), (-1, 0));
    assert_eq!(pixel_to_cell(-10, -11, 10, 10), (-1, -2));
}
