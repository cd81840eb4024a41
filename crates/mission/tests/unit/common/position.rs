//! # Position and Plateau Tests
//!
//! This module contains unit tests for the `Position` and `Plateau` types.
//! It verifies coordinate construction, unit translations, and the bounds
//! predicate that underpins all boundary enforcement.

use roversim_core::common::{Plateau, Position};

/// Tests the creation of a [`Position`] and verifies field access.
#[test]
fn position_new_and_fields() {
    let position = Position::new(3, 7);
    assert_eq!(position.x, 3);
    assert_eq!(position.y, 7);
}

/// Tests that `translated` shifts both axes and leaves the original intact.
#[test]
fn position_translated() {
    let position = Position::new(2, 2);
    assert_eq!(position.translated(1, 0), Position::new(3, 2));
    assert_eq!(position.translated(0, -1), Position::new(2, 1));
    assert_eq!(position, Position::new(2, 2));
}

/// Tests that positions render as a coordinate pair for error messages.
#[test]
fn position_display() {
    assert_eq!(Position::new(4, 1).to_string(), "(4, 1)");
}

/// Tests that negative coordinates are representable; bounds enforcement
/// depends on observing them.
#[test]
fn position_allows_negative_coordinates() {
    let position = Position::new(0, 0).translated(-1, 0);
    assert_eq!(position, Position::new(-1, 0));
}

/// Tests that a plateau contains its interior and all four corners.
#[test]
fn plateau_contains_interior_and_corners() {
    let plateau = Plateau::new(5, 5);
    assert!(plateau.contains(Position::new(2, 3)));
    assert!(plateau.contains(Position::new(0, 0)));
    assert!(plateau.contains(Position::new(5, 0)));
    assert!(plateau.contains(Position::new(0, 5)));
    assert!(plateau.contains(Position::new(5, 5)));
}

/// Tests that each side of the boundary excludes positions one step outside.
#[test]
fn plateau_excludes_positions_outside_each_side() {
    let plateau = Plateau::new(5, 5);
    assert!(!plateau.contains(Position::new(6, 0)));
    assert!(!plateau.contains(Position::new(0, 6)));
    assert!(!plateau.contains(Position::new(-1, 0)));
    assert!(!plateau.contains(Position::new(0, -1)));
}

/// Tests that a zero-extent plateau contains only the origin.
#[test]
fn plateau_zero_extent_contains_only_origin() {
    let plateau = Plateau::new(0, 0);
    assert!(plateau.contains(Position::new(0, 0)));
    assert!(!plateau.contains(Position::new(1, 0)));
    assert!(!plateau.contains(Position::new(0, 1)));
}

/// Tests the bound accessors and display format.
#[test]
fn plateau_accessors_and_display() {
    let plateau = Plateau::new(3, 8);
    assert_eq!(plateau.x_max(), 3);
    assert_eq!(plateau.y_max(), 8);
    assert_eq!(plateau.to_string(), "3 x 8");
}
