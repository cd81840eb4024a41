//! # Mission Parsing Tests
//!
//! This module contains unit tests for mission loading and parsing: the
//! line-count rule, header and position decoding, instruction validation,
//! and construction-time bounds and collision checks.

use std::collections::HashSet;
use std::io::Write;

use proptest::prelude::*;
use roversim_core::common::{ErrorKind, Position, SimulationError};
use roversim_core::compass::{Command, Heading};
use roversim_core::sim::parser::{load_mission, parse_mission};
use tempfile::NamedTempFile;

use crate::common::harness::{classic_mission, mission_text};

/// Helper to create a temporary mission file with the given text.
fn create_temp_mission(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_classic_mission() {
    let mission = parse_mission(&classic_mission()).unwrap();
    assert_eq!(mission.plateau.x_max(), 5);
    assert_eq!(mission.plateau.y_max(), 5);
    assert_eq!(mission.rovers.len(), 2);

    let first = &mission.rovers[0];
    assert_eq!(first.id(), 0);
    assert_eq!(first.position(), Position::new(1, 2));
    assert_eq!(first.heading(), Heading::North);
    assert_eq!(first.commands().len(), 9);
    assert_eq!(first.commands()[0], Command::Left);
    assert_eq!(first.commands()[8], Command::Move);

    let second = &mission.rovers[1];
    assert_eq!(second.id(), 1);
    assert_eq!(second.position(), Position::new(3, 3));
    assert_eq!(second.heading(), Heading::East);
    assert_eq!(second.commands().len(), 10);
}

#[test]
fn test_empty_input_fails() {
    let err = parse_mission("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_single_line_fails() {
    let err = parse_mission("5 5\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_even_line_count_fails() {
    let err = parse_mission("5 5\n1 2 N\nLM\n3 3 E\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_header_with_one_token_fails() {
    let err = parse_mission(&mission_text("5", &[("1 1 N", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_header_with_three_tokens_fails() {
    let err = parse_mission(&mission_text("5 5 5", &[("1 1 N", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_non_integer_header_fails() {
    let err = parse_mission(&mission_text("five 5", &[("1 1 N", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_negative_plateau_bound_fails() {
    let err = parse_mission(&mission_text("-5 5", &[("1 1 N", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_malformed_position_line_fails() {
    let err = parse_mission(&mission_text("5 5", &[("1 N", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = parse_mission(&mission_text("5 5", &[("1 one N", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_invalid_heading_letter_fails() {
    let err = parse_mission(&mission_text("5 5", &[("1 1 Q", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// An instruction character outside the alphabet names the rover and the
/// character.
#[test]
fn test_invalid_command_character_fails() {
    let err = parse_mission(&mission_text(
        "5 5",
        &[("1 1 N", "M"), ("2 2 E", "MXM")],
    ))
    .unwrap_err();
    match err {
        SimulationError::InvalidCommand { rover, found } => {
            assert_eq!(rover, 1);
            assert_eq!(found, 'X');
        }
        other => panic!("expected InvalidCommand, got {other:?}"),
    }
}

/// An empty instruction line is a valid (stationary) rover.
#[test]
fn test_empty_instruction_line_is_valid() {
    let mission = parse_mission(&mission_text("5 5", &[("2 1 W", "")])).unwrap();
    assert!(mission.rovers[0].commands().is_empty());
}

/// A starting position past the plateau bounds fails construction.
#[test]
fn test_start_beyond_upper_bounds_fails() {
    let err = parse_mission(&mission_text("3 3", &[("4 4 E", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
}

/// A negative starting coordinate fails construction.
#[test]
fn test_start_below_lower_bounds_fails() {
    let err = parse_mission(&mission_text("3 3", &[("-1 0 N", "M")])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
}

/// Bounds validation runs after all rovers parse and fails on the first
/// violation in input order.
#[test]
fn test_bounds_failure_reports_first_offender() {
    let err = parse_mission(&mission_text(
        "3 3",
        &[("1 1 N", ""), ("9 9 E", ""), ("8 8 S", "")],
    ))
    .unwrap_err();
    match err {
        SimulationError::OutOfBounds { rover, .. } => assert_eq!(rover, 1),
        other => panic!("expected OutOfBounds, got {other:?}"),
    }
}

/// Two rovers sharing a starting cell are rejected as a collision.
#[test]
fn test_duplicate_starting_cell_fails() {
    let err = parse_mission(&mission_text(
        "5 5",
        &[("2 2 N", ""), ("2 2 S", "")],
    ))
    .unwrap_err();
    match err {
        SimulationError::RoverCollision {
            active,
            other,
            position,
        } => {
            assert_eq!(active, 1);
            assert_eq!(other, 0);
            assert_eq!(position, Position::new(2, 2));
        }
        other => panic!("expected RoverCollision, got {other:?}"),
    }
}

/// Reparsing the same text yields identical missions.
#[test]
fn test_parsing_is_idempotent_for_the_classic_mission() {
    let text = classic_mission();
    let first = parse_mission(&text).unwrap();
    let second = parse_mission(&text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_mission_round_trip() {
    let text = classic_mission();
    let file = create_temp_mission(&text);
    let loaded = load_mission(file.path()).unwrap();
    assert_eq!(loaded, text);
}

#[test]
fn test_load_mission_missing_file_fails() {
    let err = load_mission(std::path::Path::new("missions/does_not_exist.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(format!("{err}").contains("does_not_exist.txt"));
}

const HEADINGS: [char; 4] = ['N', 'E', 'S', 'W'];

proptest! {
    /// Parsing is idempotent over generated valid missions.
    #[test]
    fn parsing_is_idempotent(
        rovers in prop::collection::vec(
            ((0i64..=9), (0i64..=9), (0usize..4), "[LRM]{0,12}"),
            1..4,
        )
    ) {
        let mut seen = HashSet::new();
        prop_assume!(rovers.iter().all(|(x, y, _, _)| seen.insert((*x, *y))));

        let mut text = String::from("9 9");
        for (x, y, heading, commands) in &rovers {
            text.push_str(&format!("\n{x} {y} {}\n{commands}", HEADINGS[*heading]));
        }
        text.push('\n');

        let first = parse_mission(&text).unwrap();
        let second = parse_mission(&text).unwrap();
        prop_assert_eq!(first.rovers.len(), rovers.len());
        prop_assert_eq!(first, second);
    }
}
