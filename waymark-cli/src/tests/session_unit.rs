//! Focused unit tests covering prompt parsing and the session loop.

use super::*;
use geo::Coord;
use rstest::rstest;
use waymark_core::test_support::{
    StubDirectionsProvider, StubGeocoder, block_on_for_tests, path_with_distance,
};

use crate::session::{SessionCommand, SessionConfig, parse_command, run_session_with};

#[rstest]
fn session_config_applies_service_defaults() {
    let config = SessionConfig::from(SessionArgs::default());
    assert_eq!(
        config.service.geocoder_url,
        "https://nominatim.openstreetmap.org"
    );
    assert_eq!(config.service.directions_url, "http://localhost:5000");
    assert_eq!(config.service.timeout_secs, None);
    assert_eq!(config.service.user_agent, None);
}

#[rstest]
#[case::add("add Castle Square 1", SessionCommand::Add("Castle Square 1"))]
#[case::add_bare("add", SessionCommand::Add(""))]
#[case::route_padded(" route ", SessionCommand::Route)]
#[case::clear("clear", SessionCommand::Clear)]
#[case::list("list", SessionCommand::List)]
#[case::help("help", SessionCommand::Help)]
#[case::quit("quit", SessionCommand::Quit)]
#[case::exit_alias("exit", SessionCommand::Quit)]
#[case::empty("   ", SessionCommand::Empty)]
#[case::unknown("fly me", SessionCommand::Unknown("fly"))]
fn parses_prompt_lines(#[case] line: &str, #[case] expected: SessionCommand<'_>) {
    assert_eq!(parse_command(line), expected);
}

#[rstest]
fn session_walkthrough_covers_adding_planning_and_clearing() {
    let geocoder = StubGeocoder::new()
        .with_entry(
            "Castle Square 1",
            Coord {
                x: 25.2798,
                y: 54.6872,
            },
        )
        .with_entry(
            "Harbour Lane 7",
            Coord {
                x: 25.2867,
                y: 54.6834,
            },
        )
        .with_entry(
            "Old Mill 12",
            Coord {
                x: 25.2985,
                y: 54.6796,
            },
        );
    let directions = StubDirectionsProvider::new()
        .with_candidates(vec![path_with_distance(5.0), path_with_distance(3.2)])
        .with_candidates(vec![path_with_distance(4.0)]);
    let input: &[u8] = b"help\nadd Castle Square 1\nadd Harbour Lane 7\nlist\nroute\nadd Old Mill 12\nroute\nclear\nquit\n";
    let mut buffer = Vec::new();
    block_on_for_tests(run_session_with(geocoder, directions, input, &mut buffer))
        .expect("session should run to completion");
    let output = String::from_utf8(buffer).expect("utf-8 output");
    assert!(output.contains("add <address>"));
    assert!(output.contains(" 1. Castle Square 1 (54.68720, 25.27980)"));
    assert!(output.contains(" 2. Harbour Lane 7"));
    assert!(output.contains("need at least 3 stops (have 2)"));
    assert!(output.contains("segment 1: 3.2 m (2 points)"));
    assert!(output.contains("segment 2: 4.0 m (2 points)"));
    assert!(output.contains("route complete: 2 segments, 7.2 m"));
    assert!(output.contains("cleared all waypoints and paths"));
}

#[rstest]
fn session_continues_after_unknown_commands_and_failed_lookups() {
    let input: &[u8] = b"fly\nadd Atlantis\nadd\nquit\n";
    let mut buffer = Vec::new();
    block_on_for_tests(run_session_with(
        StubGeocoder::new(),
        StubDirectionsProvider::new(),
        input,
        &mut buffer,
    ))
    .expect("session should survive bad input");
    let output = String::from_utf8(buffer).expect("utf-8 output");
    assert!(output.contains("unknown command \"fly\" (try help)"));
    assert!(output.contains("error: no location found for \"Atlantis\""));
    assert!(output.contains("error: address text must not be empty"));
}

#[rstest]
fn session_refuses_clear_before_enough_stops() {
    let input: &[u8] = b"clear\nquit\n";
    let mut buffer = Vec::new();
    block_on_for_tests(run_session_with(
        StubGeocoder::new(),
        StubDirectionsProvider::new(),
        input,
        &mut buffer,
    ))
    .expect("session should refuse and continue");
    let output = String::from_utf8(buffer).expect("utf-8 output");
    assert!(output.contains("need at least 3 stops (have 0)"));
}

#[rstest]
fn session_lists_a_placeholder_before_any_stops() {
    let input: &[u8] = b"list\nquit\n";
    let mut buffer = Vec::new();
    block_on_for_tests(run_session_with(
        StubGeocoder::new(),
        StubDirectionsProvider::new(),
        input,
        &mut buffer,
    ))
    .expect("session should list and continue");
    let output = String::from_utf8(buffer).expect("utf-8 output");
    assert!(output.contains("no stops yet (try add <address>)"));
}

#[rstest]
fn session_ends_at_end_of_input() {
    let input: &[u8] = b"";
    let mut buffer = Vec::new();
    block_on_for_tests(run_session_with(
        StubGeocoder::new(),
        StubDirectionsProvider::new(),
        input,
        &mut buffer,
    ))
    .expect("empty input should end the session");
    assert_eq!(
        String::from_utf8(buffer).expect("utf-8 output"),
        "waymark> "
    );
}
