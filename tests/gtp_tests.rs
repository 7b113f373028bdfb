//! GTP session tests: scripted command streams against the engine loop.

use igo::board::Color;
use igo::gtp::GtpEngine;

/// Run a script through a fresh engine and return the responses, one per command.
fn run_script(script: &str) -> (GtpEngine, Vec<String>) {
    let mut engine = GtpEngine::new();
    let mut out = Vec::new();
    engine.run(script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let responses = text
        .split("\n\n")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (engine, responses)
}

#[test]
fn test_ids_comments_and_blank_lines() {
    let (_, responses) = run_script("# a comment\n\n1 protocol_version\nname\n");
    assert_eq!(responses, vec!["=1 2", "= igo"]);
}

#[test]
fn test_unknown_command() {
    let (_, responses) = run_script("7 genmove black\n");
    assert_eq!(responses, vec!["?7 unknown command: genmove"]);
}

#[test]
fn test_capture_sequence() {
    let script = "\
play black B9
play white A9
play black A8
captures white
captures black
history
";
    let (engine, responses) = run_script(script);
    assert_eq!(responses[..3], ["= ", "= ", "= "]);
    assert_eq!(responses[3], "= 1");
    assert_eq!(responses[4], "= 0");
    assert_eq!(responses[5], "= B B9, W A9, B A8");
    assert_eq!(engine.session().board().get(0, 0), Ok(None));
}

#[test]
fn test_forbidden_and_occupied() {
    let script = "\
play black B9
play white E5
play black A8
play white A9
play white E5
";
    let (engine, responses) = run_script(script);
    assert_eq!(responses[3], "? illegal move: forbidden");
    assert_eq!(responses[4], "? illegal move: occupied");
    assert_eq!(engine.session().to_move(), Color::White);
}

#[test]
fn test_territory_and_dead_list() {
    let script = "\
play black B9
play white J1
play black A8
territory
final_status_list dead
final_status_list bogus
";
    let (_, responses) = run_script(script);
    assert_eq!(responses[3], "= black 1 white 0");
    assert_eq!(responses[4], "= ");
    assert_eq!(responses[5], "? invalid status");
}

#[test]
fn test_showboard() {
    let (_, responses) = run_script("play black E5\nshowboard\n");
    let board = &responses[1];
    assert!(board.starts_with("= \n   A B C D E F G H J"));
    assert!(board.contains(" 5 . . . . X . . . ."));
}

#[test]
fn test_quit_stops_loop() {
    let (engine, responses) = run_script("quit\nplay black E5\n");
    assert_eq!(responses, vec!["= "]);
    assert!(engine.session().history().is_empty());
}

#[test]
fn test_clear_board() {
    let (engine, responses) = run_script("play black E5\nclear_board\nplay black D4\n");
    assert!(responses.iter().all(|r| r.starts_with('=')));
    assert_eq!(engine.session().history().len(), 1);
    assert_eq!(engine.session().to_move(), Color::White);
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let mut engine = GtpEngine::new();
    let mut out = Vec::new();
    engine.run(&b"name\n\xff\xfe\nversion\n"[..], &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let responses: Vec<&str> = text.split("\n\n").filter(|s| !s.is_empty()).collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0], "= igo");
    assert!(responses[1].starts_with("? unknown command"));
    assert_eq!(responses[2], format!("= {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_trailing_comments_and_tabs() {
    let (_, responses) = run_script("name # hi\nknown_command # x\n2\tplay\tblack\tE5\r\n");
    assert_eq!(responses, vec!["= igo", "? missing argument", "=2 "]);
}

#[test]
fn test_final_status_list_alive() {
    let script = "\
play black B9
play white A9
play black J1
final_status_list alive
final_status_list dead
";
    let (_, responses) = run_script(script);
    assert_eq!(responses[3], "= A9 B9 J1");
    assert_eq!(responses[4], "= ");
}
