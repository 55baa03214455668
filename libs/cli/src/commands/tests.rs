use super::*;
use config::constants::SessionConfig;

fn output_of(run: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn run_interactive(input: &str) -> (String, Session) {
    let mut session = Session::default();
    let text = output_of(|out| interactive(input.as_bytes(), out, &mut session));
    (text, session)
}

#[test]
fn generate_reports_box_and_verdict() {
    let text = output_of(|out| generate(out, ParameterTriple::new(2, 1, 1), false));
    assert!(text.contains("Parameters: (m=2, n=1, k=1)"));
    assert!(text.contains("Box: 4x2x4 (d=6)"));
    assert!(text.contains("Primitive? No (GCD=2)"));
    assert!(text.contains("Scene: DERIVED Box: 4x2x4 (axes 0 to 4)"));
}

#[test]
fn generate_json() {
    let text = output_of(|out| generate(out, ParameterTriple::new(1, 1, 1), true));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["dimensions"]["d"], 3);
    assert_eq!(value["label"], "Yes");
}

#[test]
fn generate_rejects_invalid_parameters() {
    let mut out = Vec::new();
    let err = generate(&mut out, ParameterTriple::new(1, 1, 2), false).unwrap_err();
    assert!(err.to_string().starts_with("Invalid parameters"));
    assert!(out.is_empty());
}

#[test]
fn check_prints_gcd() {
    let text = output_of(|out| check(out, 4, 2, 4));
    assert_eq!(text, "gcd(4, 2, 4) = 2\nPrimitive? No (GCD=2)\n");
}

#[test]
fn check_accepts_i64_min() {
    let text = output_of(|out| check(out, i64::MIN, 0, 0));
    assert_eq!(
        text,
        "gcd(-9223372036854775808, 0, 0) = 9223372036854775808\n\
         Primitive? No (GCD=9223372036854775808)\n"
    );
}

#[test]
fn geometry_lists_corners_and_edges() {
    let text = output_of(|out| geometry(out, 4.0, 2.0, 4.0, false));
    assert!(text.contains("  6: (4, 2, 4)"));
    assert!(text.contains("  3 - 7"));
    assert!(text.contains("Diagonal length: 6"));
    assert_eq!(text.lines().filter(|l| l.contains(" - ")).count(), 12);
}

#[test]
fn geometry_json() {
    let text = output_of(|out| geometry(out, 1.0, 2.0, 3.0, true));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["vertices"].as_array().unwrap().len(), 8);
    assert_eq!(value["edges"].as_array().unwrap().len(), 12);
}

#[test]
fn parse_accepts_spaces_and_commas() {
    assert_eq!(parse_parameters("2 1 1"), Some(ParameterTriple::new(2, 1, 1)));
    assert_eq!(parse_parameters(" 3, 2, -1 "), Some(ParameterTriple::new(3, 2, -1)));
}

#[test]
fn parse_rejects_malformed_lines() {
    assert_eq!(parse_parameters("2 1"), None);
    assert_eq!(parse_parameters("2 1 1 1"), None);
    assert_eq!(parse_parameters("a b c"), None);
    assert_eq!(parse_parameters("1.5 1 1"), None);
}

#[test]
fn interactive_records_accepted_lines() {
    let (text, session) = run_interactive("1 1 1\n2 1 1\nquit\n3 2 1\n");

    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().latest().unwrap().parameters.m, 2);
    assert!(text.contains("Scene: PRIMITIVE Box: 2x2x1"));
    assert!(text.contains("Diagonal (d)"));
}

#[test]
fn interactive_reports_rejections_and_continues() {
    let (text, session) = run_interactive("2 1 0\n1 1 2\nhello\n2 1 1\n");

    assert!(text.contains("Invalid parameters: the value of 'k' must be nonzero"));
    assert!(text.contains("m² + n² (2) must be greater than k² (4)"));
    assert_eq!(text.matches(INTERACTIVE_HELP).count(), 2);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn interactive_history_and_clear() {
    let (text, session) = run_interactive("history\n2 1 1\nclear\nhistory\n");

    assert_eq!(text.matches("History is empty.").count(), 2);
    assert!(text.contains("History cleared."));
    assert!(session.history().is_empty());
}

#[test]
fn interactive_applies_session_limit() {
    let mut session = Session::new(SessionConfig::new(5).unwrap());
    let text = output_of(|out| interactive("6 1 1\n".as_bytes(), out, &mut session));

    assert!(text.contains("exceeds the supported magnitude 5"));
    assert!(session.history().is_empty());
}
