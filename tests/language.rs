use std::{
    fs, io,
    sync::{Arc, Mutex},
    thread,
};

use prattle::{
    ErrorKind, Failure, Session, SessionConfig, Stage,
    interpreter::parser::DEFAULT_MAX_DEPTH,
    reset_session, submit,
};
use tracing::Level;

fn value_of(src: &str, session: &mut Session) -> f64 {
    match submit(src, session) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("{src:?} produced no value"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn failure_of(src: &str, session: &mut Session) -> Failure {
    match submit(src, session) {
        Err(failure) => failure,
        Ok(value) => panic!("{src:?} produced {value:?} but was expected to fail"),
    }
}

fn assert_value(src: &str, expected: f64) {
    let actual = value_of(src, &mut Session::new());
    assert!((actual - expected).abs() < 1e-9, "{src:?} = {actual}, expected {expected}");
}

fn assert_failure(src: &str, stage: Stage, kind: ErrorKind) {
    let failure = failure_of(src, &mut Session::new());
    assert_eq!((failure.stage, failure.kind), (stage, kind), "{src:?}: {failure}");
}

#[test]
fn script_examples_work() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/example.calc");
    let script = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    let mut session = Session::new();
    let mut count = 0;

    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (expression, expected) =
            line.split_once("=>")
                .unwrap_or_else(|| panic!("Line {} has no expected value", index + 1));
        let expected: f64 = expected.trim()
                                    .parse()
                                    .unwrap_or_else(|e| panic!("Line {}: {e}", index + 1));
        let actual = value_of(expression, &mut session);

        count += 1;
        assert!((actual - expected).abs() < 1e-9,
                "Line {}: {expression} = {actual}, expected {expected}",
                index + 1);
    }

    assert!(count > 0, "No examples found in {path}");
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("12 / 3 / 2", 2.0);
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("-2 ^ 2", 4.0);
    assert_value("-(2 ^ 2)", -4.0);
    assert_value("2 ^ -1", 0.5);
    assert_value("--3", 3.0);
}

#[test]
fn functions() {
    assert_value("sqrt(16) + 1", 5.0);
    assert_value("exp(0) * cos(0)", 1.0);
    assert_value("log(exp(2))", 2.0);
    assert_value("sin(0)", 0.0);
}

#[test]
fn number_literals_round_trip() {
    for literal in ["0", "7", "42", "0.5", "2.75", "1000000"] {
        assert_value(literal, literal.parse().unwrap());
    }
}

#[test]
fn variables_persist_until_reset() {
    let mut session = Session::new();

    assert_eq!(submit("x = 5", &mut session), Ok(Some(5.0)));
    assert_eq!(submit("x * 2", &mut session), Ok(Some(10.0)));
    assert_eq!(session.environment().get("x"), Some(5.0));

    reset_session(&mut session);

    let failure = failure_of("x * 2", &mut session);
    assert_eq!(failure.stage, Stage::Eval);
    assert_eq!(failure.kind, ErrorKind::UndefinedVariable);
    assert!(session.environment().is_empty());
}

#[test]
fn reevaluation_is_idempotent_without_assignment() {
    let mut session = Session::new();
    submit("a = 3", &mut session).unwrap();

    let first = submit("a ^ 2 + sqrt(a)", &mut session);
    let second = submit("a ^ 2 + sqrt(a)", &mut session);

    assert_eq!(first, second);
}

#[test]
fn assignment_inside_expressions() {
    let mut session = Session::new();

    assert_eq!(value_of("y = sqrt(x = 16) + 1", &mut session), 5.0);
    assert_eq!(session.environment().bindings(), vec![("x", 16.0), ("y", 5.0)]);
    assert_eq!(value_of("a = b = 2", &mut session), 2.0);
    assert_eq!(value_of("a + b", &mut session), 4.0);
}

#[test]
fn failed_reassignment_keeps_old_value() {
    let mut session = Session::new();
    submit("x = 1", &mut session).unwrap();

    let failure = failure_of("x = 1 / 0", &mut session);

    assert_eq!(failure.kind, ErrorKind::DivisionByZero);
    assert_eq!(value_of("x", &mut session), 1.0);
}

#[test]
fn blank_input_produces_nothing() {
    let mut session = Session::new();

    assert_eq!(submit("", &mut session), Ok(None));
    assert_eq!(submit(" \t ", &mut session), Ok(None));
    assert!(session.environment().is_empty());
}

#[test]
fn lex_failures() {
    assert_failure("2 $ 3", Stage::Lex, ErrorKind::InvalidCharacter);
    assert_failure("3. + 1", Stage::Lex, ErrorKind::MalformedNumber);
    assert_failure(".5", Stage::Lex, ErrorKind::MalformedNumber);
}

#[test]
fn parse_failures() {
    assert_failure("2 +", Stage::Parse, ErrorKind::UnexpectedToken);
    assert_failure("* 2", Stage::Parse, ErrorKind::UnexpectedToken);
    assert_failure("(1 + 2", Stage::Parse, ErrorKind::MissingParenthesis);
    assert_failure("sqrt 4", Stage::Parse, ErrorKind::MissingParenthesis);
    assert_failure("2 = 3", Stage::Parse, ErrorKind::InvalidAssignmentTarget);
    assert_failure("1 2", Stage::Parse, ErrorKind::TrailingToken);
}

#[test]
fn parse_failure_binds_nothing() {
    let mut session = Session::new();

    failure_of("x = (1 + 2", &mut session);

    assert!(session.environment().is_empty());
}

#[test]
fn eval_failures() {
    assert_failure("1 / 0", Stage::Eval, ErrorKind::DivisionByZero);
    assert_failure("1 / (2 - 2)", Stage::Eval, ErrorKind::DivisionByZero);
    assert_failure("sqrt(-1)", Stage::Eval, ErrorKind::MathDomain);
    assert_failure("log(0)", Stage::Eval, ErrorKind::MathDomain);
    assert_failure("10 ^ 400", Stage::Eval, ErrorKind::MathDomain);
    assert_failure("missing + 1", Stage::Eval, ErrorKind::UndefinedVariable);
}

#[test]
fn failure_display() {
    let failure = failure_of("1 / 0", &mut Session::new());
    assert_eq!(failure.to_string(), "DivisionByZeroError (eval): Division by zero.");

    let failure = failure_of("2 # 2", &mut Session::new());
    assert_eq!(failure.to_string(),
               "InvalidCharacterError (lex): Invalid character '#' at position 2.");
}

#[test]
fn nesting_limit_follows_the_session_config() {
    let config = SessionConfig { max_depth: 8 };
    let mut session = Session::with_config(config);

    let shallow = format!("{}1{}", "(".repeat(4), ")".repeat(4));
    let deep = format!("{}1{}", "(".repeat(10), ")".repeat(10));

    assert_eq!(session.config(), config);
    assert_eq!(submit(&shallow, &mut session), Ok(Some(1.0)));

    let failure = failure_of(&deep, &mut session);
    assert_eq!(failure.stage, Stage::Parse);
    assert_eq!(failure.kind, ErrorKind::ExpressionTooComplex);
}

#[test]
fn long_sums_evaluate_within_the_default_limit() {
    let sum = vec!["1"; DEFAULT_MAX_DEPTH].join(" + ");

    assert_value(&sum, DEFAULT_MAX_DEPTH as f64);
}

#[test]
fn huge_flat_sum_fails_instead_of_aborting() {
    let sum = vec!["1"; 200_000].join("+");
    let failure = failure_of(&sum, &mut Session::new());

    assert_eq!((failure.stage, failure.kind), (Stage::Parse, ErrorKind::ExpressionTooComplex));
}

#[test]
fn debug_logging_of_tall_trees() {
    let subscriber = tracing_subscriber::fmt().with_max_level(Level::DEBUG)
                                              .with_writer(io::sink)
                                              .finish();
    let tallest = vec!["1"; DEFAULT_MAX_DEPTH].join(" + ");
    let huge = vec!["1"; 200_000].join("+");

    let (tallest, huge) = tracing::subscriber::with_default(subscriber, || {
        let mut session = Session::new();
        (submit(&tallest, &mut session), submit(&huge, &mut session))
    });

    assert_eq!(tallest, Ok(Some(DEFAULT_MAX_DEPTH as f64)));
    assert_eq!(huge.map_err(|failure| failure.kind), Err(ErrorKind::ExpressionTooComplex));
}

#[test]
fn out_of_range_literal_is_a_lex_failure() {
    let huge = "9".repeat(310);

    assert_failure(&huge, Stage::Lex, ErrorKind::MalformedNumber);
    assert_failure(&format!("x = {huge}"), Stage::Lex, ErrorKind::MalformedNumber);
}

#[test]
fn session_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Session>();
    assert_send::<Failure>();
}

#[test]
fn shared_session_serializes_submissions() {
    let session = Arc::new(Mutex::new(Session::new()));
    submit("n = 0", &mut session.lock().unwrap()).unwrap();

    let handles = (0..8).map(|_| {
                            let session = Arc::clone(&session);
                            thread::spawn(move || {
                                for _ in 0..25 {
                                    submit("n = n + 1", &mut session.lock().unwrap()).unwrap();
                                }
                            })
                        })
                        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(value_of("n", &mut session.lock().unwrap()), 200.0);
}
