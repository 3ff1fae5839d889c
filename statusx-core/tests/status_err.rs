//! End-to-end behavior of status errors: wrapping, chain recovery, and the
//! text codec working together.

use std::error::Error;
use std::fmt;
use std::io;

use statusx_core::{
    carry, chain, from_err, from_ref, is, parse, status_class, wrap, ErrorField, ParseError,
    StatusErr, StatusError,
};

#[derive(Debug)]
struct TestError {
    e: StatusErr,
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.e, f)
    }
}

impl Error for TestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.e)
    }
}

impl StatusError for TestError {
    fn status_err(&self) -> &StatusErr {
        &self.e
    }
}

/// Carries a classification while reporting its real cause as `source()`.
#[derive(Debug)]
struct Denied {
    se: StatusErr,
    cause: io::Error,
}

impl fmt::Display for Denied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "denied: {}", self.cause)
    }
}

impl Error for Denied {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

impl StatusError for Denied {
    fn status_err(&self) -> &StatusErr {
        &self.se
    }
}

fn denied() -> Denied {
    Denied {
        se: StatusErr::new("Forbidden", 403, "no"),
        cause: io::Error::other("acl denied"),
    }
}

fn not_found() -> StatusErr {
    StatusErr::new("KEY", 404, "error message")
}

#[test]
fn is_recognizes_direct_and_carried_errors() {
    assert!(!is(None));

    let e1 = not_found();
    assert!(is(Some(&e1)));
    assert!(e1.classifies_as(&e1));

    let e2 = TestError { e: e1.clone() };
    assert!(is(Some(&e2)));

    let e3 = io::Error::other("message");
    assert!(!is(Some(&e3)));
    assert!(!e1.classifies_as(&e3));
}

#[test]
fn from_err_recovers_or_synthesizes() {
    assert!(from_err(None::<io::Error>).is_none());

    let e1 = not_found();
    assert_eq!(from_err(Some(e1.clone())), Some(e1.clone()));
    assert_eq!(from_err(Some(TestError { e: e1.clone() })), Some(e1));

    let recovered = from_err(Some(io::Error::other("message"))).map(|se| se.to_string());
    let expected = StatusErr::unknown(io::Error::other("message")).to_string();
    assert_eq!(recovered.as_deref(), Some(expected.as_str()));
}

#[test]
fn wrap_renders_cause_as_description() {
    let e = StatusErr::wrap("raw", 404, "SpecifiedResourceNotFound", &[]);
    assert_eq!(
        e.to_string(),
        "[]@StatusErr[SpecifiedResourceNotFound][404000000][SpecifiedResourceNotFound] raw"
    );

    let e = StatusErr::wrap("raw", 404, "SpecifiedResourceNotFound", &["msg0", "msg1"]);
    assert_eq!(e.to_string(), "[]@StatusErr[SpecifiedResourceNotFound][404000000][msg0] msg1");
    assert_eq!(e.desc, "msg1");
    assert_eq!(e.cause().map(|c| c.to_string()).as_deref(), Some("raw"));

    assert!(wrap(None::<io::Error>, 404, "AnyKey", &[]).is_none());
}

#[test]
fn wrapped_status_err_stays_findable_through_context() {
    let inner = not_found().append_source("db");
    let outer = StatusErr::wrap(TestError { e: inner.clone() }, 500, "Upstream", &[]);

    let cause = outer.source().expect("wrapped cause must be reachable");
    assert_eq!(chain::find(cause), Some(&inner));
}

#[test]
fn parsed_summary_builds_into_full_form() {
    let se = parse("[src1,src2]@StatusErr[Key][404000001][Message]! talk")
        .expect("summary must parse");
    assert_eq!(se.key, "Key");
    assert_eq!(se.code, 404_000_001);
    assert_eq!(se.msg, "Message");
    assert!(se.can_be_talk);

    let se = se
        .append_source("src1")
        .append_source("src2")
        .with_msg("message")
        .with_desc("desc")
        .with_id("100")
        .append_field("body", "field1", "msg1")
        .append_fields([ErrorField::new("param", "field2", "msg2")])
        .enable_talk();

    let full = "[src1,src2]@StatusErr[Key][404000001][message]!<field1 in body - msg1, field2 in param - msg2> desc";
    assert_eq!(se.to_string(), full);

    let se = se.disable_talk();
    assert_eq!(se.to_string(), full.replace('!', ""));
    assert_eq!(se.status_code(), 404);

    let mut short = se.clone();
    short.code = 10;
    assert_eq!(short.status_code(), 0);
    assert_eq!(status_class(10), 0);
}

#[test]
fn full_form_parses_back_to_its_summary() {
    let se = not_found()
        .append_source("gateway")
        .append_field("query", "page", "not a number")
        .with_desc("lookup failed")
        .enable_talk();

    let back = parse(&se.to_string()).expect("full form must contain a parsable summary");
    assert!(back.classifies_as(&se));
    assert_eq!(back.msg, se.msg);
    assert!(back.can_be_talk);
}

#[test]
fn invalid_summary_reports_its_input() {
    let input = "is_not_a_summary";
    match parse(input) {
        Err(e @ ParseError::Unsupported { .. }) => {
            assert!(e.to_string().contains(input), "got {e}");
        }
        other => panic!("expected Unsupported, got {other:?}"),
    }
}

#[test]
fn json_round_trip_preserves_public_attributes() {
    let se = not_found()
        .with_id("req-7")
        .append_source("svc-a")
        .append_field("body", "name", "required")
        .enable_talk();

    let json = serde_json::to_string(&se).expect("status err should serialize");
    let back: StatusErr = serde_json::from_str(&json).expect("status err should deserialize");
    assert_eq!(back, se);
}

#[test]
fn carried_classification_survives_a_foreign_source() {
    let err = carry(denied());
    assert!(is(Some(&err)));
    assert_eq!(chain::find(&err).map(|se| se.key.as_str()), Some("Forbidden"));
    assert_eq!(from_ref(&err).code, 403_000_000);

    let se = from_err(Some(carry(denied()))).expect("carried error must be recovered");
    assert_eq!(se.key, "Forbidden");
    assert!(StatusErr::new("Forbidden", 403, "other").classifies_as(&carry(denied())));

    let cause = err.source().expect("the carrier's cause must stay reachable");
    assert_eq!(cause.to_string(), "acl denied");
}
