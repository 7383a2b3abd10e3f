//! Integration tests for the matching protocol.
//!
//! These drive the harness the way a test suite would: run an operation
//! under test, capture the outcome, and verify it against a prebuilt
//! expectation.

use verdict::{Expectation, Failure, FailureKind, MatchContext};

/// A stand-in operation under test: reads a signed payload, failing the
/// way a token reader would.
fn read_signed_payload(payload: &str) -> Result<String, Failure> {
    if payload.is_empty() {
        return Err(Failure::new(
            FailureKind::NullArgument,
            "IDX10000: value must not be null",
        ));
    }
    if !payload.starts_with("<xml") {
        return Err(Failure::new(
            FailureKind::XmlRead,
            "IDX30019: unable to read element",
        )
        .with_inner(Failure::new(
            FailureKind::InvalidArgument,
            "IDX10001: malformed prefix",
        )));
    }
    Ok(payload.to_string())
}

#[test]
fn read_signed_payload_cases() {
    let cases = vec![
        (
            "null_payload",
            "",
            Expectation::null_argument().with_substring("IDX10000:"),
        ),
        (
            "malformed_payload",
            "junk",
            Expectation::xml_read()
                .with_substring("IDX30019:")
                .with_inner(FailureKind::InvalidArgument),
        ),
        ("valid_payload", "<xml/>", Expectation::none()),
    ];

    for (test_id, payload, expectation) in cases {
        let mut ctx = MatchContext::new(test_id);
        expectation.check(read_signed_payload(payload), &mut ctx);
        ctx.assert_clean();
    }
}

#[test]
fn mismatches_accumulate_across_checks() {
    let mut ctx = MatchContext::new("accumulated");

    // Wrong expectation for each outcome: every check records a diff and
    // none of them stops the run.
    Expectation::expired().check(read_signed_payload("<xml/>"), &mut ctx);
    Expectation::none().check(read_signed_payload(""), &mut ctx);
    Expectation::io().check(read_signed_payload("junk"), &mut ctx);

    assert_eq!(ctx.diffs.len(), 3);
    assert!(ctx.diffs[0].contains("Expired"));
    assert!(ctx.diffs[1].contains("none was expected"));
    assert!(ctx.diffs[2].contains("kind mismatch"));
}

#[test]
#[should_panic(expected = "wrong_expectation")]
fn assert_clean_fails_the_test() {
    let mut ctx = MatchContext::new("wrong_expectation");
    Expectation::expired().check(read_signed_payload("<xml/>"), &mut ctx);
    ctx.assert_clean();
}

#[test]
fn factory_round_trip() {
    let expected = Expectation::expired().with_substring("IDX10223:");

    let failure = Failure::new(FailureKind::Expired, "IDX10223: token expired");
    assert!(expected.match_failure(Some(&failure)).is_empty());

    // The same expectation rejects every other kind.
    for kind in FailureKind::all() {
        if *kind == FailureKind::Expired {
            continue;
        }
        let failure = Failure::new(*kind, "IDX10223: token expired");
        let diffs = expected.match_failure(Some(&failure));
        assert_eq!(diffs.len(), 1, "kind {} should mismatch", kind);
        assert!(diffs[0].contains("kind mismatch"));
    }
}

#[test]
fn fail_fast_mode_panics_like_accumulate_mode_reports() {
    let failure = Failure::new(FailureKind::NotYetValid, "IDX10222: not yet valid");
    let expected = Expectation::expired();

    let diffs = expected.match_failure(Some(&failure));
    assert_eq!(diffs.len(), 1);

    let caught = std::panic::catch_unwind(|| {
        expected.assert_failure(Some(&failure));
    });
    let message = *caught.unwrap_err().downcast::<String>().unwrap();
    assert!(message.contains(&diffs[0]));
}

#[cfg(feature = "yaml")]
mod records {
    use super::*;
    use verdict::load_cases;

    const CASES_YAML: &str = r#"
- test_id: null_payload
  expectation:
    kind: null-argument
    substring: "IDX10000:"
- test_id: malformed_payload
  expectation:
    kind: xml-read
    substring: "IDX30019:"
    inner_kind: invalid-argument
- test_id: valid_payload
  expectation: {}
"#;

    fn payload_for(test_id: &str) -> &'static str {
        match test_id {
            "null_payload" => "",
            "malformed_payload" => "junk",
            "valid_payload" => "<xml/>",
            other => panic!("unknown test_id: {}", other),
        }
    }

    #[test]
    fn cases_load_from_disk_and_verify() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("read_signed_payload.yaml");
        std::fs::write(&path, CASES_YAML).unwrap();

        let cases = load_cases(&path).unwrap();
        assert_eq!(cases.len(), 3);

        for case in cases {
            let mut ctx = MatchContext::new(case.test_id.clone());
            let expectation = case.expectation.into_expectation().unwrap();
            expectation.check(read_signed_payload(payload_for(&case.test_id)), &mut ctx);
            ctx.assert_clean();
        }
    }

    #[test]
    fn missing_cases_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(load_cases(&path).is_err());
    }
}
