//! Focused unit tests covering argument parsing.

use super::*;
use camino::Utf8PathBuf;
use rstest::rstest;

#[rstest]
fn parses_validate_request_flag() {
    let cli = Cli::try_parse_from(["geopose", "validate", "--request", "request.json"])
        .expect("arguments parse");
    match cli.command {
        Command::Validate(args) => {
            assert_eq!(args.request, Some(Utf8PathBuf::from("request.json")));
            assert_eq!(args.response, None);
        }
        other => panic!("expected validate, found {other:?}"),
    }
}

#[rstest]
fn parses_every_send_flag() {
    let cli = Cli::try_parse_from([
        "geopose",
        "send",
        "--service-url",
        "https://example.com/scr",
        "--request",
        "request.json",
        "--endpoint",
        "objects",
        "--skip-validation",
        "--timeout-secs",
        "5",
    ])
    .expect("arguments parse");
    match cli.command {
        Command::Send(args) => {
            assert_eq!(args.service_url.as_deref(), Some("https://example.com/scr"));
            assert_eq!(args.request, Some(Utf8PathBuf::from("request.json")));
            assert_eq!(args.endpoint.as_deref(), Some("objects"));
            assert!(args.skip_validation);
            assert_eq!(args.timeout_secs, Some(5));
        }
        other => panic!("expected send, found {other:?}"),
    }
}

#[rstest]
#[case(&["geopose"])]
#[case(&["geopose", "locate"])]
#[case(&["geopose", "send", "--timeout-secs", "soon"])]
fn rejects_malformed_invocations(#[case] argv: &[&str]) {
    let err = Cli::try_parse_from(argv)
        .map_err(CliError::ArgumentParsing)
        .expect_err("arguments should be rejected");
    assert!(matches!(err, CliError::ArgumentParsing(_)));
}
