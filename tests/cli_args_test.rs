// tests/cli_args_test.rs
use clap::Parser;
use gchl::cli::Args;

#[test]
fn test_short_aliases() {
    let args = Args::try_parse_from([
        "gchl", "-o", "kubermatic", "-r", "dashboard", "-v", "v2.21.0", "-e", "abc1234", "-s",
        "main", "-h", "def5678", "-V",
    ])
    .unwrap();

    assert_eq!(args.organization, "kubermatic");
    assert_eq!(args.repository, "dashboard");
    assert_eq!(args.for_version, "v2.21.0");
    assert_eq!(args.end, "abc1234");
    assert_eq!(args.single_release_branch, "main");
    assert_eq!(args.from_hash, "def5678");
    assert!(args.verbose);
}

#[test]
fn test_long_flags() {
    let args = Args::try_parse_from([
        "gchl",
        "--organization",
        "kubermatic",
        "--repository",
        "dashboard",
        "--for-version",
        "1.0.0",
        "--end",
        "abc1234",
        "--single-release-branch",
        "main",
        "--from-hash",
        "def5678",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(args.organization, "kubermatic");
    assert_eq!(args.for_version, "1.0.0");
    assert_eq!(args.from_hash, "def5678");
    assert!(args.verbose);
}

#[test]
fn test_short_h_is_from_hash_not_help() {
    let args = Args::try_parse_from(["gchl", "-h", "abc123"]).unwrap();
    assert_eq!(args.from_hash, "abc123");
}

#[test]
fn test_long_help_still_available() {
    let err = Args::try_parse_from(["gchl", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    let help = err.to_string();
    assert!(help.contains("--from-hash"));
    assert!(help.contains("Name of the GitHub organization"));
}

#[test]
fn test_no_token_flag() {
    assert!(Args::try_parse_from(["gchl", "--token", "secret"]).is_err());
}

#[test]
fn test_verbose_takes_no_value() {
    let args = Args::try_parse_from(["gchl", "-V", "-o", "org"]).unwrap();
    assert!(args.verbose);
    assert_eq!(args.organization, "org");
}
