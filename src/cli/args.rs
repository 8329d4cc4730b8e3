use clap::{ArgAction, Parser};

/// Command-line flags for gchl.
///
/// `-h`, `-v` and `-V` belong to changelog options, so clap's automatic
/// short help flag is disabled and help is only reachable as `--help`.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "gchl",
    about = "Validate changelog-generation parameters for a GitHub repository",
    disable_help_flag = true
)]
pub struct Args {
    #[arg(short = 'o', long, default_value = "", help = "Name of the GitHub organization")]
    pub organization: String,

    #[arg(short = 'r', long, default_value = "", help = "Name of the repository")]
    pub repository: String,

    #[arg(
        short = 'v',
        long = "for-version",
        default_value = "",
        help = "Name of the release to generate the changelog for"
    )]
    pub for_version: String,

    #[arg(
        short = 'e',
        long,
        default_value = "",
        help = "Commit hash where to stop (instead of following the branch until the previous version)"
    )]
    pub end: String,

    #[arg(
        short = 's',
        long = "single-release-branch",
        default_value = "",
        help = "Name of the main branch, if you use a single branch for releases (leave empty to proceed with release branches)"
    )]
    pub single_release_branch: String,

    #[arg(
        short = 'h',
        long = "from-hash",
        default_value = "",
        help = "creates a changelog from the hash to the next tag (only works with single-release-branch option)"
    )]
    pub from_hash: String,

    #[arg(short = 'V', long, help = "Enable more verbose logging")]
    pub verbose: bool,

    #[arg(long, action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,
}
